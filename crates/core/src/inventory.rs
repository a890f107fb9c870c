//! Inventory categories and the record-creation request.
//!
//! Category names must match the `ck_inventory_update_records_category`
//! check constraint in the initial migration.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

pub const CATEGORY_CIGARETTE: &str = "cigarette";
pub const CATEGORY_GARBAGE_BAG: &str = "garbage_bag";
pub const CATEGORY_GIFT_CARD: &str = "gift_card";

/// All known categories, in display order.
pub const CATEGORIES: &[&str] = &[CATEGORY_CIGARETTE, CATEGORY_GARBAGE_BAG, CATEGORY_GIFT_CARD];

/// Whether `category` is one of [`CATEGORIES`].
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Reject unknown categories with a validation error.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_known_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown inventory category: {category}"
        )))
    }
}

/// Body of `POST /inventory/records`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventoryRecordRequest {
    #[validate(length(min = 1, max = 100))]
    pub inventory_name: String,
    pub category: String,
    pub time_card_id: DbId,
}

impl CreateInventoryRecordRequest {
    /// Field-level validation plus the category check.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        validate_category(&self.category)
    }
}
