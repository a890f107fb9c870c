//! Inventory update record model, DTOs and the per-shift lookup.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::FromRow;
use storekeep_core::error::CoreError;
use storekeep_core::grouping::ShiftKeyed;
use storekeep_core::today::{EntryLookup, InventoryEntry};
use storekeep_core::types::{DbId, Timestamp};

use crate::models::time_card::TimeCard;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `inventory_update_records` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct InventoryUpdateRecord {
    pub id: DbId,
    pub inventory_name: String,
    /// One of the `storekeep_core::inventory` category constants.
    pub category: String,
    pub user_name: String,
    pub user_profile_code: i32,
    pub time_card_id: DbId,
    pub store_id: DbId,
    pub created_at: Timestamp,
}

impl InventoryEntry for InventoryUpdateRecord {
    fn inventory_name(&self) -> &str {
        &self.inventory_name
    }
}

impl ShiftKeyed for InventoryUpdateRecord {
    fn shift_id(&self) -> DbId {
        self.time_card_id
    }
}

// ---------------------------------------------------------------------------
// DTOs (inserts and responses)
// ---------------------------------------------------------------------------

/// DTO for inserting a record. Author fields are copied from the user.
#[derive(Debug)]
pub struct CreateInventoryRecord {
    pub inventory_name: String,
    pub category: String,
    pub user_name: String,
    pub user_profile_code: i32,
    pub time_card_id: DbId,
    pub store_id: DbId,
}

/// One listed record: its author and shift, plus every record logged
/// against that shift.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRecordGroup {
    pub user_name: String,
    pub user_profile_code: i32,
    pub time_card: TimeCard,
    pub records: Vec<InventoryUpdateRecord>,
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Preloaded records keyed by time card, answering [`EntryLookup`] without
/// further queries.
#[derive(Debug, Default)]
pub struct EntriesByTimeCard {
    by_card: HashMap<DbId, Vec<InventoryUpdateRecord>>,
}

impl EntriesByTimeCard {
    /// Index `records`, keeping their order within each time card.
    pub fn from_records(records: Vec<InventoryUpdateRecord>) -> Self {
        let mut by_card: HashMap<DbId, Vec<InventoryUpdateRecord>> = HashMap::new();
        for record in records {
            by_card.entry(record.time_card_id).or_default().push(record);
        }
        Self { by_card }
    }
}

impl EntryLookup<TimeCard> for EntriesByTimeCard {
    type Entry = InventoryUpdateRecord;
    type Error = CoreError;

    fn entries_for(&self, shift: &TimeCard) -> Result<Vec<InventoryUpdateRecord>, CoreError> {
        Ok(self.by_card.get(&shift.id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(id: DbId, time_card_id: DbId, name: &str) -> InventoryUpdateRecord {
        InventoryUpdateRecord {
            id,
            inventory_name: name.to_string(),
            category: "cigarette".to_string(),
            user_name: "worker".to_string(),
            user_profile_code: 1,
            time_card_id,
            store_id: 1,
            created_at: Utc::now(),
        }
    }

    fn card(id: DbId) -> TimeCard {
        TimeCard {
            id,
            year: "2023".to_string(),
            month: "3".to_string(),
            day: "1".to_string(),
            work_time: "09:00~18:00".to_string(),
            work_hour: 9.0,
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lookup_keeps_order_per_card() {
        let lookup = EntriesByTimeCard::from_records(vec![
            record(1, 10, "a"),
            record(2, 20, "b"),
            record(3, 10, "c"),
        ]);

        let names: Vec<String> = lookup
            .entries_for(&card(10))
            .unwrap()
            .into_iter()
            .map(|r| r.inventory_name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn lookup_of_unknown_card_is_empty() {
        let lookup = EntriesByTimeCard::from_records(vec![record(1, 10, "a")]);
        assert!(lookup.entries_for(&card(99)).unwrap().is_empty());
    }
}
