//! Store entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use storekeep_core::types::{DbId, Timestamp};

/// A row from the `stores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Store {
    pub id: DbId,
    pub store_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new store.
#[derive(Debug)]
pub struct CreateStore {
    pub store_name: String,
}
