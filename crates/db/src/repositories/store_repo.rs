//! Repository for the `stores` table.

use sqlx::PgPool;

use crate::models::store::{CreateStore, Store};

const COLUMNS: &str = "id, store_name, created_at, updated_at";

/// Provides insert operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// Insert a new store, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStore) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO stores (store_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(&input.store_name)
            .fetch_one(pool)
            .await
    }
}
