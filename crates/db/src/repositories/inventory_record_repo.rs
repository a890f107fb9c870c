//! Repository for the `inventory_update_records` table.

use sqlx::{PgPool, Postgres, Transaction};
use storekeep_core::types::{DbId, Timestamp};

use crate::models::inventory_record::{CreateInventoryRecord, InventoryUpdateRecord};

/// Column list for `inventory_update_records` SELECT queries.
const COLUMNS: &str = "id, inventory_name, category, user_name, user_profile_code, \
                        time_card_id, store_id, created_at";

/// Provides CRUD operations for inventory update records.
///
/// List queries return rows in ascending `id` order, i.e. the order in which
/// the records were logged.
pub struct InventoryRecordRepo;

impl InventoryRecordRepo {
    /// Insert a new record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryRecord,
    ) -> Result<InventoryUpdateRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_update_records \
                (inventory_name, category, user_name, user_profile_code, time_card_id, store_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(&input.inventory_name)
            .bind(&input.category)
            .bind(&input.user_name)
            .bind(input.user_profile_code)
            .bind(input.time_card_id)
            .bind(input.store_id)
            .fetch_one(pool)
            .await
    }

    /// Find a record by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InventoryUpdateRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_update_records WHERE id = $1");
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a store's records, optionally restricted to one category.
    pub async fn list_by_store(
        pool: &PgPool,
        store_id: DbId,
        category: Option<&str>,
    ) -> Result<Vec<InventoryUpdateRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_update_records \
             WHERE store_id = $1 AND ($2::TEXT IS NULL OR category = $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(store_id)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List the records logged against one time card, optionally restricted
    /// to one category.
    pub async fn list_by_time_card(
        pool: &PgPool,
        time_card_id: DbId,
        category: Option<&str>,
    ) -> Result<Vec<InventoryUpdateRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_update_records \
             WHERE time_card_id = $1 AND ($2::TEXT IS NULL OR category = $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(time_card_id)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List the records of several time cards in one round trip.
    pub async fn list_by_time_cards(
        pool: &PgPool,
        time_card_ids: &[DbId],
    ) -> Result<Vec<InventoryUpdateRecord>, sqlx::Error> {
        if time_card_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_update_records \
             WHERE time_card_id = ANY($1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(time_card_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a single record of the given store.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_in_store(
        pool: &PgPool,
        id: DbId,
        store_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM inventory_update_records WHERE id = $1 AND store_id = $2")
                .bind(id)
                .bind(store_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Select every record created strictly before `cutoff`, locking the rows
    /// for the rest of the transaction. A record exactly at `cutoff` is not
    /// selected.
    pub async fn find_older_than(
        tx: &mut Transaction<'_, Postgres>,
        cutoff: Timestamp,
    ) -> Result<Vec<InventoryUpdateRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_update_records \
             WHERE created_at < $1 \
             ORDER BY id \
             FOR UPDATE"
        );
        sqlx::query_as::<_, InventoryUpdateRecord>(&query)
            .bind(cutoff)
            .fetch_all(&mut **tx)
            .await
    }

    /// Delete the given records within the transaction.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_all(
        tx: &mut Transaction<'_, Postgres>,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM inventory_update_records WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut **tx)
            .await?;
        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected(),
            "Deleted inventory update records"
        );
        Ok(result.rows_affected())
    }
}
