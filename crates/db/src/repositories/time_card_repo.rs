//! Repository for the `time_cards` table.

use sqlx::PgPool;
use storekeep_core::types::DbId;

use crate::models::time_card::{CreateTimeCard, TimeCard};

const COLUMNS: &str = "id, year, month, day, work_time, work_hour, user_id, created_at";

/// Provides query operations for time cards.
pub struct TimeCardRepo;

impl TimeCardRepo {
    /// Insert a new time card, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTimeCard) -> Result<TimeCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_cards (year, month, day, work_time, work_hour, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeCard>(&query)
            .bind(&input.year)
            .bind(&input.month)
            .bind(&input.day)
            .bind(&input.work_time)
            .bind(input.work_hour)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a time card belonging to one of the store's users.
    pub async fn find_in_store(
        pool: &PgPool,
        id: DbId,
        store_id: DbId,
    ) -> Result<Option<TimeCard>, sqlx::Error> {
        sqlx::query_as::<_, TimeCard>(
            "SELECT tc.id, tc.year, tc.month, tc.day, tc.work_time, tc.work_hour, \
                    tc.user_id, tc.created_at \
             FROM time_cards tc \
             JOIN users u ON u.id = tc.user_id \
             WHERE tc.id = $1 AND u.store_id = $2",
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(pool)
        .await
    }

    /// List every time card of the store's users, oldest first.
    pub async fn list_by_store(
        pool: &PgPool,
        store_id: DbId,
    ) -> Result<Vec<TimeCard>, sqlx::Error> {
        sqlx::query_as::<_, TimeCard>(
            "SELECT tc.id, tc.year, tc.month, tc.day, tc.work_time, tc.work_hour, \
                    tc.user_id, tc.created_at \
             FROM time_cards tc \
             JOIN users u ON u.id = tc.user_id \
             WHERE u.store_id = $1 \
             ORDER BY tc.id",
        )
        .bind(store_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch time cards by id, in ascending id order. Missing ids are skipped.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<TimeCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM time_cards WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, TimeCard>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
