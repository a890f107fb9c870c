//! Repository for the `users` table.

use sqlx::PgPool;
use storekeep_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kakao_email, user_name, user_profile_code, role, \
                        phone_number, work_time, work_place, store_id, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (kakao_email, user_name, user_profile_code, role, \
                                phone_number, work_time, work_place, store_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.kakao_email)
            .bind(&input.user_name)
            .bind(input.user_profile_code)
            .bind(&input.role)
            .bind(&input.phone_number)
            .bind(&input.work_time)
            .bind(&input.work_place)
            .bind(input.store_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
