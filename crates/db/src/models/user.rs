//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use storekeep_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub kakao_email: String,
    pub user_name: String,
    pub user_profile_code: i32,
    /// One of the `storekeep_core::roles` constants.
    pub role: String,
    pub phone_number: Option<String>,
    pub work_time: Option<String>,
    pub work_place: Option<String>,
    pub store_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_code: DbId,
    pub kakao_email: String,
    pub role: String,
    pub phone_number: Option<String>,
    pub work_time: Option<String>,
    pub work_place: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_code: user.id,
            kakao_email: user.kakao_email.clone(),
            role: user.role.clone(),
            phone_number: user.phone_number.clone(),
            work_time: user.work_time.clone(),
            work_place: user.work_place.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub kakao_email: String,
    pub user_name: String,
    pub user_profile_code: i32,
    pub role: String,
    pub phone_number: Option<String>,
    pub work_time: Option<String>,
    pub work_place: Option<String>,
    pub store_id: DbId,
}
