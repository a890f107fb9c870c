//! Time card (scheduled shift) model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use storekeep_core::today::ShiftSchedule;
use storekeep_core::types::{DbId, Timestamp};

/// A row from the `time_cards` table.
///
/// `year` / `month` / `day` and `work_time` are kept exactly as entered;
/// use [`ShiftSchedule::window`] to obtain concrete start and end times.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TimeCard {
    pub id: DbId,
    pub year: String,
    pub month: String,
    pub day: String,
    pub work_time: String,
    pub work_hour: f32,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

impl ShiftSchedule for TimeCard {
    fn year(&self) -> &str {
        &self.year
    }

    fn month(&self) -> &str {
        &self.month
    }

    fn day(&self) -> &str {
        &self.day
    }

    fn work_time(&self) -> &str {
        &self.work_time
    }
}

/// DTO for creating a new time card.
#[derive(Debug)]
pub struct CreateTimeCard {
    pub year: String,
    pub month: String,
    pub day: String,
    pub work_time: String,
    pub work_hour: f32,
    pub user_id: DbId,
}
