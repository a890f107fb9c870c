//! Retention rules for inventory update records.
//!
//! Records older than the retention window are purged by the daily sweep in
//! the API's background jobs. This module holds only the cutoff arithmetic;
//! the strict `created_at < cutoff` selection lives in
//! `InventoryRecordRepo::find_older_than`.

use chrono::Duration;

use crate::types::Timestamp;

/// Default number of days an inventory update record is kept.
pub const DEFAULT_RETENTION_DAYS: i64 = 60;

/// Oldest timestamp that is still retained at `reference`.
///
/// A record created exactly at the cutoff is kept.
pub fn cutoff(reference: Timestamp, retention_days: i64) -> Timestamp {
    reference - Duration::days(retention_days)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn reference() -> Timestamp {
        Utc.with_ymd_and_hms(2023, 5, 1, 20, 0, 0).unwrap()
    }

    #[test]
    fn cutoff_subtracts_whole_days() {
        let c = cutoff(reference(), DEFAULT_RETENTION_DAYS);
        assert_eq!(c, Utc.with_ymd_and_hms(2023, 3, 2, 20, 0, 0).unwrap());
    }

    #[test]
    fn cutoff_keeps_time_of_day_across_month_boundary() {
        let c = cutoff(reference(), 1);
        assert_eq!(c, Utc.with_ymd_and_hms(2023, 4, 30, 20, 0, 0).unwrap());
    }

    #[test]
    fn zero_day_window_cuts_at_reference() {
        assert_eq!(cutoff(reference(), 0), reference());
    }
}
