//! Daily purge of expired inventory update records.
//!
//! Spawns a background task that wakes at each firing of the configured cron
//! schedule (05:00 business time by default) and deletes every record older
//! than the retention window. The select and the delete share one
//! transaction, so a failed sweep leaves the table untouched.

use chrono::{FixedOffset, Utc};
use sqlx::PgPool;
use storekeep_core::retention::cutoff;
use storekeep_core::types::{DbId, Timestamp};
use storekeep_db::repositories::InventoryRecordRepo;
use tokio_util::sync::CancellationToken;

use crate::config::RetentionConfig;

/// Run the inventory retention loop.
///
/// Sleeps until the next scheduled firing, sweeps, and repeats. Runs until
/// `cancel` is triggered or the schedule has no further firings.
pub async fn run(
    pool: PgPool,
    config: RetentionConfig,
    offset: FixedOffset,
    cancel: CancellationToken,
) {
    tracing::info!(
        retention_days = config.retention_days,
        schedule = %config.schedule,
        "Inventory retention job started"
    );

    loop {
        let now = Utc::now();
        let Some(next) = next_run_after(&config.schedule, now, offset) else {
            tracing::warn!("Inventory retention: schedule has no upcoming run, stopping");
            break;
        };
        let wait = (next - now).to_std().unwrap_or_default();
        tracing::debug!(next_run = %next, "Inventory retention: waiting for next run");

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Inventory retention job stopping");
                break;
            }
            _ = tokio::time::sleep(wait) => {
                match sweep(&pool, Utc::now(), config.retention_days).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Inventory retention: purged old records");
                        } else {
                            tracing::debug!("Inventory retention: no records to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Inventory retention: sweep failed");
                    }
                }
            }
        }
    }
}

/// Delete every record created more than `retention_days` before `reference`.
///
/// Returns the number of records removed. Runs in a single transaction: on
/// error nothing is deleted.
pub async fn sweep(
    pool: &PgPool,
    reference: Timestamp,
    retention_days: i64,
) -> Result<u64, sqlx::Error> {
    let cutoff = cutoff(reference, retention_days);

    let mut tx = pool.begin().await?;
    let expired: Vec<DbId> = InventoryRecordRepo::find_older_than(&mut tx, cutoff)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    let deleted = InventoryRecordRepo::delete_all(&mut tx, &expired).await?;
    tx.commit().await?;

    Ok(deleted)
}

/// Next firing of `schedule` strictly after `now`, evaluated in `offset`.
pub fn next_run_after(
    schedule: &cron::Schedule,
    now: Timestamp,
    offset: FixedOffset,
) -> Option<Timestamp> {
    schedule
        .after(&now.with_timezone(&offset))
        .next()
        .map(|t| t.with_timezone(&Utc))
}
