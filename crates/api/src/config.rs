use std::str::FromStr;

use chrono::FixedOffset;
use storekeep_core::retention::DEFAULT_RETENTION_DAYS;

use crate::auth::jwt::JwtConfig;

/// Asia/Seoul (UTC+09:00, no daylight saving).
const DEFAULT_BUSINESS_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Every day at 05:00 (sec min hour day-of-month month day-of-week).
const DEFAULT_RETENTION_CRON: &str = "0 0 5 * * *";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timezone in which shift dates and the daily sweep are interpreted.
    pub business_offset: FixedOffset,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Inventory record retention job settings.
    pub retention: RetentionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `BUSINESS_UTC_OFFSET_SECS` | `32400` (Asia/Seoul)       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let offset_secs: i32 = std::env::var("BUSINESS_UTC_OFFSET_SECS")
            .unwrap_or_else(|_| DEFAULT_BUSINESS_UTC_OFFSET_SECS.to_string())
            .parse()
            .expect("BUSINESS_UTC_OFFSET_SECS must be a valid i32");
        let business_offset = FixedOffset::east_opt(offset_secs)
            .expect("BUSINESS_UTC_OFFSET_SECS must be within +/- 24 hours");

        let jwt = JwtConfig::from_env();
        let retention = RetentionConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            business_offset,
            jwt,
            retention,
        }
    }
}

/// Settings for the daily inventory record purge.
#[derive(Debug, Clone)]
pub struct RetentionConfig {
    /// Records older than this many days are deleted (default: `60`).
    pub retention_days: i64,
    /// When the purge runs, evaluated in the business timezone.
    pub schedule: cron::Schedule,
}

impl RetentionConfig {
    /// Load retention settings from environment variables.
    ///
    /// | Env Var                    | Default          |
    /// |----------------------------|------------------|
    /// | `INVENTORY_RETENTION_DAYS` | `60`             |
    /// | `RETENTION_CRON`           | `0 0 5 * * *`    |
    pub fn from_env() -> Self {
        let retention_days: i64 = std::env::var("INVENTORY_RETENTION_DAYS")
            .unwrap_or_else(|_| DEFAULT_RETENTION_DAYS.to_string())
            .parse()
            .expect("INVENTORY_RETENTION_DAYS must be a valid i64");
        assert!(
            retention_days > 0,
            "INVENTORY_RETENTION_DAYS must be positive"
        );

        let expr =
            std::env::var("RETENTION_CRON").unwrap_or_else(|_| DEFAULT_RETENTION_CRON.into());
        let schedule = cron::Schedule::from_str(&expr)
            .unwrap_or_else(|e| panic!("Invalid RETENTION_CRON '{expr}': {e}"));

        Self {
            retention_days,
            schedule,
        }
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
            schedule: default_retention_schedule(),
        }
    }
}

/// The built-in 05:00 daily schedule.
pub fn default_retention_schedule() -> cron::Schedule {
    cron::Schedule::from_str(DEFAULT_RETENTION_CRON).expect("default retention cron is valid")
}

/// The built-in Asia/Seoul offset.
pub fn default_business_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_BUSINESS_UTC_OFFSET_SECS).expect("default offset is valid")
}
