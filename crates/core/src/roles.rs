//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in the initial
//! migration.

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_WORKER: &str = "worker";
