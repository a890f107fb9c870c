//! Request handlers.
//!
//! Handlers resolve the caller via [`crate::middleware::current_user::CurrentUser`],
//! delegate to the repositories in `storekeep_db` and map errors via
//! [`crate::error::AppError`].

pub mod inventory;
pub mod user;
