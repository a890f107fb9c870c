//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Claims of a valid JWT Bearer token.
//! - [`current_user::CurrentUser`] -- The user row behind that token.

pub mod auth;
pub mod current_user;
