//! Domain logic for storekeep.
//!
//! This crate has zero internal dependencies and performs no I/O, so it can
//! be used by the repository layer, the HTTP server and background jobs alike.

pub mod error;
pub mod grouping;
pub mod inventory;
pub mod retention;
pub mod roles;
pub mod shift_window;
pub mod today;
pub mod types;
