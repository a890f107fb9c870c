//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts

pub mod inventory_record;
pub mod store;
pub mod time_card;
pub mod user;
