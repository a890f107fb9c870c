//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or an open transaction) as the first argument.

pub mod inventory_record_repo;
pub mod store_repo;
pub mod time_card_repo;
pub mod user_repo;

pub use inventory_record_repo::InventoryRecordRepo;
pub use store_repo::StoreRepo;
pub use time_card_repo::TimeCardRepo;
pub use user_repo::UserRepo;
