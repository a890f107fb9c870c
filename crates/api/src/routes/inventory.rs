//! Route definitions for the `/inventory/records` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/inventory/records`.
///
/// ```text
/// GET    /          -> list_records  (?category=cigarette|garbage_bag|gift_card)
/// POST   /          -> create_record
/// GET    /today     -> list_today
/// DELETE /{id}      -> delete_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inventory::list_records).post(inventory::create_record),
        )
        .route("/today", get(inventory::list_today))
        .route("/{id}", delete(inventory::delete_record))
}
