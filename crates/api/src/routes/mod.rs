pub mod health;
pub mod inventory;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /inventory/records                 list (?category=), create
/// /inventory/records/today           shifts starting within 24h, one line each
/// /inventory/records/{id}            delete
///
/// /users/me                          caller's profile
/// ```
///
/// Every route requires a Bearer access token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Inventory update records, scoped to the caller's store.
        .nest("/inventory/records", inventory::router())
        // Caller profile.
        .nest("/users", user::router())
}
