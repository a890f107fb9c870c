//! Handlers for the `/users` resource.

use axum::Json;
use storekeep_db::models::user::UserResponse;

use crate::middleware::current_user::CurrentUser;
use crate::response::DataResponse;

/// GET /api/v1/users/me
///
/// Return the authenticated caller's profile.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<DataResponse<UserResponse>> {
    Json(DataResponse {
        data: UserResponse::from(&user),
    })
}
