//! Resolves the authenticated caller to a user row.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use storekeep_core::error::CoreError;
use storekeep_db::models::user::User;
use storekeep_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The user behind a valid access token, loaded from the database.
///
/// Rejects with 401 when the token is missing or invalid, and with 404 when
/// the token is valid but its subject no longer exists.
///
/// ```ignore
/// async fn handler(CurrentUser(user): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(store_id = user.store_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let user = UserRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })?;

        Ok(CurrentUser(user))
    }
}
