//! Role-based authorization.
//!
//! A caller without the required role gets 401, the same status as a caller
//! with no valid token at all.

use axum::{extract::FromRequestParts, http::request::Parts};

use todosapp_auth::Identity;
use todosapp_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Extractor for admin-only routes.
///
/// ```rust,ignore
/// pub async fn read_all(
///     State(state): State<AppState>,
///     RequireAdmin(admin): RequireAdmin,
/// ) -> Result<Json<Vec<Todo>>, AppError> {
///     // only callers whose role is "admin" get here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Identity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(identity) = CurrentUser::from_request_parts(parts, state).await?;
        check_admin(&identity)?;

        Ok(RequireAdmin(identity))
    }
}

pub fn check_admin(identity: &Identity) -> Result<(), AppError> {
    if !identity.is_admin() {
        tracing::warn!(user_id = identity.id, role = ?identity.role, "Admin route denied");
        return Err(AppError::unauthorized("Admin privileges required"));
    }

    Ok(())
}
