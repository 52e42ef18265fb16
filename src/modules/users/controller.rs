use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use todosapp_core::AppError;
use todosapp_models::{UpdatePasswordDto, UpdateUserDto, UserResponse};

use super::service::UserService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/user/",
    responses(
        (status = 200, description = "Caller's profile", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn get_user(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_user(&state.db, user.id()).await?;
    Ok(Json(user.into()))
}

/// Change the caller's password
#[utoipa::path(
    patch,
    path = "/user/password_update",
    request_body = UpdatePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Not authenticated or wrong current password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user, dto), fields(user_id = user.id()))]
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordDto>,
) -> Result<StatusCode, AppError> {
    UserService::change_password(
        &state.db,
        user.id(),
        dto,
        state.password_config.bcrypt_cost,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update the caller's phone number
#[utoipa::path(
    put,
    path = "/user/user_update",
    request_body = UpdateUserDto,
    responses(
        (status = 204, description = "Profile updated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn update_user(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<StatusCode, AppError> {
    UserService::update_phone_number(&state.db, user.id(), dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
