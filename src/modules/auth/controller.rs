use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use todosapp_core::AppError;
use todosapp_models::{CreateUserDto, TokenRequest, TokenResponse, UserResponse};

use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedForm, ValidatedJson};

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Username or email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = AuthService::register_user(&state.db, dto, &state.password_config).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchange username and password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/token",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 422, description = "Malformed form", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, form), fields(username = %form.username))]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token =
        AuthService::login(&state.db, &form.username, &form.password, &state.jwt_config).await?;
    Ok(Json(token))
}
