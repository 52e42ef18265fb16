use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use todosapp_core::AppError;
use todosapp_models::{Todo, TodoDto};

use super::scope::TodoScope;
use super::service::TodoService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::validator::{PositiveId, ValidatedJson};

/// List the caller's todos
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Todos owned by the caller", body = Vec<Todo>),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn read_all(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list_todos(&state.db, TodoScope::Owner(user.id())).await?;
    Ok(Json(todos))
}

/// Get one of the caller's todos
#[utoipa::path(
    get,
    path = "/todo/{todo_id}",
    params(("todo_id" = i64, Path, description = "Todo ID, greater than 0")),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid todo id", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn read_todo(
    State(state): State<AppState>,
    user: CurrentUser,
    PositiveId(todo_id): PositiveId,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::get_todo(&state.db, todo_id, TodoScope::Owner(user.id())).await?;
    Ok(Json(todo))
}

/// Create a todo owned by the caller
#[utoipa::path(
    post,
    path = "/todo/create",
    request_body = TodoDto,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user, dto), fields(user_id = user.id()))]
pub async fn create_todo(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<TodoDto>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = TodoService::create_todo(&state.db, user.id(), dto).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace the fields of one of the caller's todos
#[utoipa::path(
    put,
    path = "/todo/{todo_id}",
    params(("todo_id" = i64, Path, description = "Todo ID, greater than 0")),
    request_body = TodoDto,
    responses(
        (status = 204, description = "Todo updated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user, dto), fields(user_id = user.id()))]
pub async fn update_todo(
    State(state): State<AppState>,
    user: CurrentUser,
    PositiveId(todo_id): PositiveId,
    ValidatedJson(dto): ValidatedJson<TodoDto>,
) -> Result<StatusCode, AppError> {
    TodoService::update_todo(&state.db, todo_id, TodoScope::Owner(user.id()), dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's todos
#[utoipa::path(
    delete,
    path = "/todo/{todo_id}",
    params(("todo_id" = i64, Path, description = "Todo ID, greater than 0")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid todo id", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user), fields(user_id = user.id()))]
pub async fn delete_todo(
    State(state): State<AppState>,
    user: CurrentUser,
    PositiveId(todo_id): PositiveId,
) -> Result<StatusCode, AppError> {
    TodoService::delete_todo(&state.db, todo_id, TodoScope::Owner(user.id())).await?;
    Ok(StatusCode::NO_CONTENT)
}
