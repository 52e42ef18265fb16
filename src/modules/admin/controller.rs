use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, instrument};

use todosapp_core::AppError;
use todosapp_models::Todo;

use crate::docs::ErrorResponse;
use crate::middleware::role::RequireAdmin;
use crate::modules::todos::{TodoScope, service::TodoService};
use crate::state::AppState;
use crate::validator::PositiveId;

/// List every todo of every user
#[utoipa::path(
    get,
    path = "/admin/todo",
    operation_id = "admin_read_all",
    responses(
        (status = 200, description = "All todos", body = Vec<Todo>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, admin), fields(admin_id = admin.id))]
pub async fn read_all(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list_todos(&state.db, TodoScope::Any).await?;
    Ok(Json(todos))
}

/// Delete any user's todo
#[utoipa::path(
    delete,
    path = "/admin/todo/{todo_id}",
    operation_id = "admin_delete_todo",
    params(("todo_id" = i64, Path, description = "Todo ID, greater than 0")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid todo id", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, admin), fields(admin_id = admin.id))]
pub async fn delete_todo(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    PositiveId(todo_id): PositiveId,
) -> Result<StatusCode, AppError> {
    TodoService::delete_todo(&state.db, todo_id, TodoScope::Any).await?;
    info!(todo_id, admin_id = admin.id, "Todo deleted by admin");
    Ok(StatusCode::NO_CONTENT)
}
