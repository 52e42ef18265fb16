use sqlx::PgPool;
use tracing::{info, instrument};

use todosapp_core::AppError;
use todosapp_models::{Todo, TodoDto};

use super::scope::TodoScope;
use crate::metrics::{track_todo_created, track_todo_deleted};

const TODO_COLUMNS: &str = "id, title, description, priority, complete, owner_id";

// `$n::BIGINT IS NULL` lets the same statement serve both scopes.
const SCOPE_FILTER: &str = "($1::BIGINT IS NULL OR owner_id = $1)";

fn todo_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Todo not found"))
}

pub struct TodoService;

impl TodoService {
    #[instrument(skip(db))]
    pub async fn list_todos(db: &PgPool, scope: TodoScope) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE {SCOPE_FILTER} ORDER BY id"
        ))
        .bind(scope.owner_filter())
        .fetch_all(db)
        .await?;

        Ok(todos)
    }

    #[instrument(skip(db))]
    pub async fn get_todo(db: &PgPool, todo_id: i64, scope: TodoScope) -> Result<Todo, AppError> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE {SCOPE_FILTER} AND id = $2"
        ))
        .bind(scope.owner_filter())
        .bind(todo_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(todo_not_found)
    }

    /// The owner always comes from the caller's identity, never the payload.
    #[instrument(skip(db, dto))]
    pub async fn create_todo(db: &PgPool, owner_id: i64, dto: TodoDto) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, description, priority, complete, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.priority)
        .bind(dto.complete)
        .bind(owner_id)
        .fetch_one(db)
        .await?;

        track_todo_created();
        info!(todo_id = todo.id, owner_id, "Todo created");

        Ok(todo)
    }

    /// Overwrites every mutable field. `owner_id` is never touched.
    #[instrument(skip(db, dto))]
    pub async fn update_todo(
        db: &PgPool,
        todo_id: i64,
        scope: TodoScope,
        dto: TodoDto,
    ) -> Result<Todo, AppError> {
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos
             SET title = $3, description = $4, priority = $5, complete = $6
             WHERE {SCOPE_FILTER} AND id = $2
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(scope.owner_filter())
        .bind(todo_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.priority)
        .bind(dto.complete)
        .fetch_optional(db)
        .await?
        .ok_or_else(todo_not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_todo(db: &PgPool, todo_id: i64, scope: TodoScope) -> Result<(), AppError> {
        let deleted = sqlx::query_scalar::<_, i64>(&format!(
            "DELETE FROM todos WHERE {SCOPE_FILTER} AND id = $2 RETURNING id"
        ))
        .bind(scope.owner_filter())
        .bind(todo_id)
        .fetch_optional(db)
        .await?;

        if deleted.is_none() {
            return Err(todo_not_found());
        }

        track_todo_deleted(scope.label());
        info!(todo_id, scope = scope.label(), "Todo deleted");

        Ok(())
    }
}
