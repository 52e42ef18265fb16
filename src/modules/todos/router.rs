use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_todo, delete_todo, read_all, read_todo, update_todo};
use crate::state::AppState;

pub fn init_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_all))
        .route("/todo/create", post(create_todo))
        .route(
            "/todo/{todo_id}",
            get(read_todo).put(update_todo).delete(delete_todo),
        )
}
