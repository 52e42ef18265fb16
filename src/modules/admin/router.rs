use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{delete_todo, read_all};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin/todo", get(read_all))
        .route("/admin/todo/{todo_id}", delete(delete_todo))
}
