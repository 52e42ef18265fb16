use axum::{
    Router,
    routing::{get, patch, put},
};

use super::controller::{change_password, get_user, update_user};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/user/", get(get_user))
        .route("/user", get(get_user))
        .route("/user/password_update", patch(change_password))
        .route("/user/user_update", put(update_user))
}
