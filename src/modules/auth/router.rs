use axum::{Router, routing::post};

use super::controller::{create_user, login_for_access_token};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/", post(create_user))
        .route("/auth", post(create_user))
        .route("/auth/token", post(login_for_access_token))
}
