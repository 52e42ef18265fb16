use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use todosapp_auth::{Identity, resolve_identity};
use todosapp_core::AppError;

use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Extractor that resolves the bearer token into the caller's [`Identity`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let identity = resolve_identity(token, &state.jwt_config)?;

        Ok(CurrentUser(identity))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    match auth_header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AppError::unauthorized(INVALID_CREDENTIALS)),
    }
}
