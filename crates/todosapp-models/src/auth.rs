use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth2 password-grant form posted to `/auth/token`.
///
/// Other standard form fields (`grant_type`, `scope`, `client_id`) are
/// accepted and ignored.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
