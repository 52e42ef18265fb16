//! Request identity resolution.
//!
//! Every protected request goes through [`resolve_identity`]: the token is
//! verified (signature and expiry) and reduced to the three facts handlers
//! authorize against. There is no cache; each call re-verifies.

use serde::Serialize;

use todosapp_config::JwtConfig;
use todosapp_core::AppError;

use crate::jwt::verify_token;

pub const ADMIN_ROLE: &str = "admin";

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub username: String,
    pub id: i64,
    /// Absent role means no elevated privilege.
    pub role: Option<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

/// Verifies `token` and extracts the caller's identity.
///
/// # Errors
///
/// Unauthorized if verification fails for any reason, or if the token
/// lacks the `sub` or `id` claim.
pub fn resolve_identity(token: &str, jwt_config: &JwtConfig) -> Result<Identity, AppError> {
    let claims =
        verify_token(token, jwt_config).map_err(|_| AppError::unauthorized(INVALID_CREDENTIALS))?;

    match (claims.sub, claims.id) {
        (Some(username), Some(id)) => Ok(Identity {
            username,
            id,
            role: claims.role,
        }),
        _ => {
            tracing::debug!("Token is missing the sub or id claim");
            Err(AppError::unauthorized(INVALID_CREDENTIALS))
        }
    }
}
