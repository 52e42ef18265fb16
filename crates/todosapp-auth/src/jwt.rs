//! Signing and verifying access tokens.
//!
//! Tokens are compact JWS strings signed with the configured HMAC algorithm
//! and the shared secret from [`JwtConfig`]. Verification checks the
//! signature and the `exp` claim with zero leeway.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use todosapp_config::JwtConfig;
use todosapp_core::AppError;

use crate::claims::Claims;

/// Issues an access token for `username` that expires `ttl` from now.
///
/// # Errors
///
/// Returns an internal error if encoding fails (e.g. an unusable key).
///
/// # Example
///
/// ```ignore
/// let token = create_access_token("john", user.id, &user.role, Duration::minutes(20), &config)?;
/// ```
pub fn create_access_token(
    username: &str,
    user_id: i64,
    role: &str,
    ttl: Duration,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = (now + ttl).timestamp().max(0) as usize;

    let claims = Claims {
        sub: Some(username.to_string()),
        id: Some(user_id),
        role: Some(role.to_string()),
        exp,
        iat: Some(now.timestamp() as usize),
    };

    encode(
        &Header::new(jwt_config.algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, returning the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different key or algorithm, or past its `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AppError::unauthorized("Invalid or expired token")
    })
}
