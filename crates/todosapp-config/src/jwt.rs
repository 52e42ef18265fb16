//! Token signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: symmetric signing key (required, no default)
//! - `JWT_ALGORITHM`: `HS256` (default), `HS384` or `HS512`
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds (default: 1200)

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::env::{parsed_or, required};
use crate::error::ConfigError;

/// Access tokens live for 20 minutes unless configured otherwise.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 20 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required("JWT_SECRET")?;

        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(raw) => parse_algorithm(&raw)?,
            Err(_) => Algorithm::HS256,
        };

        let access_token_expiry = parsed_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                var: "JWT_ACCESS_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        Ok(Self {
            secret,
            algorithm,
            access_token_expiry,
        })
    }
}

/// Only the HMAC family is accepted: the secret is a shared symmetric key.
pub fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm =
        Algorithm::from_str(raw.trim().to_uppercase().as_str()).map_err(|_| ConfigError::Invalid {
            var: "JWT_ALGORITHM",
            reason: format!("unknown algorithm {}", raw),
        })?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(ConfigError::Invalid {
            var: "JWT_ALGORITHM",
            reason: format!("{:?} is not an HMAC algorithm", other),
        }),
    }
}
