//! # Todosapp Auth
//!
//! Stateless bearer-token authentication for the Todosapp API.
//!
//! - [`claims`]: the claim set carried inside an access token
//! - [`jwt`]: signing and verifying access tokens
//! - [`identity`]: turning a verified token into the [`Identity`] handlers authorize against
//!
//! Tokens are never stored server side. Every protected request re-verifies
//! the signature and expiry, so a token is good until its `exp` and no longer.
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use todosapp_auth::{create_access_token, resolve_identity};
//! use todosapp_config::JwtConfig;
//!
//! let config = JwtConfig::new("change-me");
//! let token = create_access_token("john", 1, "admin", Duration::minutes(20), &config)?;
//!
//! let identity = resolve_identity(&token, &config)?;
//! assert!(identity.is_admin());
//! ```

pub mod claims;
pub mod identity;
pub mod jwt;

pub use claims::Claims;
pub use identity::{ADMIN_ROLE, Identity, resolve_identity};
pub use jwt::{create_access_token, verify_token};
