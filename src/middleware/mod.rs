//! Request extractors for authentication and authorization.
//!
//! - [`auth`]: [`CurrentUser`](auth::CurrentUser), the bearer token resolved to an identity
//! - [`role`]: [`RequireAdmin`](role::RequireAdmin), the same plus an admin role check
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `CurrentUser` verifies the token and builds the caller's identity
//! 3. Role extractors check the identity's role
//! 4. The handler runs with the identity in hand
//!
//! Every failure along the way is a 401.

pub mod auth;
pub mod role;
