//! # Todosapp Core
//!
//! Foundational types shared by every Todosapp crate:
//!
//! - [`errors`]: [`AppError`], the error type every handler and service returns
//! - [`password`]: one-way password hashing and verification (bcrypt)
//!
//! # Example
//!
//! ```ignore
//! use todosapp_core::{AppError, hash_password, verify_password};
//!
//! let digest = hash_password("hunter22")?;
//! assert!(verify_password("hunter22", &digest));
//!
//! let err = AppError::not_found(anyhow::anyhow!("Todo not found"));
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
