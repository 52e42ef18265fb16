//! # Todosapp Models
//!
//! Row types and request/response DTOs shared by the API and the CLI.
//!
//! - [`users`]: [`User`] rows, registration and profile DTOs
//! - [`todos`]: [`Todo`] rows and the [`TodoDto`] payload
//! - [`auth`]: token endpoint form and response
//! - [`health`]: liveness response

pub mod auth;
pub mod health;
pub mod todos;
pub mod users;

pub use auth::{TokenRequest, TokenResponse};
pub use health::HealthResponse;
pub use todos::{Todo, TodoDto};
pub use users::{CreateUserDto, UpdatePasswordDto, UpdateUserDto, User, UserResponse};
