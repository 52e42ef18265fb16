//! User rows and DTOs.
//!
//! [`User`] mirrors the `users` table including the password digest and is
//! never serialized. Responses go out as [`UserResponse`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row of the `users` table.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub role: String,
    pub phone_number: Option<String>,
}

/// Public view of a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub role: String,
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            role: user.role,
            phone_number: user.phone_number,
        }
    }
}

/// Registration payload for `POST /auth/`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 3))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
}

/// Payload for `PATCH /user/password_update`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdatePasswordDto {
    pub current_password: String,
    #[validate(length(min = 3))]
    pub new_password: String,
}

/// Payload for `PUT /user/user_update`.
///
/// Clients may send a full user document; only the phone number is applied.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(max = 20))]
    pub phone_number: String,
}
