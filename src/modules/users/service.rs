use sqlx::PgPool;
use tracing::{info, instrument, warn};

use todosapp_core::{AppError, hash_password_with_cost, verify_password};
use todosapp_models::{UpdatePasswordDto, UpdateUserDto, User};

use crate::modules::auth::service::USER_COLUMNS;

fn user_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("User not found"))
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, user_id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Replaces the stored digest only when `current_password` verifies.
    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        user_id: i64,
        dto: UpdatePasswordDto,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let user = Self::get_user(db, user_id).await?;

        if !verify_password(&dto.current_password, &user.hashed_password) {
            warn!(user_id, "Password change rejected");
            return Err(AppError::unauthorized("Error on password change"));
        }

        let hashed_password = hash_password_with_cost(&dto.new_password, bcrypt_cost)?;

        sqlx::query("UPDATE users SET hashed_password = $1 WHERE id = $2")
            .bind(&hashed_password)
            .bind(user_id)
            .execute(db)
            .await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn update_phone_number(
        db: &PgPool,
        user_id: i64,
        dto: UpdateUserDto,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET phone_number = $1 WHERE id = $2")
            .bind(&dto.phone_number)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(user_not_found());
        }

        Ok(())
    }
}
