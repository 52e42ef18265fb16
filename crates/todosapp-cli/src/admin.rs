use anyhow::{Context, bail};
use sqlx::PgPool;
use validator::Validate;

use todosapp_core::hash_password_with_cost;
use todosapp_models::CreateUserDto;

pub const ADMIN_ROLE: &str = "admin";

/// Inserts an active `admin` account and returns its id.
///
/// The account goes through the same validation rules as a registration
/// request.
pub async fn create_admin(
    db: &PgPool,
    mut account: CreateUserDto,
    bcrypt_cost: u32,
) -> anyhow::Result<i64> {
    account.role = ADMIN_ROLE.to_string();
    account
        .validate()
        .context("Invalid admin account details")?;

    let hashed_password =
        hash_password_with_cost(&account.password, bcrypt_cost).map_err(|e| e.error)?;

    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role, phone_number)
         VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
         ON CONFLICT DO NOTHING
         RETURNING id",
    )
    .bind(&account.email)
    .bind(&account.username)
    .bind(&account.first_name)
    .bind(&account.last_name)
    .bind(&hashed_password)
    .bind(&account.role)
    .bind(&account.phone_number)
    .fetch_optional(db)
    .await?;

    match user_id {
        Some(id) => Ok(id),
        None => bail!("A user with this username or email already exists"),
    }
}
