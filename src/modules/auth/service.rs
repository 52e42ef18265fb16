use chrono::Duration;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use todosapp_auth::create_access_token;
use todosapp_config::{JwtConfig, PasswordConfig};
use todosapp_core::{AppError, hash_password_with_cost, verify_password};
use todosapp_models::{CreateUserDto, TokenResponse, User};

use crate::metrics::{
    track_jwt_issued, track_user_created, track_user_login_failure, track_user_login_success,
};

pub(crate) const USER_COLUMNS: &str = "id, email, username, first_name, last_name, hashed_password, is_active, role, phone_number";

const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";

pub struct AuthService;

impl AuthService {
    /// Creates an active account. The password is stored only as a bcrypt digest.
    #[instrument(skip(db, dto, password_config), fields(username = %dto.username))]
    pub async fn register_user(
        db: &PgPool,
        dto: CreateUserDto,
        password_config: &PasswordConfig,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password_with_cost(&dto.password, password_config.bcrypt_cost)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role, phone_number)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&dto.username)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&hashed_password)
        .bind(&dto.role)
        .bind(&dto.phone_number)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Username or email already exists"
                    ));
                }
            }
            AppError::database(e)
        })?;

        track_user_created(&user.role);
        info!(user_id = user.id, role = %user.role, "User registered");

        Ok(user)
    }

    /// Looks the user up by username and checks the password.
    ///
    /// `Ok(None)` covers both an unknown username and a wrong password so
    /// callers cannot tell them apart.
    #[instrument(skip(db, password))]
    pub async fn authenticate(
        db: &PgPool,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(db)
        .await?;

        Ok(user.filter(|user| verify_password(password, &user.hashed_password)))
    }

    #[instrument(skip(db, password, jwt_config))]
    pub async fn login(
        db: &PgPool,
        username: &str,
        password: &str,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let Some(user) = Self::authenticate(db, username, password).await? else {
            track_user_login_failure();
            warn!("Login failed");
            return Err(AppError::unauthorized(INCORRECT_CREDENTIALS));
        };

        let access_token = create_access_token(
            &user.username,
            user.id,
            &user.role,
            Duration::seconds(jwt_config.access_token_expiry),
            jwt_config,
        )?;

        track_user_login_success();
        track_jwt_issued();
        info!(user_id = user.id, "Access token issued");

        Ok(TokenResponse::bearer(access_token))
    }
}
