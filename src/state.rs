use sqlx::PgPool;

use todosapp_config::{AppConfig, CorsConfig, JwtConfig, PasswordConfig};
use todosapp_db::{init_db_pool, run_migrations};

/// Everything a handler may touch, built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub password_config: PasswordConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, config: &AppConfig) -> Self {
        Self {
            db,
            jwt_config: config.jwt.clone(),
            password_config: config.password.clone(),
            cors_config: config.cors.clone(),
        }
    }
}

/// Connects to the database and brings the schema up to date before any
/// handler can run.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = init_db_pool(&config.database).await?;
    run_migrations(&db).await?;

    Ok(AppState::new(db, config))
}
