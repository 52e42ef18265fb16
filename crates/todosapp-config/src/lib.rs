//! # Todosapp Config
//!
//! Configuration types for the Todosapp API, loaded from environment variables.
//!
//! - [`server`]: bind address
//! - [`database`]: PostgreSQL connection settings
//! - [`jwt`]: token signing secret, algorithm and lifetime
//! - [`password`]: bcrypt work factor
//! - [`cors`]: allowed origins
//! - [`logging`]: log level, directory and format
//!
//! Everything is gathered into [`AppConfig`], which is built once at startup
//! and handed to the components that need it.
//!
//! # Example
//!
//! ```ignore
//! use todosapp_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.address());
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod password;
pub mod server;

mod env;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use password::PasswordConfig;
pub use server::ServerConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            password: PasswordConfig::from_env()?,
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env()?,
        })
    }
}
