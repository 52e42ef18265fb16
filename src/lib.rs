//! # Todosapp API
//!
//! A multi-tenant todo list backend built with Axum and PostgreSQL.
//!
//! Users register, exchange their credentials for a short-lived bearer
//! token, and manage their own todos. Every todo query is scoped to the
//! caller, so one user's todos are invisible to every other user. Callers
//! with the `admin` role get a separate set of routes that see all todos.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # CurrentUser and RequireAdmin extractors
//! ├── modules/          # Feature modules
//! │   ├── health/      # Liveness probe
//! │   ├── auth/        # Registration and token issuance
//! │   ├── todos/       # Owner-scoped todo CRUD
//! │   ├── admin/       # Cross-user todo access
//! │   └── users/       # Profile and password
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing subscriber and request logging
//! ├── metrics.rs        # Prometheus recorder and counters
//! ├── router.rs         # Route table and layers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Body and path extractors
//! ```
//!
//! Shared building blocks live in the workspace crates:
//!
//! - `todosapp-core`: `AppError` and bcrypt helpers
//! - `todosapp-config`: environment-driven configuration
//! - `todosapp-auth`: token signing, verification and identity resolution
//! - `todosapp-db`: pool setup and embedded migrations
//! - `todosapp-models`: rows and DTOs
//!
//! ## Routes
//!
//! | Method | Path | Access |
//! |--------|------|--------|
//! | GET | `/healthy` | public |
//! | POST | `/auth/` | public |
//! | POST | `/auth/token` | public |
//! | GET | `/` | bearer |
//! | POST | `/todo/create` | bearer |
//! | GET/PUT/DELETE | `/todo/{todo_id}` | bearer, owner only |
//! | GET | `/admin/todo` | admin |
//! | DELETE | `/admin/todo/{todo_id}` | admin |
//! | GET | `/user/` | bearer |
//! | PATCH | `/user/password_update` | bearer |
//! | PUT | `/user/user_update` | bearer |
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use todosapp_auth;
pub use todosapp_config;
pub use todosapp_core;
pub use todosapp_db;
pub use todosapp_models;
