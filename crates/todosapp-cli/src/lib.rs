//! # Todosapp CLI
//!
//! Administrative commands that talk to the database directly: creating
//! admin accounts and filling a development database with fake data.
//!
//! ## Usage
//!
//! ```ignore
//! use todosapp_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_todos_per_user(5);
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
