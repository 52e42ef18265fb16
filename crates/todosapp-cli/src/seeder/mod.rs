//! Development data seeding.
//!
//! Every seeded username starts with [`SEED_PREFIX`] so [`clear_all`] can
//! remove seeded rows without touching real accounts.

pub mod models;
pub mod todos;
pub mod users;

use std::time::Instant;

use sqlx::PgPool;

use todosapp_core::hash_password;

pub use models::{SeedConfig, SeedSummary, TodoSeed, UserSeed};

pub const SEED_PREFIX: &str = "seed_";

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password";

/// Inserts users and their todos in a single transaction.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} users with {} todos each...",
        config.num_users, config.todos_per_user
    );

    // One digest for everyone; bcrypt per user would dominate the run.
    let password_hash = hash_password(SEED_PASSWORD).map_err(|e| e.error)?;

    let user_seeds = users::generate_users(config.num_users, &password_hash);

    let mut tx = db.begin().await?;

    let owner_ids = users::insert_users_batch(&mut tx, &user_seeds).await?;
    println!("   ✓ Inserted {} users", owner_ids.len());

    let todo_seeds = todos::generate_todos(&owner_ids, config.todos_per_user);
    let inserted_todos = todos::insert_todos_batch(&mut tx, &todo_seeds).await?;
    println!("   ✓ Inserted {} todos", inserted_todos);

    tx.commit().await?;

    println!("✅ Seeding finished in {:?}", start_time.elapsed());

    Ok(SeedSummary {
        users: owner_ids.len(),
        todos: inserted_todos as usize,
    })
}

/// Deletes seeded users and everything they own. Returns the number of
/// users removed.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<u64> {
    let pattern = format!("{}%", SEED_PREFIX.replace('_', "\\_"));

    let mut tx = db.begin().await?;

    let todos = sqlx::query(
        "DELETE FROM todos WHERE owner_id IN (SELECT id FROM users WHERE username LIKE $1)",
    )
    .bind(&pattern)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let users = sqlx::query("DELETE FROM users WHERE username LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    println!("🧹 Removed {} seeded users and {} todos", users, todos);

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrator = "todosapp_db::MIGRATOR")]
    async fn test_seed_then_clear(pool: PgPool) {
        let summary = seed_all(&pool, SeedConfig::new(3).with_todos_per_user(4))
            .await
            .unwrap();
        assert_eq!(summary, SeedSummary { users: 3, todos: 12 });

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 12);

        let removed = clear_all(&pool).await.unwrap();
        assert_eq!(removed, 3);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test(migrator = "todosapp_db::MIGRATOR")]
    async fn test_clear_keeps_real_accounts(pool: PgPool) {
        sqlx::query(
            "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role)
             VALUES ('real@example.com', 'seedling', 'Real', 'User', 'x', TRUE, 'user')",
        )
        .execute(&pool)
        .await
        .unwrap();

        seed_all(&pool, SeedConfig::new(2).with_todos_per_user(1))
            .await
            .unwrap();
        clear_all(&pool).await.unwrap();

        let remaining: Vec<String> = sqlx::query_scalar("SELECT username FROM users")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, vec!["seedling".to_string()]);
    }
}
