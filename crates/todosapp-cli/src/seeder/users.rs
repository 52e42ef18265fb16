//! Fake user generation and batch insertion.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};

use super::SEED_PREFIX;
use super::models::UserSeed;

pub const SEED_ROLE: &str = "user";

/// Generates `count` users sharing one password digest.
///
/// Usernames and emails carry the index, so they stay unique however the
/// random names collide.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let handle = format!(
                "{}{}{}_{}",
                SEED_PREFIX,
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );

            UserSeed {
                email: format!("{}@example.com", handle),
                username: handle,
                first_name,
                last_name,
                password_hash: password_hash.to_string(),
                role: SEED_ROLE.to_string(),
            }
        })
        .collect()
}

// 7 params per user
const BATCH_SIZE: usize = 1000;

/// Inserts users inside `tx` and returns their ids in input order.
pub async fn insert_users_batch(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<i64>, sqlx::Error> {
    let mut ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        ids.extend(insert_users_chunk(tx, chunk).await?);
    }

    Ok(ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<i64>, sqlx::Error> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role) VALUES ",
    );

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 7;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6,
            p + 7
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.password_hash)
            .bind(true)
            .bind(&user.role);
    }

    q.fetch_all(&mut **tx).await
}
