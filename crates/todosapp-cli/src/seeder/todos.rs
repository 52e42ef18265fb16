//! Fake todo generation and batch insertion.

use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::{Sentence, Words};
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};

use super::models::TodoSeed;

const MAX_TEXT_LEN: usize = 100;

fn clamp_text(mut text: String) -> String {
    if text.chars().count() > MAX_TEXT_LEN {
        text = text.chars().take(MAX_TEXT_LEN).collect();
    }
    text
}

/// Generates `per_owner` todos for every owner. Titles and descriptions
/// stay within the lengths the API accepts.
pub fn generate_todos(owner_ids: &[i64], per_owner: usize) -> Vec<TodoSeed> {
    owner_ids
        .par_iter()
        .flat_map(|&owner_id| {
            (0..per_owner)
                .map(|_| {
                    let title: Vec<String> = Words(2..5).fake();
                    let description: String = Sentence(4..10).fake();

                    TodoSeed {
                        title: clamp_text(title.join(" ")),
                        description: clamp_text(description),
                        priority: (1..6).fake::<i32>(),
                        complete: Boolean(25).fake(),
                        owner_id,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

// 5 params per todo
const BATCH_SIZE: usize = 1000;

pub async fn insert_todos_batch(
    tx: &mut Transaction<'_, Postgres>,
    todos: &[TodoSeed],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in todos.chunks(BATCH_SIZE) {
        inserted += insert_todos_chunk(tx, chunk).await?;
    }

    Ok(inserted)
}

async fn insert_todos_chunk(
    tx: &mut Transaction<'_, Postgres>,
    todos: &[TodoSeed],
) -> Result<u64, sqlx::Error> {
    if todos.is_empty() {
        return Ok(0);
    }

    let mut query =
        String::from("INSERT INTO todos (title, description, priority, complete, owner_id) VALUES ");

    for i in 0..todos.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 5;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5
        ));
    }

    let mut q = sqlx::query(&query);
    for todo in todos {
        q = q
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.priority)
            .bind(todo.complete)
            .bind(todo.owner_id);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_todos_fit_api_rules() {
        let todos = generate_todos(&[1, 2, 3], 20);

        assert_eq!(todos.len(), 60);
        for todo in &todos {
            assert!((1..=5).contains(&todo.priority));
            assert!(todo.title.chars().count() >= 3 && todo.title.chars().count() <= 100);
            assert!(
                todo.description.chars().count() >= 3 && todo.description.chars().count() <= 100
            );
        }
        assert_eq!(todos.iter().filter(|t| t.owner_id == 2).count(), 20);
    }

    #[test]
    fn test_clamp_text() {
        assert_eq!(clamp_text("short".to_string()), "short");
        assert_eq!(clamp_text("x".repeat(150)).len(), 100);
    }
}
