//! Seed rows and seeding configuration.

/// Seed data for creating a user.
pub struct UserSeed {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: String,
}

/// Seed data for creating a todo.
pub struct TodoSeed {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_users: usize,
    pub todos_per_user: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_users: 10,
            todos_per_user: 5,
        }
    }
}

impl SeedConfig {
    pub fn new(num_users: usize) -> Self {
        Self {
            num_users,
            ..Default::default()
        }
    }

    pub fn with_todos_per_user(mut self, todos_per_user: usize) -> Self {
        self.todos_per_user = todos_per_user;
        self
    }

    pub fn total_todos(&self) -> usize {
        self.num_users * self.todos_per_user
    }
}

/// Row counts produced by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub todos: usize,
}
