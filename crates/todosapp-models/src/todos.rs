use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row of the `todos` table.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

/// Create/replace payload for a todo. Ownership always comes from the
/// caller's identity, so there is no owner field to spoof.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct TodoDto {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 3, max = 100))]
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub priority: i32,
    #[serde(default)]
    pub complete: bool,
}
