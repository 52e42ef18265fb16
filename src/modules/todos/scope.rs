/// Which rows a todo operation may see.
///
/// Every lookup, update and delete goes through a scope. `Owner` narrows the
/// statement to one user's rows so another user's todo looks exactly like a
/// missing one. `Any` is only handed out behind the admin check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoScope {
    Owner(i64),
    Any,
}

impl TodoScope {
    /// Bound as a nullable `owner_id` filter; `NULL` matches every row.
    pub fn owner_filter(self) -> Option<i64> {
        match self {
            TodoScope::Owner(owner_id) => Some(owner_id),
            TodoScope::Any => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoScope::Owner(_) => "owner",
            TodoScope::Any => "admin",
        }
    }
}
