use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single task record.
///
/// `owner` and `username` are fixed at creation time: `username` is a
/// snapshot of the owner's display name and intentionally does not follow
/// later renames. `checked` and `private` are the only mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub text: String,
    pub created_at: Option<NaiveDateTime>,
    pub owner: i64,
    pub username: String,
    pub checked: bool,
    pub private: bool,
}

impl Task {
    pub fn new(text: &str, owner: i64, username: &str) -> Self {
        Task {
            id: None,
            text: text.to_string(),
            created_at: None,
            owner,
            username: username.to_string(),
            checked: false,
            private: false,
        }
    }
}

/// Row filters understood by [`Tasks::fetch`](crate::db::tasks::Tasks::fetch).
///
/// `VisibleTo` implements the read rule of the task store: every public task,
/// plus private tasks owned by the given caller. `VisibleTo(None)` is the
/// anonymous view and yields public tasks only.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    VisibleTo(Option<i64>),
}
