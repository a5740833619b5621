//! Authorization-guarded task operations.
//!
//! [`TaskService`] is the only writer of the task table. Every operation
//! takes the caller identity explicitly, runs its authorization check first
//! and touches the store only after the check passes, so a rejected call
//! never leaves a partial mutation behind.
//!
//! The two visibility-dependent operations (`remove`, `set_checked`) and the
//! visibility toggle itself (`set_private`) deliberately use different rules:
//! anyone may remove or check off a public task, but only the owner may ever
//! change its visibility.

use crate::db::tasks::Tasks;
use crate::db::users::Users;
use crate::libs::task::{Task, TaskFilter};
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// The identity a frontend attributes a call to.
///
/// The service never authenticates; it trusts whatever identity the
/// transport hands it. `user_id` of `None` is an anonymous caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<i64>,
}

impl Caller {
    pub fn authenticated(user_id: i64) -> Self {
        Caller { user_id: Some(user_id) }
    }

    pub fn anonymous() -> Self {
        Caller { user_id: None }
    }
}

/// Closed set of failures a task operation can produce.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An argument failed validation; no mutation was performed.
    #[error("invalid input: {0}")]
    Validation(&'static str),
    /// The caller is not allowed to perform the operation.
    #[error("not authorized")]
    Unauthorized,
    /// The referenced task does not exist.
    #[error("task {0} not found")]
    NotFound(i64),
    /// The store itself failed; reported verbatim, never retried.
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

/// The task store service: four mutations and one filtered read.
pub struct TaskService {
    tasks: Tasks,
    users: Users,
}

impl TaskService {
    pub fn new() -> Result<TaskService> {
        Ok(TaskService {
            tasks: Tasks::new()?,
            users: Users::new()?,
        })
    }

    /// Opens the service against an explicit database path.
    pub fn open(db_path: &Path) -> Result<TaskService> {
        Ok(TaskService {
            tasks: Tasks::open(db_path)?,
            users: Users::open(db_path)?,
        })
    }

    /// Creates a task owned by the caller.
    ///
    /// Requires an authenticated caller; the owner's current display name is
    /// snapshotted into the task record.
    pub fn create(&mut self, caller: &Caller, text: &str) -> Result<Task, ServiceError> {
        let user_id = caller.user_id.ok_or(ServiceError::Unauthorized)?;

        if text.trim().is_empty() {
            return Err(ServiceError::Validation("task text must not be empty"));
        }

        // A session can outlive its user row; treat that as not logged in.
        let user = self.users.get_by_id(user_id)?.ok_or(ServiceError::Unauthorized)?;

        let id = self.tasks.insert(&Task::new(text, user_id, &user.name))?;
        self.load(id)
    }

    /// Deletes a task.
    ///
    /// Private tasks are removable by their owner only; public tasks by
    /// anyone, anonymous callers included.
    pub fn remove(&mut self, caller: &Caller, task_id: i64) -> Result<(), ServiceError> {
        let task = self.load(task_id)?;
        if task.private && caller.user_id != Some(task.owner) {
            return Err(ServiceError::Unauthorized);
        }

        self.tasks.delete(task_id)?;
        Ok(())
    }

    /// Sets the completion flag; same authorization rule as [`TaskService::remove`].
    pub fn set_checked(&mut self, caller: &Caller, task_id: i64, checked: bool) -> Result<(), ServiceError> {
        let task = self.load(task_id)?;
        if task.private && caller.user_id != Some(task.owner) {
            return Err(ServiceError::Unauthorized);
        }

        self.tasks.set_checked(task_id, checked)?;
        Ok(())
    }

    /// Sets the visibility flag; owner only, regardless of current visibility.
    pub fn set_private(&mut self, caller: &Caller, task_id: i64, private: bool) -> Result<(), ServiceError> {
        let task = self.load(task_id)?;
        if caller.user_id != Some(task.owner) {
            return Err(ServiceError::Unauthorized);
        }

        self.tasks.set_private(task_id, private)?;
        Ok(())
    }

    /// All tasks visible to the caller: public ones, plus the caller's own
    /// private ones. Store order, which in practice is insertion order.
    pub fn list(&mut self, caller: &Caller) -> Result<Vec<Task>, ServiceError> {
        Ok(self.tasks.fetch(TaskFilter::VisibleTo(caller.user_id))?)
    }

    fn load(&mut self, task_id: i64) -> Result<Task, ServiceError> {
        self.tasks.get_by_id(task_id)?.ok_or(ServiceError::NotFound(task_id))
    }
}
