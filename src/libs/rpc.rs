//! Typed call surface over the task service.
//!
//! Frontends address operations through the closed [`Request`] enum instead
//! of a name-keyed method table: one variant per operation, serializable so
//! a transport can carry it as data. [`dispatch`] pairs a request with the
//! caller identity the transport authenticated and routes it to the service.

use crate::libs::service::{Caller, ServiceError, TaskService};
use crate::libs::task::Task;
use serde::{Deserialize, Serialize};

/// One task operation, addressed as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
    Insert { text: String },
    Remove { task_id: i64 },
    SetChecked { task_id: i64, checked: bool },
    SetPrivate { task_id: i64, private: bool },
    List,
}

/// Successful operation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Task { task: Task },
    Tasks { tasks: Vec<Task> },
    Done,
}

/// Routes a request to the service on behalf of `caller`.
pub fn dispatch(service: &mut TaskService, caller: &Caller, request: Request) -> Result<Response, ServiceError> {
    match request {
        Request::Insert { text } => {
            let task = service.create(caller, &text)?;
            Ok(Response::Task { task })
        }
        Request::Remove { task_id } => {
            service.remove(caller, task_id)?;
            Ok(Response::Done)
        }
        Request::SetChecked { task_id, checked } => {
            service.set_checked(caller, task_id, checked)?;
            Ok(Response::Done)
        }
        Request::SetPrivate { task_id, private } => {
            service.set_private(caller, task_id, private)?;
            Ok(Response::Done)
        }
        Request::List => {
            let tasks = service.list(caller)?;
            Ok(Response::Tasks { tasks })
        }
    }
}
