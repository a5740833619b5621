use crate::{
    libs::{
        config::Config,
        messages::Message,
        rpc::{dispatch, Request, Response},
        service::{ServiceError, TaskService},
        session,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task owned by the current user
    Add {
        /// Task text
        text: String,
    },
    /// Mark a task as done
    Check {
        /// Task ID
        id: i64,
    },
    /// Mark a task as not done
    Uncheck {
        /// Task ID
        id: i64,
    },
    /// Hide a task from other users
    Private {
        /// Task ID
        id: i64,
    },
    /// Make a task visible to everyone
    Public {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: i64,
    },
    /// List tasks visible to the current user
    List,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Add { text }) => handle_add(text),
        Some(TaskCommand::Check { id }) => handle_set_checked(id, true),
        Some(TaskCommand::Uncheck { id }) => handle_set_checked(id, false),
        Some(TaskCommand::Private { id }) => handle_set_private(id, true),
        Some(TaskCommand::Public { id }) => handle_set_private(id, false),
        Some(TaskCommand::Rm { id }) => handle_rm(id),
        Some(TaskCommand::List) => handle_list(),
        None => handle_interactive(),
    }
}

fn handle_add(text: String) -> Result<()> {
    let caller = session::resolve_caller()?;
    let mut service = TaskService::new()?;

    match dispatch(&mut service, &caller, Request::Insert { text }) {
        Ok(Response::Task { task }) => msg_success!(Message::TaskCreated(task.text)),
        Ok(_) => {}
        Err(error) => return report(error),
    }
    Ok(())
}

fn handle_set_checked(id: i64, checked: bool) -> Result<()> {
    let caller = session::resolve_caller()?;
    let mut service = TaskService::new()?;

    match dispatch(&mut service, &caller, Request::SetChecked { task_id: id, checked }) {
        Ok(_) => {
            if checked {
                msg_success!(Message::TaskCompleted(id));
            } else {
                msg_success!(Message::TaskReopened(id));
            }
        }
        Err(error) => return report(error),
    }
    Ok(())
}

fn handle_set_private(id: i64, private: bool) -> Result<()> {
    let caller = session::resolve_caller()?;
    let mut service = TaskService::new()?;

    match dispatch(&mut service, &caller, Request::SetPrivate { task_id: id, private }) {
        Ok(_) => {
            if private {
                msg_success!(Message::TaskMadePrivate(id));
            } else {
                msg_success!(Message::TaskMadePublic(id));
            }
        }
        Err(error) => return report(error),
    }
    Ok(())
}

fn handle_rm(id: i64) -> Result<()> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(id).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let caller = session::resolve_caller()?;
    let mut service = TaskService::new()?;

    match dispatch(&mut service, &caller, Request::Remove { task_id: id }) {
        Ok(_) => msg_success!(Message::TaskDeleted(id)),
        Err(error) => return report(error),
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let caller = session::resolve_caller()?;
    if caller.user_id.is_none() {
        msg_warning!(Message::NotLoggedIn);
    }
    let mut service = TaskService::new()?;

    match dispatch(&mut service, &caller, Request::List) {
        Ok(Response::Tasks { tasks }) => {
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }

            let view_options = Config::read()?.view.unwrap_or_default();
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks, &view_options)?;
        }
        Ok(_) => {}
        Err(error) => return report(error),
    }
    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Add task", "List tasks", "Complete task", "Delete task"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskText.to_string())
                .interact_text()?;
            handle_add(text)
        }
        1 => handle_list(),
        2 => {
            let id: i64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskId.to_string())
                .interact_text()?;
            handle_set_checked(id, true)
        }
        3 => {
            let id: i64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskId.to_string())
                .interact_text()?;
            handle_rm(id)
        }
        _ => Ok(()),
    }
}

/// Converts a service failure into user-facing output.
///
/// Authorization and lookup failures are reported and swallowed; store
/// failures propagate as real errors.
fn report(error: ServiceError) -> Result<()> {
    match error {
        ServiceError::Unauthorized => msg_error!(Message::NotAuthorized),
        ServiceError::NotFound(id) => msg_error!(Message::TaskNotFoundWithId(id)),
        ServiceError::Validation(reason) => msg_error!(Message::InvalidInput(reason.to_string())),
        ServiceError::Db(error) => return Err(error.into()),
    }
    Ok(())
}
