//! Display implementation for taskhub application messages.
//!
//! All user-facing text lives here, in one place, so the rest of the code
//! refers to messages by variant rather than by string. Parameterized
//! variants interpolate their payload at format time.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskCompleted(id) => format!("Task {} marked as done", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskMadePrivate(id) => format!("Task {} is now private", id),
            Message::TaskMadePublic(id) => format!("Task {} is now public", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}?", id),
            Message::SelectTaskAction => "What would you like to do?".to_string(),
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptTaskId => "Task ID".to_string(),

            // === AUTHORIZATION MESSAGES ===
            Message::NotAuthorized => "Not authorized".to_string(),
            Message::InvalidInput(reason) => format!("Invalid input: {}", reason),

            // === USER MESSAGES ===
            Message::UserCreated(name) => format!("User '{}' created", name),
            Message::UserAlreadyExists(name) => format!("User '{}' already exists", name),
            Message::UserNotFound(name) => format!("User '{}' not found", name),
            Message::UsersHeader => "👥 Users".to_string(),
            Message::NoUsersFound => "No users found".to_string(),
            Message::ConfirmCreateUser(name) => format!("User '{}' does not exist. Create it?", name),

            // === SESSION MESSAGES ===
            Message::LoggedIn(name) => format!("Logged in as '{}'", name),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "No active session, acting anonymously".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleUser => "Default user configuration".to_string(),
            Message::ConfigModuleView => "Task list view configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultUser => "Default login name".to_string(),
            Message::PromptShowOwner => "Show task owners in the list view?".to_string(),
            Message::PromptShowCreated => "Show creation timestamps in the list view?".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
