#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskMadePrivate(i64),
    TaskMadePublic(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(i64),
    SelectTaskAction,
    PromptTaskText,
    PromptTaskId,

    // === AUTHORIZATION MESSAGES ===
    NotAuthorized,
    InvalidInput(String),

    // === USER MESSAGES ===
    UserCreated(String),
    UserAlreadyExists(String),
    UserNotFound(String),
    UsersHeader,
    NoUsersFound,
    ConfirmCreateUser(String),

    // === SESSION MESSAGES ===
    LoggedIn(String),
    LoggedOut,
    NotLoggedIn,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleUser,
    ConfigModuleView,
    PromptSelectModules,
    PromptDefaultUser,
    PromptShowOwner,
    PromptShowCreated,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
