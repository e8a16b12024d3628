#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),   // title
    TaskUpdated(String), // title
    TaskDeleted(i64),    // id
    TasksDeletedCount(usize),
    TaskNotFoundWithId(i64),
    TasksLoaded(usize),
    NoTasksFound,
    MarkedDone(String),   // title
    MarkedUndone(String), // title
    AlreadyDone(String),  // title
    TitleRequired,
    NoChangesDetected,
    NoTasksSelected,
    TasksToBeDeleted,
    ConfirmDeleteTask(String), // title
    ConfirmDeleteTasks(usize),
    EditingTask(i64),
    InvalidDateTime(String),

    // === CHART MESSAGES ===
    ChartTitle,
    NoCompletedTasks,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleStorage,
    ConfigModuleChart,
    UsingDatabase(String), // path

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectTaskToEdit,
    PromptSelectTasksToDelete,
    PromptSelectModules,
    PromptDbPath,
    PromptChartWidth,
    PromptChartSymbol,
    ChartWidthRange,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
