//! Display implementation for tally messages.
//!
//! All message text is defined here so the wording stays consistent across
//! commands. Variants carrying data interpolate it directly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task added: {}", title),
            Message::TaskUpdated(title) => format!("Task updated: {}", title),
            Message::TaskDeleted(id) => format!("Task deleted: id={}", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s).", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksLoaded(count) => format!("Loaded {} tasks", count),
            Message::NoTasksFound => "No tasks yet. Add one with `tally add`.".to_string(),
            Message::MarkedDone(title) => format!("Marked done: {}", title),
            Message::MarkedUndone(title) => format!("Marked undone: {}", title),
            Message::AlreadyDone(title) => format!("Already done: {}", title),
            Message::TitleRequired => "Title required.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::NoTasksSelected => "No tasks selected.".to_string(),
            Message::TasksToBeDeleted => "The following tasks will be deleted:".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} selected tasks?", count),
            Message::EditingTask(id) => format!("Edit Task #{}", id),
            Message::InvalidDateTime(input) => {
                format!("Cannot read '{}' as a date and time. Use YYYY-MM-DD HH:MM[:SS] or YYYY-MM-DD.", input)
            }

            // === CHART MESSAGES ===
            Message::ChartTitle => "Completed tasks by day".to_string(),
            Message::NoCompletedTasks => "No completed tasks".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleChart => "Chart".to_string(),
            Message::UsingDatabase(path) => format!("Using database {}", path),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptSelectTaskToEdit => "Select a task to edit".to_string(),
            Message::PromptSelectTasksToDelete => "Select tasks to delete (space to select, enter to confirm)".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDbPath => "Database file path".to_string(),
            Message::PromptChartWidth => "Longest bar width (characters)".to_string(),
            Message::PromptChartSymbol => "Bar symbol".to_string(),
            Message::ChartWidthRange => "Width must be between 1 and 200".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", text)
    }
}
