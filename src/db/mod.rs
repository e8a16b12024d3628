//! Database layer for tally.
//!
//! All persistence goes through SQLite. [`db::Db`] opens the file and applies
//! the schema migrations, [`tasks::Tasks`] is the task store every front-end
//! talks to.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::db::tasks::Tasks;
//! use tally::libs::task::Task;
//!
//! let mut tasks = Tasks::new()?;
//! let task = tasks.add(Task::new("Review code", "Check PR #123"))?;
//! assert!(task.id().is_some());
//! # Ok::<(), tally::libs::error::StoreError>(())
//! ```

/// Connection opening and schema initialisation.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The task store: CRUD plus the completed-per-day report.
pub mod tasks;
