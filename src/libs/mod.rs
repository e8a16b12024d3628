//! Core library modules for tally.
//!
//! - **Domain**: the task record ([`task`]) and store errors ([`error`])
//! - **Infrastructure**: configuration, data directory, user-facing messages
//! - **Presentation**: tables, the completion chart, formatting and export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::db::tasks::Tasks;
//! use tally::libs::task::Task;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.add(Task::new("Plan the week", ""))?;
//! # Ok::<(), tally::libs::error::StoreError>(())
//! ```

pub mod chart;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
