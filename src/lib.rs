//! # Tally - a personal task tracker
//!
//! Tasks with a title, description, creation time and completion state are
//! kept in a local SQLite file. The library exposes the task record, the
//! store, and the pieces the command-line front-end is built from.
//!
//! ## Features
//!
//! - **Task lifecycle**: create, edit, mark done/undone, delete
//! - **Activity report**: number of tasks completed per day, as a table or bar chart
//! - **Data export**: tasks and activity to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
