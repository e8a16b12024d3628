//! Error types surfaced by the task store.
//!
//! Validation failures are the caller's fault and are always reported
//! synchronously; nothing is written when one occurs. Everything else wraps
//! the underlying SQLite or filesystem error.

use std::path::PathBuf;
use thiserror::Error;

/// Data supplied by the caller breaks a task invariant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task must have a title.")]
    EmptyTitle,
    #[error("Task must have an id to be updated.")]
    MissingId,
    /// `add` was given a task that already carries an id.
    #[error("Task has already been saved; use update instead.")]
    AlreadyPersisted,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `update` targeted an id that is not in storage.
    #[error("Task with ID {0} not found.")]
    NotFound(i64),

    #[error("Failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Schema creation at open time failed; the store is unusable.
    #[error("Database schema creation failed: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
