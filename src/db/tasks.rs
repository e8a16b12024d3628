//! The task store: the only place tasks are persisted.
//!
//! [`Tasks`] owns the SQLite connection for one database file. It assigns ids,
//! rejects invalid records and answers the completed-per-day report. Each
//! public operation is a single statement or a single transaction, so it
//! either fully applies or leaves the file unchanged.
//!
//! Failure policy for missing ids:
//! - `get` returns `Ok(None)`.
//! - `delete` is a silent no-op and reports zero rows removed.
//! - `update` fails with [`StoreError::NotFound`], so a stale handle in a
//!   front-end shows up instead of being swallowed.
//!
//! Two processes opening the same file are arbitrated by SQLite's own file
//! locking only; no extra coordination happens here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::db::tasks::Tasks;
//! use tally::libs::task::Task;
//!
//! let mut tasks = Tasks::open("tally.db")?;
//! let mut task = tasks.add(Task::new("Write report", "quarterly numbers"))?;
//! task.mark_done(None);
//! tasks.update(&task)?;
//!
//! for (day, count) in tasks.completed_counts_by_day()? {
//!     println!("{day}: {count}");
//! }
//! # Ok::<(), tally::libs::error::StoreError>(())
//! ```

use super::db::Db;
use crate::libs::error::{StoreError, StoreResult, ValidationError};
use crate::libs::task::Task;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, created_at, completed_at, done) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, created_at = ?4, completed_at = ?5, done = ?6 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, created_at, completed_at, done FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID_DESC: &str = "ORDER BY id DESC";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
// A done row without a readable completed_at is grouped under the epoch day.
const SELECT_COMPLETED_BY_DAY: &str = "SELECT COALESCE(DATE(completed_at), '1970-01-01') AS day, COUNT(*) AS cnt
    FROM tasks
    WHERE done = 1
    GROUP BY day
    ORDER BY day";

/// Day under which done tasks with a missing or unreadable `completed_at` are counted.
pub const EPOCH_DAY: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(day) => day,
    None => panic!("1970-01-01 is a valid date"),
};

pub struct Tasks {
    conn: Connection,
    path: PathBuf,
}

impl Tasks {
    /// Opens the store in the default data directory.
    pub fn new() -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    /// Opens the store backed by the file at `path`, creating the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn, path: db.path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a new task and returns it with its freshly assigned id.
    pub fn add(&mut self, mut task: Task) -> StoreResult<Task> {
        validate_title(&task)?;
        if task.id().is_some() {
            return Err(ValidationError::AlreadyPersisted.into());
        }

        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.created_at(), task.completed_at(), task.is_done()],
        )?;
        let id = self.conn.last_insert_rowid();
        task.assign_id(id);
        info!(id, title = %task.title, "task added");

        Ok(task)
    }

    /// Overwrites every stored field of the row matching `task.id()`.
    pub fn update(&mut self, task: &Task) -> StoreResult<()> {
        let id = task.id().ok_or(ValidationError::MissingId)?;
        validate_title(task)?;

        let affected = self.conn.execute(
            UPDATE_TASK,
            params![id, task.title, task.description, task.created_at(), task.completed_at(), task.is_done()],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!(id, title = %task.title, done = task.is_done(), "task updated");

        Ok(())
    }

    /// Removes the task with `id`. Returns the number of rows removed (0 or 1).
    pub fn delete(&mut self, id: i64) -> StoreResult<usize> {
        let deleted = self.conn.execute(DELETE_TASK, params![id])?;
        if deleted > 0 {
            info!(id, "task deleted");
        } else {
            debug!(id, "delete of unknown task ignored");
        }

        Ok(deleted)
    }

    /// Removes several tasks in one transaction.
    pub fn delete_many(&mut self, ids: &[i64]) -> StoreResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let sql = format!("DELETE FROM tasks WHERE id IN ({})", vec!["?"; ids.len()].join(", "));
        let deleted = tx.execute(&sql, params_from_iter(ids.iter()))?;
        tx.commit()?;
        info!(requested = ids.len(), deleted, "tasks deleted");

        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], row_to_task)
            .optional()?;

        Ok(task)
    }

    /// All tasks, most recently created first.
    pub fn list_all(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID_DESC))?;
        let tasks = stmt.query_map([], row_to_task)?.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = tasks.len(), "tasks listed");

        Ok(tasks)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;

        Ok(count as usize)
    }

    /// Number of done tasks per completion day, oldest day first.
    pub fn completed_counts_by_day(&self) -> StoreResult<Vec<(NaiveDate, u32)>> {
        let mut stmt = self.conn.prepare(SELECT_COMPLETED_BY_DAY)?;
        let counts = stmt
            .query_map([], |row| Ok((row.get::<_, NaiveDate>(0)?, row.get::<_, u32>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(counts)
    }
}

fn validate_title(task: &Task) -> Result<(), ValidationError> {
    if task.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task::restore(
        row.get(0)?,
        row.get(1)?,
        row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}
