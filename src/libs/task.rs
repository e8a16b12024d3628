//! The task record and its done/undone lifecycle.
//!
//! A [`Task`] is built in memory without an id, persisted by
//! [`Tasks::add`](crate::db::tasks::Tasks::add) (which assigns the id), changed
//! any number of times through [`Tasks::update`](crate::db::tasks::Tasks::update)
//! and finally removed with [`Tasks::delete`](crate::db::tasks::Tasks::delete).
//!
//! The `done` flag and `completed_at` always move together: a task is done
//! exactly when it carries a completion timestamp. Both fields are private and
//! only change through [`Task::mark_done`], [`Task::mark_undone`] and
//! [`Task::toggle`], so an in-memory value can never break that coupling.
//!
//! ## Usage
//!
//! ```rust
//! use tally::libs::task::Task;
//!
//! let mut task = Task::new("Water the plants", "");
//! assert!(!task.is_done());
//!
//! task.mark_done(None);
//! assert!(task.is_done() && task.completed_at().is_some());
//!
//! task.mark_undone();
//! assert!(task.completed_at().is_none());
//! ```

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: Option<i64>,
    pub title: String,
    pub description: String,
    created_at: NaiveDateTime,
    completed_at: Option<NaiveDateTime>,
    done: bool,
}

impl Task {
    /// Creates an unsaved, not-done task stamped with the current local time.
    ///
    /// No validation happens here; drafts with an empty title are fine until
    /// they are handed to the store.
    pub fn new(title: &str, description: &str) -> Self {
        Self::with_created_at(title, description, now())
    }

    /// Same as [`Task::new`] but with an explicit creation time.
    pub fn with_created_at(title: &str, description: &str, created_at: NaiveDateTime) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            created_at,
            completed_at: None,
            done: false,
        }
    }

    /// Rebuilds a task exactly as it was stored. Only the store calls this.
    pub(crate) fn restore(
        id: i64,
        title: String,
        description: String,
        created_at: NaiveDateTime,
        completed_at: Option<NaiveDateTime>,
        done: bool,
    ) -> Self {
        Task {
            id: Some(id),
            title,
            description,
            created_at,
            completed_at,
            done,
        }
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        self.completed_at
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the task as done at `when`, or now if no time is given.
    ///
    /// Calling this on a task that is already done changes nothing; the
    /// first completion time is kept.
    pub fn mark_done(&mut self, when: Option<NaiveDateTime>) {
        if self.done {
            return;
        }
        self.done = true;
        self.completed_at = Some(when.unwrap_or_else(now));
    }

    /// Clears the done flag and the completion time, whatever the prior state.
    pub fn mark_undone(&mut self) {
        self.done = false;
        self.completed_at = None;
    }

    /// Flips the done state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        if self.done {
            self.mark_undone();
        } else {
            self.mark_done(None);
        }
        self.done
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Which tasks a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Done,
    Pending,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Done => task.is_done(),
            TaskFilter::Pending => !task.is_done(),
        }
    }
}
