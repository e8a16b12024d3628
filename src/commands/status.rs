//! Completion state commands: `done`, `undone` and `toggle`.

use crate::{
    db::tasks::Tasks,
    libs::{formatter::parse_datetime, messages::Message, task::Task},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id
    id: i64,

    /// Completion time (`YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DD`), now when omitted
    #[arg(long, value_parser = parse_when)]
    at: Option<NaiveDateTime>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task id
    id: i64,
}

pub fn done(tasks: &mut Tasks, args: DoneArgs) -> Result<()> {
    let mut task = fetch(tasks, args.id)?;

    if task.is_done() {
        msg_info!(Message::AlreadyDone(task.title));
        return Ok(());
    }

    task.mark_done(args.at);
    tasks.update(&task)?;
    msg_success!(Message::MarkedDone(task.title));

    Ok(())
}

pub fn undone(tasks: &mut Tasks, args: IdArgs) -> Result<()> {
    let mut task = fetch(tasks, args.id)?;

    task.mark_undone();
    tasks.update(&task)?;
    msg_success!(Message::MarkedUndone(task.title));

    Ok(())
}

pub fn toggle(tasks: &mut Tasks, args: IdArgs) -> Result<()> {
    let mut task = fetch(tasks, args.id)?;

    let done = task.toggle();
    tasks.update(&task)?;

    if done {
        msg_success!(Message::MarkedDone(task.title));
    } else {
        msg_success!(Message::MarkedUndone(task.title));
    }

    Ok(())
}

fn fetch(tasks: &Tasks, id: i64) -> Result<Task> {
    tasks.get(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))
}

fn parse_when(input: &str) -> Result<NaiveDateTime, String> {
    parse_datetime(input).ok_or_else(|| Message::InvalidDateTime(input.to_string()).to_string())
}
