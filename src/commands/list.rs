use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value = "all")]
    status: TaskFilter,
}

pub fn cmd(tasks: &Tasks, args: ListArgs) -> Result<()> {
    let shown: Vec<_> = tasks.list_all()?.into_iter().filter(|task| args.status.matches(task)).collect();

    if shown.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&shown);
    msg_print!(Message::TasksLoaded(shown.len()));

    Ok(())
}
