pub mod add;
pub mod chart;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod status;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, most recent first")]
    List(list::ListArgs),
    #[command(about = "Edit a task's title or description")]
    Edit(edit::EditArgs),
    #[command(about = "Delete tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as done")]
    Done(status::DoneArgs),
    #[command(about = "Mark a task as not done")]
    Undone(status::IdArgs),
    #[command(about = "Flip a task between done and not done")]
    Toggle(status::IdArgs),
    #[command(about = "Chart completed tasks per day")]
    Chart(chart::ChartArgs),
    #[command(about = "Export tasks or activity to a file")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let Cli { db, command } = self;
        let db = db.as_deref();

        match command {
            Commands::Add(args) => add::cmd(&mut Session::open(db)?.tasks, args),
            Commands::List(args) => list::cmd(&Session::open(db)?.tasks, args),
            Commands::Edit(args) => edit::cmd(&mut Session::open(db)?.tasks, args),
            Commands::Delete(args) => delete::cmd(&mut Session::open(db)?.tasks, args),
            Commands::Done(args) => status::done(&mut Session::open(db)?.tasks, args),
            Commands::Undone(args) => status::undone(&mut Session::open(db)?.tasks, args),
            Commands::Toggle(args) => status::toggle(&mut Session::open(db)?.tasks, args),
            Commands::Chart(args) => {
                let session = Session::open(db)?;
                chart::cmd(&session.tasks, session.config.chart(), args)
            }
            Commands::Export(args) => export::cmd(&Session::open(db)?.tasks, args),
            Commands::Init(args) => init::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args, &Config::read()?.resolve_db_path(db)?),
        }
    }
}

/// The loaded configuration and the open store for one run of the CLI.
pub struct Session {
    pub config: Config,
    pub tasks: Tasks,
}

impl Session {
    pub fn open(db: Option<&Path>) -> Result<Session> {
        let config = Config::read()?;
        let db_path = config.resolve_db_path(db)?;
        msg_debug!(Message::UsingDatabase(db_path.display().to_string()));
        let tasks = Tasks::open(&db_path)?;

        Ok(Session { config, tasks })
    }
}

/// Lets the user pick one task from the list. `None` when there is nothing to pick.
pub(crate) fn select_task(tasks: &Tasks, prompt: Message) -> Result<Option<i64>> {
    let all = tasks.list_all()?;
    if all.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let items: Vec<String> = all.iter().map(task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(all[selection].id())
}

pub(crate) fn task_label(task: &crate::libs::task::Task) -> String {
    let mark = if task.is_done() { "✓" } else { " " };
    format!("[{}] #{} {}", mark, task.id().unwrap_or(0), task.title)
}
