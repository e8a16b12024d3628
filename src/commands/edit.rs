use super::select_task;
use crate::{
    db::tasks::Tasks,
    libs::messages::Message,
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id, picked from a list when omitted
    id: Option<i64>,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(tasks: &mut Tasks, args: EditArgs) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => match select_task(tasks, Message::PromptSelectTaskToEdit)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let mut task = match tasks.get(id)? {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFoundWithId(id)),
    };

    let (title, description) = if args.title.is_none() && args.description.is_none() {
        msg_print!(Message::EditingTask(id), true);

        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .with_initial_text(&task.title)
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .with_initial_text(&task.description)
            .allow_empty(true)
            .interact_text()?;

        (title, description)
    } else {
        (
            args.title.unwrap_or_else(|| task.title.clone()),
            args.description.unwrap_or_else(|| task.description.clone()),
        )
    };

    let title = title.trim();
    let description = description.trim();

    if title.is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }

    if title == task.title && description == task.description {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    task.title = title.to_string();
    task.description = description.to_string();
    tasks.update(&task)?;

    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}
