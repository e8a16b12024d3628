use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::Task},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title, prompted for when omitted
    title: Option<String>,

    /// Longer free-form description
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(tasks: &mut Tasks, args: AddArgs) -> Result<()> {
    let prompted = args.title.is_none();

    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let description = match args.description {
        Some(description) => description,
        None if prompted => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    // An empty title is rejected by the store, so the validation message reaches the user as is.
    let task = tasks.add(Task::new(title.trim(), description.trim()))?;
    msg_success!(Message::TaskAdded(task.title));

    Ok(())
}
