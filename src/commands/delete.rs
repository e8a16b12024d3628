use super::task_label;
use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of the tasks to delete, picked from a list when omitted
    ids: Vec<i64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(tasks: &mut Tasks, args: DeleteArgs) -> Result<()> {
    let ids = if args.ids.is_empty() { pick_tasks(tasks)? } else { args.ids };

    if ids.is_empty() {
        msg_info!(Message::NoTasksSelected);
        return Ok(());
    }

    let mut found = Vec::with_capacity(ids.len());
    for id in &ids {
        if let Some(task) = tasks.get(*id)? {
            found.push(task);
        }
    }

    if !args.yes && !found.is_empty() {
        msg_print!(Message::TasksToBeDeleted, true);
        View::tasks(&found);

        let prompt = match found.as_slice() {
            [task] => Message::ConfirmDeleteTask(task.title.clone()),
            _ => Message::ConfirmDeleteTasks(found.len()),
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    // Ids with no matching row are skipped without complaint.
    match ids.as_slice() {
        [id] => {
            if tasks.delete(*id)? > 0 {
                msg_success!(Message::TaskDeleted(*id));
            } else {
                msg_success!(Message::TasksDeletedCount(0));
            }
        }
        _ => {
            let deleted = tasks.delete_many(&ids)?;
            msg_success!(Message::TasksDeletedCount(deleted));
        }
    }

    Ok(())
}

fn pick_tasks(tasks: &Tasks) -> Result<Vec<i64>> {
    let all = tasks.list_all()?;
    if all.is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<String> = all.iter().map(task_label).collect();
    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTasksToDelete.to_string())
        .items(&items)
        .interact()?;

    Ok(selection.into_iter().filter_map(|i| all[i].id()).collect())
}
