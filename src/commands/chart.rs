use crate::{
    db::tasks::Tasks,
    libs::{chart::BarChart, config::ChartConfig, messages::Message, view::View},
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Length of the longest bar, overrides the configured width
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=200))]
    width: Option<u16>,

    /// Print the per-day counts as a table instead of bars
    #[arg(short, long)]
    table: bool,
}

pub fn cmd(tasks: &Tasks, mut config: ChartConfig, args: ChartArgs) -> Result<()> {
    let counts = tasks.completed_counts_by_day()?;

    if args.table {
        if counts.is_empty() {
            msg_info!(Message::NoCompletedTasks);
        } else {
            View::activity(&counts);
        }
        return Ok(());
    }

    if let Some(width) = args.width {
        config.width = usize::from(width);
    }
    print!("{}", BarChart::new(&counts, &config));

    Ok(())
}
