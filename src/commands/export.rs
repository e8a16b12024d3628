//! `export` command: writes tasks or the activity report to CSV, JSON or Excel.

use crate::{
    db::tasks::Tasks,
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Dataset to export
    #[arg(value_enum, default_value = "tasks")]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `tally_export_<timestamp>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(tasks: &Tasks, args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(tasks, args.data)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
