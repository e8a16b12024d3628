//! Export of tasks and the activity report to files.
//!
//! Two datasets can be exported: the full task list and the
//! completed-per-day counts. Each goes to CSV, pretty-printed JSON or an
//! Excel workbook. Timestamps are written in the same `YYYY-MM-DD HH:MM:SS`
//! form the terminal tables use.
//!
//! ```rust,no_run
//! use tally::db::tasks::Tasks;
//! use tally::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let tasks = Tasks::new()?;
//! let exporter = Exporter::new(ExportFormat::Json, None);
//! let path = exporter.export(&tasks, ExportData::Tasks)?;
//! println!("written to {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::{format_day, format_optional_timestamp, format_timestamp};
use crate::db::tasks::Tasks;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every task, most recent first
    Tasks,
    /// Completed tasks per day
    Activity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub created_at: String,
    pub completed_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id().unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            done: task.is_done(),
            created_at: format_timestamp(&task.created_at()),
            completed_at: format_optional_timestamp(task.completed_at().as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportActivity {
    pub day: String,
    pub count: u32,
}

impl From<&(NaiveDate, u32)> for ExportActivity {
    fn from((day, count): &(NaiveDate, u32)) -> Self {
        ExportActivity {
            day: format_day(day),
            count: *count,
        }
    }
}

const TASK_HEADERS: [&str; 6] = ["ID", "Title", "Description", "Done", "Created", "Completed"];
const ACTIVITY_HEADERS: [&str; 2] = ["Day", "Completed"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `tally_export_<timestamp>.<ext>`
    /// in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("tally_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the requested dataset and returns the path written to.
    pub fn export(&self, tasks: &Tasks, data: ExportData) -> Result<PathBuf> {
        match data {
            ExportData::Tasks => {
                let rows: Vec<ExportTask> = tasks.list_all()?.iter().map(ExportTask::from).collect();
                self.export_tasks(&rows)?;
            }
            ExportData::Activity => {
                let rows: Vec<ExportActivity> = tasks.completed_counts_by_day()?.iter().map(ExportActivity::from).collect();
                self.export_activity(&rows)?;
            }
        }

        Ok(self.output_path.clone())
    }

    pub fn export_tasks(&self, tasks: &[ExportTask]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(TASK_HEADERS)?;
                for task in tasks {
                    wtr.write_record([
                        task.id.to_string(),
                        task.title.clone(),
                        task.description.clone(),
                        task.done.to_string(),
                        task.created_at.clone(),
                        task.completed_at.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(tasks)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                write_headers(worksheet, &TASK_HEADERS)?;

                for (i, task) in tasks.iter().enumerate() {
                    let row = i as u32 + 1;
                    worksheet.write_number(row, 0, task.id as f64)?;
                    worksheet.write_string(row, 1, &task.title)?;
                    worksheet.write_string(row, 2, &task.description)?;
                    worksheet.write_boolean(row, 3, task.done)?;
                    worksheet.write_string(row, 4, &task.created_at)?;
                    worksheet.write_string(row, 5, &task.completed_at)?;
                }

                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }
        Ok(())
    }

    pub fn export_activity(&self, activity: &[ExportActivity]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(ACTIVITY_HEADERS)?;
                for day in activity {
                    wtr.write_record([day.day.clone(), day.count.to_string()])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => self.write_json(activity)?,
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                write_headers(worksheet, &ACTIVITY_HEADERS)?;

                for (i, day) in activity.iter().enumerate() {
                    let row = i as u32 + 1;
                    worksheet.write_string(row, 0, &day.day)?;
                    worksheet.write_number(row, 1, day.count as f64)?;
                }

                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    Ok(())
}
