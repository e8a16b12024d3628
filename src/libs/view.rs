use super::formatter::{format_day, format_done, format_optional_timestamp, format_timestamp};
use super::task::Task;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DONE", "CREATED", "COMPLETED"]);
        for task in tasks {
            table.add_row(row![
                task.id().unwrap_or(0),
                task.title,
                task.description,
                c->format_done(task.is_done()),
                format_timestamp(&task.created_at()),
                format_optional_timestamp(task.completed_at().as_ref())
            ]);
        }
        table.printstd();
    }

    pub fn activity(counts: &[(NaiveDate, u32)]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "COMPLETED"]);
        for (day, count) in counts {
            table.add_row(row![format_day(day), r->count]);
        }
        table.printstd();
    }
}
