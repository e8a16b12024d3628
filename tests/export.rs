#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tally::db::tasks::Tasks;
    use tally::libs::export::{ExportActivity, ExportData, ExportFormat, ExportTask, Exporter};
    use tally::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut tasks = Tasks::open(temp_dir.path().join("tally.db")).unwrap();

            let created = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap().and_hms_opt(8, 0, 0).unwrap();
            let mut done = tasks.add(Task::with_created_at("Write report", "numbers, charts", created)).unwrap();
            done.mark_done(Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(17, 30, 0).unwrap()));
            tasks.update(&done).unwrap();
            tasks.add(Task::with_created_at("Call back", "", created)).unwrap();

            ExportTestContext { temp_dir, tasks }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_tasks_to_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        let written = Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.tasks, ExportData::Tasks).unwrap();
        assert_eq!(written, path);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["ID", "Title", "Description", "Done", "Created", "Completed"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Call back");
        assert_eq!(&rows[0][5], "");
        assert_eq!(&rows[1][1], "Write report");
        assert_eq!(&rows[1][2], "numbers, charts");
        assert_eq!(&rows[1][3], "true");
        assert_eq!(&rows[1][5], "2025-01-15 17:30:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_tasks_to_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.tasks, ExportData::Tasks).unwrap();

        let rows: Vec<ExportTask> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title, "Write report");
        assert!(rows[1].done);
        assert_eq!(rows[1].created_at, "2025-01-14 08:00:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_activity_to_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("activity.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.tasks, ExportData::Activity).unwrap();

        let rows: Vec<ExportActivity> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            rows,
            vec![ExportActivity {
                day: "2025-01-15".to_string(),
                count: 1
            }]
        );
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_file_is_written(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.xlsx");
        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(&ctx.tasks, ExportData::Tasks).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_default_output_name_uses_format_extension() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("tally_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}
