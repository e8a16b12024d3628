#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tally::db::tasks::Tasks;
    use tally::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct LifecycleTestContext {
        temp_dir: TempDir,
    }

    impl LifecycleTestContext {
        fn open(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("tally.db")).unwrap()
        }
    }

    impl TestContext for LifecycleTestContext {
        fn setup() -> Self {
            LifecycleTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Draft", "");
        assert_eq!(task.id(), None);
        assert!(!task.is_done());
        assert_eq!(task.completed_at(), None);
    }

    #[test]
    fn test_mark_done_keeps_first_completion() {
        let mut task = Task::with_created_at("Walk", "", at(2025, 1, 1, 8, 0));

        task.mark_done(Some(at(2025, 1, 2, 9, 0)));
        task.mark_done(Some(at(2025, 1, 3, 9, 0)));

        assert!(task.is_done());
        assert_eq!(task.completed_at(), Some(at(2025, 1, 2, 9, 0)));
    }

    #[test]
    fn test_mark_done_without_time_uses_now() {
        let mut task = Task::new("Now", "");
        let before = chrono::Local::now().naive_local();

        task.mark_done(None);

        let completed = task.completed_at().unwrap();
        assert!(completed >= before);
    }

    #[test]
    fn test_mark_undone_clears_completion() {
        let mut task = Task::new("Undo me", "");
        task.mark_done(None);
        task.mark_undone();
        assert!(!task.is_done());
        assert_eq!(task.completed_at(), None);

        // Idempotent on a pending task.
        task.mark_undone();
        assert!(!task.is_done());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut task = Task::new("Flip", "");
        assert!(task.toggle());
        assert!(task.completed_at().is_some());
        assert!(!task.toggle());
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn test_filter_matches() {
        let pending = Task::new("Pending", "");
        let mut done = Task::new("Done", "");
        done.mark_done(None);

        assert!(TaskFilter::All.matches(&pending) && TaskFilter::All.matches(&done));
        assert!(TaskFilter::Done.matches(&done) && !TaskFilter::Done.matches(&pending));
        assert!(TaskFilter::Pending.matches(&pending) && !TaskFilter::Pending.matches(&done));
    }

    #[test_context(LifecycleTestContext)]
    #[test]
    fn test_done_state_persists(ctx: &mut LifecycleTestContext) {
        let mut tasks = ctx.open();
        let mut task = tasks.add(Task::with_created_at("Ship", "", at(2025, 3, 1, 10, 0))).unwrap();
        let id = task.id().unwrap();

        task.mark_done(Some(at(2025, 3, 2, 17, 30)));
        tasks.update(&task).unwrap();

        let stored = tasks.get(id).unwrap().unwrap();
        assert!(stored.is_done());
        assert_eq!(stored.completed_at(), Some(at(2025, 3, 2, 17, 30)));
        assert_eq!(stored.created_at(), at(2025, 3, 1, 10, 0));

        let mut stored = stored;
        stored.mark_undone();
        tasks.update(&stored).unwrap();

        let stored = tasks.get(id).unwrap().unwrap();
        assert!(!stored.is_done());
        assert_eq!(stored.completed_at(), None);
    }
}
