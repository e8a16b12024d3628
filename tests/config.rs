#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use tally::libs::config::{ChartConfig, Config, StorageConfig, DB_PATH_ENV};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.chart(), ChartConfig::default());
        assert_eq!(config.chart().width, 40);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                db_path: PathBuf::from("/tmp/somewhere/tally.db"),
            }),
            chart: Some(ChartConfig {
                width: 25,
                symbol: "#".to_string(),
            }),
        };

        config.save_to(ctx.config_path()).unwrap();
        assert_eq!(Config::read_from(ctx.config_path()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "chart": { "width": 10, "symbol": "*" } }"#).unwrap();

        let config = Config::read_from(ctx.config_path()).unwrap();
        assert!(config.storage.is_none());
        assert_eq!(config.chart().width, 10);
        assert_eq!(config.chart().symbol, "*");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(ctx.config_path()).is_err());
    }

    #[test]
    fn test_explicit_db_path_wins() {
        let config = Config {
            storage: Some(StorageConfig {
                db_path: PathBuf::from("configured.db"),
            }),
            chart: None,
        };

        let resolved = config.resolve_db_path(Some(Path::new("explicit.db"))).unwrap();
        assert_eq!(resolved, PathBuf::from("explicit.db"));
    }

    #[test]
    fn test_configured_db_path_used_without_override() {
        if std::env::var_os(DB_PATH_ENV).is_some() {
            return;
        }
        let config = Config {
            storage: Some(StorageConfig {
                db_path: PathBuf::from("configured.db"),
            }),
            chart: None,
        };

        assert_eq!(config.resolve_db_path(None).unwrap(), PathBuf::from("configured.db"));
    }
}
