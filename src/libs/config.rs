//! Configuration for tally.
//!
//! Settings live in `config.json` inside the application data directory. A
//! missing file, or a missing section inside it, means "use the defaults", so
//! tally works without any setup. `tally init` walks through the sections
//! interactively.
//!
//! ## Database location
//!
//! [`Config::resolve_db_path`] picks the database file, first match wins:
//!
//! 1. an explicit path (the `--db` flag),
//! 2. the `TALLY_DB` environment variable (also read from `.env`),
//! 3. `storage.db_path` from the config file,
//! 4. `tally.db` in the data directory.
//!
//! ```rust,no_run
//! use tally::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.resolve_db_path(None)?;
//! println!("{}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_PATH_ENV: &str = "TALLY_DB";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    pub db_path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Length in characters of the bar for the busiest day.
    pub width: usize,
    pub symbol: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 40,
            symbol: "█".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the config from the data directory, or returns defaults if there is none.
    pub fn read() -> Result<Config> {
        Self::read_from(Self::path()?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the config file. Returns `false` if there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn chart(&self) -> ChartConfig {
        self.chart.clone().unwrap_or_default()
    }

    pub fn resolve_db_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(storage) = &self.storage {
            return Ok(storage.db_path.clone());
        }
        Ok(DataStorage::new().get_path(DB_FILE_NAME)?)
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "chart".to_string(),
                name: Message::ConfigModuleChart.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = match &config.storage {
                        Some(storage) => storage.db_path.clone(),
                        None => DataStorage::new().get_path(DB_FILE_NAME)?,
                    };
                    msg_print!(Message::ConfigModuleStorage);
                    let db_path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDbPath.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.storage = Some(StorageConfig { db_path: PathBuf::from(db_path) });
                }
                "chart" => {
                    let default = config.chart();
                    let width_range = Message::ChartWidthRange.to_string();
                    msg_print!(Message::ConfigModuleChart);
                    config.chart = Some(ChartConfig {
                        width: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptChartWidth.to_string())
                            .default(default.width)
                            .validate_with(|input: &usize| -> Result<(), &str> {
                                if (1..=200).contains(input) {
                                    Ok(())
                                } else {
                                    Err(&width_range)
                                }
                            })
                            .interact_text()?,
                        symbol: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptChartSymbol.to_string())
                            .default(default.symbol)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
