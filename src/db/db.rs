use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "tally.db";

pub struct Db {
    pub conn: Connection,
    pub path: PathBuf,
}

impl Db {
    /// Opens the database in the default data directory.
    pub fn new() -> StoreResult<Db> {
        Self::open(default_path()?)
    }

    /// Opens (creating if needed) the database file at `path` and brings the
    /// schema up to date. Safe to call on every start against an existing file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Db> {
        let mut db = Self::open_without_migrations(path)?;
        init_with_migrations(&mut db.conn).map_err(StoreError::Schema)?;

        Ok(db)
    }

    pub fn open_without_migrations(path: impl AsRef<Path>) -> StoreResult<Db> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path).map_err(|source| StoreError::Open { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "database opened");

        Ok(Db { conn, path })
    }
}

pub fn default_path() -> StoreResult<PathBuf> {
    Ok(DataStorage::new().get_path(DB_FILE_NAME)?)
}
