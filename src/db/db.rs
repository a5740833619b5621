use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskhub.db";

/// Owns a SQLite connection with all pending migrations applied.
///
/// Every repository opens its own `Db`; SQLite serializes concurrent writers
/// on the file itself, no coordination happens above it.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path.
    ///
    /// Tests use this to point repositories at a temporary file instead of
    /// the shared data directory.
    pub fn open(db_path: &Path) -> Result<Db> {
        let mut conn = Connection::open(db_path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without running migrations.
    ///
    /// Used by the `migrations` maintenance command to inspect schema state.
    #[cfg(debug_assertions)]
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Connection::open(db_file_path)?)
    }
}
