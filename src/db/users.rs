use super::db::Db;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const INSERT_USER: &str = "INSERT INTO users (name, created_at) VALUES (?1, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_USERS: &str = "SELECT id, name, created_at FROM users";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_NAME: &str = "WHERE name = ?1";
const ORDER_BY_NAME: &str = "ORDER BY name";

/// A registered user identity.
///
/// Task creation snapshots `name` into the task record; the user row itself
/// stays the authority for login resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

/// User table repository.
pub struct Users {
    pub conn: Connection,
}

impl Users {
    pub fn new() -> Result<Users> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;

        Ok(Users { conn: db.conn })
    }

    /// Opens the repository against an explicit database path.
    pub fn open(db_path: &Path) -> Result<Users> {
        let db = Db::open(db_path)?;
        db.conn.execute(SCHEMA_USERS, [])?;

        Ok(Users { conn: db.conn })
    }

    /// Creates a user and returns its store-assigned id.
    ///
    /// Fails on duplicate names; callers check with [`Users::get_by_name`]
    /// first when they want a friendlier answer.
    pub fn create(&mut self, name: &str) -> rusqlite::Result<i64> {
        self.conn.execute(INSERT_USER, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&mut self, id: i64) -> rusqlite::Result<Option<User>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_USERS, WHERE_ID), params![id], Self::map_row)
            .optional()
    }

    pub fn get_by_name(&mut self, name: &str) -> rusqlite::Result<Option<User>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_USERS, WHERE_NAME), params![name], Self::map_row)
            .optional()
    }

    pub fn list(&mut self) -> rusqlite::Result<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_USERS, ORDER_BY_NAME))?;
        let user_iter = stmt.query_map([], Self::map_row)?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }

        Ok(users)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}
