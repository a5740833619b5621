use super::db::Db;
use crate::libs::task::{Task, TaskFilter};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    text TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    owner INTEGER NOT NULL,
    username TEXT NOT NULL,
    checked BOOLEAN NOT NULL ON CONFLICT REPLACE DEFAULT FALSE,
    private BOOLEAN NOT NULL ON CONFLICT REPLACE DEFAULT FALSE
);";
const INSERT_TASK: &str =
    "INSERT INTO tasks (text, created_at, owner, username) VALUES (?1, datetime(CURRENT_TIMESTAMP, 'localtime'), ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, text, created_at, owner, username, checked, private FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_PUBLIC: &str = "WHERE private = 0";
const WHERE_VISIBLE: &str = "WHERE private = 0 OR owner = ?1";
const UPDATE_CHECKED: &str = "UPDATE tasks SET checked = ?2 WHERE id = ?1";
const UPDATE_PRIVATE: &str = "UPDATE tasks SET private = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task table repository.
///
/// Row operations map one-to-one onto single SQL statements; no method spans
/// more than one write. Authorization lives a layer up, in the service.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Opens the repository against an explicit database path.
    pub fn open(db_path: &Path) -> Result<Tasks> {
        let db = Db::open(db_path)?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a task and returns its store-assigned id.
    pub fn insert(&mut self, task: &Task) -> rusqlite::Result<i64> {
        self.conn.execute(INSERT_TASK, params![task.text, task.owner, task.username])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&mut self, id: i64) -> rusqlite::Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> rusqlite::Result<Vec<Task>> {
        let (sql, filter_params) = match filter {
            TaskFilter::All => (SELECT_TASKS.to_string(), vec![]),
            TaskFilter::VisibleTo(None) => (format!("{} {}", SELECT_TASKS, WHERE_PUBLIC), vec![]),
            TaskFilter::VisibleTo(Some(user_id)) => (format!("{} {}", SELECT_TASKS, WHERE_VISIBLE), vec![user_id]),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(rusqlite::params_from_iter(filter_params.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Sets the completion flag; returns the number of affected rows.
    pub fn set_checked(&mut self, id: i64, checked: bool) -> rusqlite::Result<usize> {
        self.conn.execute(UPDATE_CHECKED, params![id, checked])
    }

    /// Sets the visibility flag; returns the number of affected rows.
    pub fn set_private(&mut self, id: i64, private: bool) -> rusqlite::Result<usize> {
        self.conn.execute(UPDATE_PRIVATE, params![id, private])
    }

    /// Deletes a task; returns the number of affected rows.
    pub fn delete(&mut self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_TASK, params![id])
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            text: row.get(1)?,
            created_at: row.get(2)?,
            owner: row.get(3)?,
            username: row.get(4)?,
            checked: row.get(5)?,
            private: row.get(6)?,
        })
    }
}
