#![forbid(unsafe_code)]

mod error;

pub use error::StoreError;

use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use td_core::model::{Todo, TodoText};

const DB_FILE: &str = "todos.db";

/// Sole owner of the todos table. Opened once at process start and held for
/// the process lifetime; SQLite serializes concurrent writers itself.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    /// Opens (or creates) the store under `storage_dir`. Idempotent: repeated
    /// opens against the same directory keep existing rows.
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let conn = Connection::open(storage_dir.join(DB_FILE))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        install_schema(&conn)?;

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Inserts a new row and returns it with the id SQLite assigned.
    pub fn create(&mut self, text: &TodoText) -> Result<Todo, StoreError> {
        self.conn.execute(
            "INSERT INTO todos (text) VALUES (?1)",
            params![text.as_str()],
        )?;
        Ok(Todo {
            id: self.conn.last_insert_rowid(),
            text: text.as_str().to_string(),
        })
    }

    /// All rows, newest first. An empty store yields an empty vec.
    pub fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text FROM todos ORDER BY id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Todo {
                id: row.get(0)?,
                text: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// True iff a row with `id` existed and was removed. Deleting an absent
    /// id is not an error.
    pub fn delete(&mut self, id: i64) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// Replaces the text of the row with `id`. True iff the row existed;
    /// never creates a row.
    pub fn update(&mut self, id: i64, new_text: &TodoText) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET text = ?1 WHERE id = ?2",
            params![new_text.as_str(), id],
        )?;
        Ok(changed > 0)
    }
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    // completedAt is carried for compatibility with databases written by
    // earlier deployments; no operation reads or writes it.
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;

        CREATE TABLE IF NOT EXISTS todos (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          text TEXT NOT NULL,
          completedAt DATETIME
        );
        "#,
    )?;
    Ok(())
}
