use super::repo::{AsRepo, Repo};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Sentinel stored for header fields a tune never declared.
pub const UNKNOWN: &str = "Unknown";

/// A persisted catalog row. The header columns are nullable in the schema, so
/// they come back as `Option` even though freshly imported rows always carry
/// at least the `Unknown` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tune {
    pub id: i64,
    pub book_id: i64,
    pub reference_number: String,
    pub title: Option<String>,
    pub rhythm: Option<String>,
    pub key_sig: Option<String>,
    pub content: String,
}

/// A parsed tune that has not been inserted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTune {
    pub book_id: i64,
    pub reference_number: String,
    pub title: String,
    pub rhythm: String,
    pub key_sig: String,
    pub content: String,
}

impl<'a> AsRepo<'a> for Tune {
    fn repo(conn: &'a Connection) -> Repo<'a, Self> {
        Repo::new(conn, "tunes")
    }
}

impl<'a> Repo<'a, Tune> {
    /// Creates the tunes table if it does not exist yet. Existing rows are
    /// untouched.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(
            format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    book_id INTEGER,
                    reference_number TEXT,
                    title TEXT,
                    rhythm TEXT,
                    key_sig TEXT,
                    content TEXT
                )",
                self.table
            )
            .as_str(),
            [],
        )?;
        Ok(())
    }

    pub fn insert(&self, tune: &NewTune) -> Result<i64> {
        self.conn.execute(
            format!(
                "INSERT INTO {} (book_id, reference_number, title, rhythm, key_sig, content)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                self.table
            )
            .as_str(),
            params![
                tune.book_id,
                tune.reference_number,
                tune.title,
                tune.rhythm,
                tune.key_sig,
                tune.content,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}
