use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

/// A single ranked score with its submission timestamp (UTC text, as
/// produced by SQLite's `datetime('now')`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub score: u64,
    pub recorded_at: String,
}

/// Persistent top-N high-score table.
///
/// Schema:
/// - scores(id INTEGER PRIMARY KEY, score BIGINT, recorded_at TEXT)
///
/// The store is an explicitly constructed value handed to whoever needs it;
/// dropping it closes the connection. Only the `keep` best scores survive a
/// submission.
pub struct ScoreStore {
    db_path: PathBuf,
    conn: Connection,
    keep: usize,
}

impl ScoreStore {
    /// Create or open the score database at `path`, ensure schema exists.
    pub fn open<P: AsRef<Path>>(path: P, keep: usize) -> Result<Self, rusqlite::Error> {
        let db_path = path.as_ref().to_path_buf();
        let conn = Connection::open(&db_path)?;
        conn.pragma_update(None, "journal_mode", &"WAL")?;
        conn.pragma_update(None, "synchronous", &"NORMAL")?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                id INTEGER PRIMARY KEY,
                score BIGINT NOT NULL,
                recorded_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self {
            db_path,
            conn,
            keep: keep.max(1),
        })
    }

    /// Record a finished game's final score, stamped with the current time.
    /// Rows beyond the `keep` best are pruned; ties keep the earlier record.
    pub fn submit(&mut self, score: u64) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO scores (score, recorded_at) VALUES (?1, datetime('now'))",
            params![score as i64],
        )?;
        self.conn.execute(
            "DELETE FROM scores WHERE id NOT IN (
                 SELECT id FROM scores ORDER BY score DESC, recorded_at ASC, id ASC LIMIT ?1
             )",
            params![self.keep as i64],
        )?;
        Ok(())
    }

    /// The retained scores, best first.
    pub fn top_scores(&self) -> Result<Vec<ScoreRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT score, recorded_at FROM scores ORDER BY score DESC, recorded_at ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ScoreRecord {
                score: row.get::<_, i64>(0)? as u64,
                recorded_at: row.get::<_, String>(1)?,
            })
        })?;
        rows.collect()
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// How many scores the store retains.
    pub fn keep(&self) -> usize {
        self.keep
    }
}
