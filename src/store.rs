//! SQLite-backed schedule store.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use rusqlite::types::Type;
use tracing::info;

use crate::error::{BotError, Result};
use crate::model::game::{GameRecord, NewGame};
use crate::model::watch::WatchKind;

/// Idempotent DDL, run on every open. Re-running it against an existing
/// database is a no-op.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS games (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    date          DATE NOT NULL,
    opponent      TEXT NOT NULL,
    home          BOOLEAN NOT NULL,
    team_rank     INTEGER,
    opponent_rank INTEGER,
    time_et       TEXT NOT NULL,
    time_paris    TEXT NOT NULL,
    watch         TEXT NOT NULL,
    summary       TEXT,
    created_at    TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

/// Durable store of game records, backed by a single SQLite file. The
/// connection is released when the store drops, on every exit path.
pub struct ScheduleStore {
    conn: Connection,
}

impl ScheduleStore {
    /// Open (or create) the database at `path` and run schema
    /// initialisation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_conn(Connection::open(path)?)
    }

    /// Open an in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_conn(Connection::open_in_memory()?)
    }

    fn with_conn(conn: Connection) -> Result<Self> {
        // If the DDL fails, `conn` drops here and the handle is released.
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Append a batch of games, assigning `id` and `created_at`.
    ///
    /// All-or-nothing: the batch runs inside one transaction, so a record
    /// that fails validation rolls back everything inserted before it.
    pub fn insert_batch(&mut self, games: &[NewGame]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO games (date, opponent, home, team_rank, opponent_rank, time_et, time_paris, watch, summary)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for game in games {
                if game.opponent.trim().is_empty() {
                    return Err(BotError::StoreInvariant(
                        "opponent must be non-empty".to_string(),
                    ));
                }
                stmt.execute(rusqlite::params![
                    game.date.format("%Y-%m-%d").to_string(),
                    game.opponent,
                    game.home,
                    game.team_rank,
                    game.opponent_rank,
                    game.time_et,
                    game.time_paris,
                    game.watch.as_str(),
                    game.summary,
                ])?;
            }
        }
        tx.commit()?;
        info!(inserted = games.len(), "Persisted game batch");
        Ok(games.len())
    }

    /// All stored games, date ascending, ties broken by insertion order.
    pub fn list_ordered_by_date(&self) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, opponent, home, team_rank, opponent_rank, time_et, time_paris, watch, summary, created_at
             FROM games ORDER BY date, id",
        )?;
        let rows = stmt.query_map([], |row| {
            let date_raw: String = row.get(1)?;
            let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
            })?;
            let watch_raw: String = row.get(8)?;
            let watch = WatchKind::parse(&watch_raw).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    8,
                    Type::Text,
                    format!("unknown watch kind: {watch_raw:?}").into(),
                )
            })?;
            Ok(GameRecord {
                id: row.get(0)?,
                date,
                opponent: row.get(2)?,
                home: row.get(3)?,
                team_rank: row.get(4)?,
                opponent_rank: row.get(5)?,
                time_et: row.get(6)?,
                time_paris: row.get(7)?,
                watch,
                summary: row.get(9)?,
                created_at: row.get(10)?,
            })
        })?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }
}
