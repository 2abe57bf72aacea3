use chrono::NaiveDate;

use super::watch::WatchKind;

/// A validated game awaiting insertion; the store assigns `id` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewGame {
    pub date: NaiveDate,
    pub opponent: String,
    pub home: bool,
    pub team_rank: Option<i64>,
    pub opponent_rank: Option<i64>,
    /// Kickoff wall clock in the source zone, `HH:MM`.
    pub time_et: String,
    /// Kickoff wall clock in the destination zone, `YYYY-MM-DD HH:MM`.
    /// Computed once at ingestion; the date part can differ from `date`
    /// when the conversion crosses midnight.
    pub time_paris: String,
    pub watch: WatchKind,
    pub summary: Option<String>,
}

/// A persisted game as read back from the store. Append-only: no update or
/// delete path exists.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub opponent: String,
    pub home: bool,
    pub team_rank: Option<i64>,
    pub opponent_rank: Option<i64>,
    pub time_et: String,
    pub time_paris: String,
    pub watch: WatchKind,
    pub summary: Option<String>,
    pub created_at: String,
}
