//! Weekly schedule ingestion: window computation, the fixed prompt, and
//! parsing of the model reply into validated games.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{info, warn};

use crate::error::{BotError, Result};
use crate::model::game::NewGame;
use crate::model::wire::WireGame;
use crate::openai::OpenAi;
use crate::timezone;

pub const SOURCE_ZONE: &str = "US/Eastern";
pub const DEST_ZONE: &str = "Europe/Paris";

const TEMPERATURE: f64 = 0.1;

/// Result of one fetch. `degraded` is set when the reply could not be used
/// at all (transport failure or non-JSON text), keeping an empty week
/// distinguishable from a malformed one.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub games: Vec<NewGame>,
    pub degraded: bool,
}

impl FetchOutcome {
    fn degraded() -> Self {
        Self {
            games: Vec::new(),
            degraded: true,
        }
    }
}

/// Requests the upcoming week's schedule from the text-generation
/// capability.
pub struct ScheduleFetcher {
    client: OpenAi,
    augmented: bool,
}

impl ScheduleFetcher {
    pub fn new(client: OpenAi, augmented: bool) -> Self {
        Self { client, augmented }
    }

    /// Fetch the schedule for the week after `today`. Never aborts the run:
    /// transport and parse failures degrade to an empty outcome.
    pub fn fetch(&self, today: NaiveDate) -> FetchOutcome {
        let (week_start, week_end) = week_window(today);
        info!(%week_start, %week_end, "Fetching schedule");
        let prompt = build_prompt(week_start, week_end);

        if self.augmented {
            self.client.probe_with_search(&prompt);
        }

        match self.client.generate(&prompt, TEMPERATURE) {
            Ok(raw) => parse_reply(&raw),
            Err(e) => {
                warn!(error = %e, degraded = true, "Schedule fetch failed; treating as empty week");
                FetchOutcome::degraded()
            }
        }
    }
}

/// The week runs Sunday through Saturday. `week_start` is the upcoming
/// Sunday; when `today` already is a Sunday it is used as-is.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_until_sunday = 6 - i64::from(today.weekday().num_days_from_monday());
    let week_start = today + Duration::days(days_until_sunday);
    (week_start, week_start + Duration::days(6))
}

/// The fixed, auditable prompt sent for a given week window.
pub fn build_prompt(week_start: NaiveDate, week_end: NaiveDate) -> String {
    format!(
        r#"Give me the Cleveland Cavaliers' NBA schedule for the week of {week_start} to {week_end}.
For each game, provide:
- date (YYYY-MM-DD)
- opposing team
- home or away
- Cleveland's current ranking
- the opponent's current ranking
- raw tip-off time in US/Eastern (HH:MM)
- watch: "full" or "condensed"
- a short summary of what is at stake
Reply with nothing but a JSON array in the following format:
[
  {{
    "date": "YYYY-MM-DD",
    "opponent": "Team name",
    "home": true,
    "team_rank": 1,
    "opponent_rank": 2,
    "time_et": "HH:MM",
    "watch": "full",
    "summary": "short text"
  }}
]"#
    )
}

/// Parse a raw model reply into validated games.
///
/// The reply must be a JSON array; anything else is logged with the raw
/// text and degrades to an empty outcome, never an error. Individual
/// elements that fail validation are skipped so one bad element cannot take
/// out the whole week.
pub fn parse_reply(raw: &str) -> FetchOutcome {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, raw = %raw, degraded = true, "Model reply is not valid JSON; treating as empty week");
            return FetchOutcome::degraded();
        }
    };
    let elements = match value {
        serde_json::Value::Array(items) => items,
        other => {
            warn!(raw = %other, degraded = true, "Model reply is not a JSON array; treating as empty week");
            return FetchOutcome::degraded();
        }
    };

    let mut games = Vec::with_capacity(elements.len());
    for element in elements {
        let wire: WireGame = match serde_json::from_value(element) {
            Ok(w) => w,
            Err(e) => {
                warn!(error = %e, "Skipping malformed schedule entry");
                continue;
            }
        };
        match to_new_game(wire) {
            Ok(game) => games.push(game),
            Err(e) => warn!(error = %e, "Skipping schedule entry that failed validation"),
        }
    }
    info!(games = games.len(), "Parsed schedule reply");
    FetchOutcome {
        games,
        degraded: false,
    }
}

/// Validate one wire entry and derive its Paris kickoff time.
fn to_new_game(wire: WireGame) -> Result<NewGame> {
    if wire.opponent.trim().is_empty() {
        return Err(BotError::InvalidInput(
            "opponent must be non-empty".to_string(),
        ));
    }
    let converted = timezone::convert(&wire.date, &wire.time_et, SOURCE_ZONE, DEST_ZONE)?;
    let date = NaiveDate::parse_from_str(&wire.date, "%Y-%m-%d")
        .map_err(|e| BotError::InvalidInput(format!("bad date {:?}: {e}", wire.date)))?;

    Ok(NewGame {
        date,
        opponent: wire.opponent,
        home: wire.home,
        team_rank: wire.team_rank,
        opponent_rank: wire.opponent_rank,
        time_et: wire.time_et,
        time_paris: converted.to_string(),
        watch: wire.watch,
        summary: wire.summary,
    })
}
