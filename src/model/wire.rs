use serde::Deserialize;

use super::watch::WatchKind;

/// Shape of one element of the model's JSON reply. Optional fields map to
/// absent-if-missing; everything else is required.
#[derive(Debug, Deserialize)]
pub struct WireGame {
    pub date: String,
    pub opponent: String,
    pub home: bool,
    #[serde(default)]
    pub team_rank: Option<i64>,
    #[serde(default)]
    pub opponent_rank: Option<i64>,
    pub time_et: String,
    pub watch: WatchKind,
    #[serde(default)]
    pub summary: Option<String>,
}
