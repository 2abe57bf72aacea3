use serde::{Deserialize, Serialize};

/// Viewing-format tag attached to each game. Any other value in a model
/// reply or a stored row is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchKind {
    Full,
    Condensed,
}

impl WatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchKind::Full => "full",
            WatchKind::Condensed => "condensed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full" => Some(WatchKind::Full),
            "condensed" => Some(WatchKind::Condensed),
            _ => None,
        }
    }
}
