//! Process configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use crate::error::{BotError, Result};

pub const DEFAULT_MODEL: &str = "gpt-5-chat-latest";
const DEFAULT_DB_FILE: &str = "games.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub discord_token: String,
    pub discord_channel_id: u64,
    pub db_file: PathBuf,
    pub model: String,
    /// When set, a search-augmented diagnostic probe runs before the direct
    /// completion request. Its result is logged and discarded.
    pub augmented_search: bool,
}

impl Config {
    /// Load configuration from the environment. Absence of any required
    /// value is fatal; the run never starts half-configured.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = require("OPENAI_API_KEY")?;
        let discord_token = require("DISCORD_TOKEN")?;
        let discord_channel_id = require("DISCORD_CHANNEL_ID")?
            .parse::<u64>()
            .map_err(|e| {
                BotError::Config(format!("DISCORD_CHANNEL_ID is not a valid channel id: {e}"))
            })?;
        let db_file = env::var("DB_FILE")
            .unwrap_or_else(|_| DEFAULT_DB_FILE.to_string())
            .into();
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let augmented_search = env::var("AUGMENTED_SEARCH")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            openai_api_key,
            discord_token,
            discord_channel_id,
            db_file,
            model,
            augmented_search,
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).map_err(|_| BotError::Config(format!("{key} must be set")))
}
