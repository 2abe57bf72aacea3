//! Run orchestration: one sequential ingestion run per invocation.

use tracing::{info, instrument};

use crate::config::Config;
use crate::discord::Discord;
use crate::error::{BotError, Result};
use crate::fetcher::ScheduleFetcher;
use crate::notifier;
use crate::openai::OpenAi;
use crate::store::ScheduleStore;

/// One-line outcome for the invocation log.
#[derive(Debug)]
pub struct RunSummary {
    pub fetched: usize,
    pub degraded: bool,
}

/// Execute one run: open store, fetch, persist, notify.
///
/// The pipeline is blocking end to end (HTTP and SQLite), so it runs on the
/// blocking pool and is awaited as a single outstanding operation.
pub async fn run(config: Config) -> Result<RunSummary> {
    let handle = tokio::task::spawn_blocking(move || run_blocking(config));
    handle
        .await
        .map_err(|e| BotError::Internal(format!("run task failed: {e}")))?
}

#[instrument(skip(config))]
fn run_blocking(config: Config) -> Result<RunSummary> {
    let mut store = ScheduleStore::open(&config.db_file)?;

    let client = OpenAi::new(config.openai_api_key, config.model);
    let fetcher = ScheduleFetcher::new(client, config.augmented_search);
    let outcome = fetcher.fetch(chrono::Local::now().date_naive());

    store.insert_batch(&outcome.games)?;

    let discord = Discord::connect(config.discord_token)?;
    let sent = notifier::notify(&store, &discord, config.discord_channel_id);
    discord.close();
    sent?;

    info!(
        fetched = outcome.games.len(),
        degraded = outcome.degraded,
        "Run complete"
    );
    Ok(RunSummary {
        fetched: outcome.games.len(),
        degraded: outcome.degraded,
    })
}
