use nba_reminder::config::Config;
use nba_reminder::error::BotError;
use nba_reminder::run;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let config = Config::from_env()?;
    let summary = run::run(config).await?;
    tracing::info!(
        fetched = summary.fetched,
        degraded = summary.degraded,
        "nba-reminder finished"
    );
    Ok(())
}
