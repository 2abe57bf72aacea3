//! Digest rendering and delivery.

use tracing::info;

use crate::discord::Discord;
use crate::error::Result;
use crate::model::game::GameRecord;
use crate::store::ScheduleStore;

const DIGEST_HEADER: &str = "**📅 Cavaliers schedule (upcoming week):**\n\n";

/// Render the stored games into one Discord-ready digest.
pub fn render_digest(games: &[GameRecord]) -> String {
    let mut digest = String::from(DIGEST_HEADER);
    for game in games {
        let venue = if game.home { "🏠" } else { "🏟️" };
        digest.push_str(&format!(
            "**{} {}** {} vs *{}* → **{}**\n",
            game.date.format("%Y-%m-%d"),
            game.time_paris,
            venue,
            game.opponent,
            game.watch.as_str().to_uppercase(),
        ));
        if let Some(summary) = &game.summary {
            digest.push_str(&format!("_{summary}_\n"));
        }
        digest.push('\n');
    }
    digest
}

/// Read the store and deliver the digest as a single message. No pagination
/// or chunking, whatever the transport's size limit.
pub fn notify(store: &ScheduleStore, discord: &Discord, channel_id: u64) -> Result<()> {
    let games = store.list_ordered_by_date()?;
    info!(games = games.len(), "Rendering digest");
    let digest = render_digest(&games);
    discord.send(channel_id, &digest)
}
