use tracing::{error, info};

use crate::error::{BotError, Result};

const API_BASE: &str = "https://discord.com/api/v10";

/// An authenticated Discord session. One connect / send / close cycle per
/// run; no persistent connection is held across runs.
#[derive(Debug)]
pub struct Discord {
    token: String,
}

impl Discord {
    /// Authenticate the bot token against the Discord API.
    pub fn connect(token: String) -> Result<Self> {
        let url = format!("{API_BASE}/users/@me");
        match ureq::get(&url)
            .header("Authorization", format!("Bot {token}"))
            .call()
        {
            Ok(response) => {
                info!(status = response.status().as_u16(), "Authenticated with Discord");
                Ok(Self { token })
            }
            Err(e) => {
                error!(error = %e, "Discord authentication failed");
                Err(BotError::Delivery(format!(
                    "Discord authentication failed: {e}"
                )))
            }
        }
    }

    /// Post a text message to a channel. No retry; a rejected send is fatal.
    pub fn send(&self, channel_id: u64, content: &str) -> Result<()> {
        let url = format!("{API_BASE}/channels/{channel_id}/messages");
        let payload = serde_json::json!({ "content": content });
        match ureq::post(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .send_json(payload)
        {
            Ok(response) => {
                info!(
                    status = response.status().as_u16(),
                    channel_id, "Posted message to Discord channel"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, channel_id, "Failed to post to Discord channel");
                Err(BotError::Delivery(format!(
                    "failed to post to Discord channel {channel_id}: {e}"
                )))
            }
        }
    }

    /// End the session. The REST transport holds nothing open, so this only
    /// marks the lifecycle boundary in the log.
    pub fn close(self) {
        info!("Closed Discord session");
    }
}
