//! Blocking client for the OpenAI HTTP API.

use serde::Deserialize;
use tracing::{info, warn};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

// Published per-token rates, used only for the diagnostic cost log of the
// search probe.
const USD_PER_INPUT_TOKEN: f64 = 1.25e-6;
const USD_PER_OUTPUT_TOKEN: f64 = 10.0e-6;

/// Thin wrapper around the completion endpoints for one model.
#[derive(Debug)]
pub struct OpenAi {
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: i64,
    #[serde(default)]
    completion_tokens: i64,
}

#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
    #[serde(default)]
    usage: Option<ResponsesUsage>,
}

#[derive(Debug, Deserialize)]
struct ResponsesUsage {
    #[serde(default)]
    input_tokens: i64,
    #[serde(default)]
    output_tokens: i64,
}

impl OpenAi {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    /// Issue one chat-completion request and return the raw message text.
    ///
    /// Failures come back as strings; the fetcher degrades on them instead
    /// of aborting the run.
    pub fn generate(&self, prompt: &str, temperature: f64) -> Result<String, String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": temperature,
        });
        let response = ureq::post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(payload)
            .map_err(|e| format!("chat completion request failed: {e}"))?;
        let status = response.status().as_u16();
        let mut body = response.into_body();
        let parsed: ChatResponse = body
            .read_json()
            .map_err(|e| format!("chat completion body unreadable (status {status}): {e}"))?;
        if let Some(usage) = &parsed.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion usage"
            );
        }
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| "chat completion returned no choices".to_string())
    }

    /// Diagnostic probe: run the same prompt through the Responses API with
    /// web search enabled, log token usage and estimated cost, discard the
    /// text. Only the direct completion feeds the store; probe failures are
    /// logged and ignored.
    pub fn probe_with_search(&self, prompt: &str) {
        let payload = serde_json::json!({
            "model": self.model,
            "input": prompt,
            "tools": [{ "type": "web_search" }],
        });
        match ureq::post(RESPONSES_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(payload)
        {
            Ok(response) => {
                let mut body = response.into_body();
                match body.read_json::<ResponsesEnvelope>() {
                    Ok(parsed) => {
                        let (input, output) = parsed
                            .usage
                            .map(|u| (u.input_tokens, u.output_tokens))
                            .unwrap_or((0, 0));
                        let estimated_usd = input as f64 * USD_PER_INPUT_TOKEN
                            + output as f64 * USD_PER_OUTPUT_TOKEN;
                        info!(
                            input_tokens = input,
                            output_tokens = output,
                            estimated_usd,
                            "Search probe usage"
                        );
                    }
                    Err(e) => warn!(error = %e, "Search probe reply unreadable"),
                }
            }
            Err(e) => warn!(error = %e, "Search probe request failed"),
        }
    }
}
