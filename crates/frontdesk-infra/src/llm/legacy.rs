//! Legacy completions client -- the older plain-completions protocol.
//!
//! Sends the raw prompt to `/v1/completions` with a bearer token and reads
//! `choices[0].text` from the response. Kept for deployments still pinned to
//! legacy completion models; selected via `openaiProtocol = "legacy"`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when constructing the Authorization header. The struct does NOT derive
//! Debug for the same reason as the chat variant.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use frontdesk_core::completion::CompletionClient;
use frontdesk_types::error::CompletionError;

/// Upper bound on generated tokens per reply.
const MAX_REPLY_TOKENS: u32 = 150;

/// Coarse network timeout for the single completion attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Completion client speaking the legacy completions protocol.
pub struct LegacyCompletionsClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

/// Request body for the legacy completions endpoint.
#[derive(Debug, Serialize)]
struct LegacyRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

/// Response body from the legacy completions endpoint. Fields we do not
/// read (id, usage, ...) are ignored.
#[derive(Debug, Deserialize)]
struct LegacyResponse {
    #[serde(default)]
    choices: Vec<LegacyChoice>,
}

#[derive(Debug, Deserialize)]
struct LegacyChoice {
    text: String,
}

impl LegacyCompletionsClient {
    /// Create a new legacy completions client for the given model.
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model: model.into(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CompletionClient for LegacyCompletionsClient {
    fn name(&self) -> &str {
        "openai-legacy"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = LegacyRequest {
            model: &self.model,
            prompt,
            max_tokens: MAX_REPLY_TOKENS,
        };

        let response = self
            .client
            .post(self.url("/v1/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Provider {
                message: format!("HTTP {status}: {error_body}"),
            });
        }

        let parsed: LegacyResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Deserialization(e.to_string()))?;

        extract_reply(parsed)
    }
}

/// Pull the first candidate out of a legacy response.
///
/// Legacy completion models prefix the continuation with the newlines that
/// followed the prompt, so the text is trimmed before returning.
fn extract_reply(response: LegacyResponse) -> Result<String, CompletionError> {
    let reply = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text.trim().to_string())
        .ok_or(CompletionError::EmptyReply)?;

    if reply.is_empty() {
        return Err(CompletionError::EmptyReply);
    }
    Ok(reply)
}
