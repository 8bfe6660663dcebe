//! Chat-completions client -- the modern protocol variant.
//!
//! Sends a single user message to an OpenAI-compatible chat completions
//! endpoint and extracts the first generated candidate. Uses [`async_openai`]
//! for type-safe request/response handling.
//!
//! The API key lives inside the `async_openai::Client`; the struct does NOT
//! derive Debug to prevent accidental exposure.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use secrecy::{ExposeSecret, SecretString};

use frontdesk_core::completion::CompletionClient;
use frontdesk_types::error::CompletionError;

/// Completion client speaking the chat-completions protocol.
pub struct ChatCompletionsClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ChatCompletionsClient {
    /// Create a new chat-completions client for the given model.
    pub fn new(api_key: &SecretString, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.expose_secret());

        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionClient for ChatCompletionsClient {
    fn name(&self) -> &str {
        "openai-chat"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                    name: None,
                },
            )],
            ..Default::default()
        };

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or(CompletionError::EmptyReply)
    }
}

/// Map an `async_openai::error::OpenAIError` to a [`CompletionError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> CompletionError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(_) => CompletionError::Provider {
            message: err.to_string(),
        },
        OpenAIError::Reqwest(reqwest_err) => {
            if reqwest_err.status().is_some() {
                CompletionError::Provider {
                    message: err.to_string(),
                }
            } else {
                // No status means the request never completed: DNS failure,
                // refused connection, or timeout.
                CompletionError::Unreachable(err.to_string())
            }
        }
        OpenAIError::JSONDeserialize(_, content) => {
            CompletionError::Deserialization(format!("failed to parse response: {content}"))
        }
        _ => CompletionError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_model() {
        let key = SecretString::from("test-key".to_string());
        let client = ChatCompletionsClient::new(&key, "gpt-4o-mini");
        assert_eq!(client.model(), "gpt-4o-mini");
        assert_eq!(CompletionClient::name(&client), "openai-chat");
    }

    #[test]
    fn api_errors_map_to_provider() {
        let err = async_openai::error::OpenAIError::InvalidArgument("bad".to_string());
        assert!(matches!(
            map_openai_error(err),
            CompletionError::Provider { .. }
        ));
    }
}
