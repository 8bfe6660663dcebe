//! Completion client implementations.
//!
//! Two interchangeable variants of the [`CompletionClient`] trait from
//! `frontdesk-core`: the chat-completions protocol (via `async-openai`) and
//! the older plain-completions protocol (raw HTTP via `reqwest`). The
//! factory ([`create_client`]) constructs the configured variant once at
//! startup; handlers never branch on the protocol per request.

pub mod chat;
pub mod legacy;

use secrecy::SecretString;

use frontdesk_core::completion::BoxCompletionClient;
use frontdesk_types::config::{CompletionProtocol, RuntimeConfig};

use self::chat::ChatCompletionsClient;
use self::legacy::LegacyCompletionsClient;

/// Create a [`BoxCompletionClient`] for the configured protocol variant.
///
/// The API key has already been resolved from the environment; callers that
/// could not resolve one must not call this and should treat the completion
/// feature as disabled instead.
pub fn create_client(config: &RuntimeConfig, api_key: SecretString) -> BoxCompletionClient {
    match config.completion_protocol {
        CompletionProtocol::Chat => BoxCompletionClient::new(ChatCompletionsClient::new(
            &api_key,
            &config.completion_model,
        )),
        CompletionProtocol::Legacy => BoxCompletionClient::new(LegacyCompletionsClient::new(
            api_key,
            &config.completion_model,
        )),
    }
}
