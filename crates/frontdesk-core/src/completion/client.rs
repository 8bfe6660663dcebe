//! CompletionClient trait definition.
//!
//! The single capability the gateway needs from a completion provider:
//! submit prompt text, receive reply text or an error. Implementations live
//! in frontdesk-infra (chat-completions and legacy-completions variants).

use frontdesk_types::error::CompletionError;

/// Trait for completion provider backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The call is
/// synchronous from the caller's point of view: it resolves with the full,
/// non-streamed reply or an error. One attempt, pass/fail -- implementations
/// must not retry.
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name (e.g., "openai-chat", "openai-legacy").
    fn name(&self) -> &str;

    /// Send the prompt to the provider and return the first generated
    /// text candidate.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
