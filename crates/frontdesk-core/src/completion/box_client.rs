//! BoxCompletionClient -- object-safe dynamic dispatch wrapper for CompletionClient.
//!
//! `CompletionClient` uses RPITIT, so it cannot be a trait object directly.
//! The usual blanket-impl pattern applies:
//! 1. Define an object-safe `CompletionClientDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionClientDyn` for all `T: CompletionClient`
//! 3. `BoxCompletionClient` wraps `Box<dyn CompletionClientDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use frontdesk_types::error::CompletionError;

use super::client::CompletionClient;

/// Object-safe version of [`CompletionClient`] with boxed futures.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation is
/// provided for all types implementing `CompletionClient`.
pub trait CompletionClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>>;
}

/// Blanket implementation: any `CompletionClient` automatically implements
/// `CompletionClientDyn`.
impl<T: CompletionClient> CompletionClientDyn for T {
    fn name(&self) -> &str {
        CompletionClient::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased completion client for startup-time variant selection.
///
/// The gateway holds one of these; which concrete protocol variant sits
/// inside is decided once from configuration, never per request.
pub struct BoxCompletionClient {
    inner: Box<dyn CompletionClientDyn + Send + Sync>,
}

impl BoxCompletionClient {
    /// Wrap a concrete `CompletionClient` in a type-erased box.
    pub fn new<T: CompletionClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }

    /// Human-readable name of the wrapped client.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send the prompt to the provider and return the reply text.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.inner.complete_boxed(prompt).await
    }
}
