//! Exchange repository trait.

use frontdesk_types::error::StorageError;
use frontdesk_types::exchange::ChatExchange;

/// Durable append log for chat exchanges.
///
/// `record` appends one row; no batching, no multi-exchange transactions,
/// no deduplication. Errors are reported faithfully -- whether a failure is
/// swallowed is the caller's decision, not the repository's.
pub trait ExchangeRepository: Send + Sync {
    /// Append one exchange to the log.
    fn record(
        &self,
        exchange: &ChatExchange,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Lightweight reachability check of the underlying store.
    fn ping(&self) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Number of recorded exchanges.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, StorageError>> + Send;
}
