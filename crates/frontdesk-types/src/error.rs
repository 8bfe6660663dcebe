use thiserror::Error;

/// Errors from loading the runtime configuration.
///
/// All of these are fatal: the process must exit before binding the
/// listening socket, since a partially configured gateway is unsafe to serve.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors from the completion client adapter.
///
/// Every call is attempt-once: no variant triggers a retry.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider could not be reached (transport failure or timeout).
    #[error("completion provider unreachable: {0}")]
    Unreachable(String),

    /// The provider answered with a non-success status or an API error.
    #[error("completion provider error: {message}")]
    Provider { message: String },

    /// The provider answered successfully but with an empty candidate list.
    #[error("completion provider returned no reply candidates")]
    EmptyReply,

    /// The provider's response body could not be decoded.
    #[error("failed to decode completion response: {0}")]
    Deserialization(String),

    /// The completion feature is enabled but no API key is available.
    #[error("completion provider is not configured")]
    NotConfigured,
}

/// Errors from the conversation log (used by trait definitions in frontdesk-core).
///
/// The gateway swallows these on the post-reply path after emitting an
/// operator-facing diagnostic; they never reach the HTTP client.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}
