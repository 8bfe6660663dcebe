//! The conversation log record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user message paired with its generated reply and requester metadata.
///
/// Created once per successful gateway call, persisted by the conversation
/// logger, never mutated or deleted by this system. An exchange exists only
/// for completions that succeeded -- failed attempts leave no record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    /// Remote address of the HTTP caller, as seen by the gateway.
    pub requester_address: String,
    /// The user's message, after whitespace trimming.
    pub input_text: String,
    /// The reply text returned by the completion provider.
    pub output_text: String,
    /// When the exchange was completed.
    pub created_at: DateTime<Utc>,
}

impl ChatExchange {
    /// Build an exchange stamped with the current time.
    pub fn new(
        requester_address: impl Into<String>,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            requester_address: requester_address.into(),
            input_text: input_text.into(),
            output_text: output_text.into(),
            created_at: Utc::now(),
        }
    }
}
