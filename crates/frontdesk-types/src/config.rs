//! Runtime configuration loaded once at process start.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which wire protocol the completion client speaks.
///
/// `Chat` is the modern chat-completions protocol; `Legacy` is the older
/// plain-completions protocol. Exactly one variant is active per deployment,
/// chosen once at startup -- handlers never branch on this per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionProtocol {
    Chat,
    Legacy,
}

impl fmt::Display for CompletionProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionProtocol::Chat => write!(f, "chat"),
            CompletionProtocol::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for CompletionProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(CompletionProtocol::Chat),
            "legacy" => Ok(CompletionProtocol::Legacy),
            other => Err(format!("invalid completion protocol: '{other}'")),
        }
    }
}

/// Immutable process-wide runtime configuration.
///
/// Built by the loader in `frontdesk-infra` from the settings file plus
/// environment overrides, then shared via `Arc`. Never mutated after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// TCP port the gateway listens on.
    pub listen_port: u16,
    /// Whether the completion feature is enabled at all.
    pub completion_enabled: bool,
    /// Model identifier sent to the completion provider.
    pub completion_model: String,
    /// Protocol variant the completion client speaks.
    pub completion_protocol: CompletionProtocol,
    /// Company name reported by the health endpoint.
    pub company_name: String,
    /// Business type reported by the health endpoint.
    pub business_type: String,
    /// Operator-set "online" flag reported by the health endpoint.
    pub online: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            listen_port: 3000,
            completion_enabled: false,
            completion_model: "gpt-3.5-turbo".to_string(),
            completion_protocol: CompletionProtocol::Chat,
            company_name: String::new(),
            business_type: String::new(),
            online: false,
        }
    }
}
