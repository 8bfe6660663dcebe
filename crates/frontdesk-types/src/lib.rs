//! Shared domain types for frontdesk.
//!
//! Contains the runtime configuration, the chat exchange record, and the
//! error taxonomy used across the gateway, the completion clients, and the
//! conversation log.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod exchange;
