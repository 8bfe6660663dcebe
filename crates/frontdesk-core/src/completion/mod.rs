//! Completion client capability.
//!
//! [`client::CompletionClient`] is the trait both wire-protocol variants
//! implement; [`box_client::BoxCompletionClient`] erases the concrete type so
//! the variant can be selected once at startup.

pub mod box_client;
pub mod client;

pub use box_client::BoxCompletionClient;
pub use client::CompletionClient;
