//! HTTP layer for frontdesk.
//!
//! Axum-based gateway: chat endpoint, health endpoint, static asset
//! fallback, CORS, and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
