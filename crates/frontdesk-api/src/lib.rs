//! HTTP gateway for frontdesk.
//!
//! Exposes the router and application state so integration tests can drive
//! the gateway without binding a socket; the `fdesk` binary wires the same
//! pieces behind a TCP listener.

pub mod http;
pub mod state;
