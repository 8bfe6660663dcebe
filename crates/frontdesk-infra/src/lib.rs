//! Infrastructure layer for frontdesk.
//!
//! Contains implementations of the trait seams defined in `frontdesk-core`:
//! SQLite storage for the conversation log, the two completion client
//! variants, and the runtime configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
