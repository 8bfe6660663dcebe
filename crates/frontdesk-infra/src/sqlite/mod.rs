//! SQLite-backed storage for the conversation log.

pub mod exchange;
pub mod pool;
