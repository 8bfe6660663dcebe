//! Trait seams for frontdesk.
//!
//! This crate defines the "ports" that the infrastructure layer implements:
//! the completion client capability and the exchange repository. It depends
//! only on `frontdesk-types` -- never on `frontdesk-infra` or any
//! database/HTTP crate.

pub mod completion;
pub mod repository;
