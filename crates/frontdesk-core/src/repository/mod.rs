//! Repository trait definitions implemented by frontdesk-infra.

pub mod exchange;

pub use exchange::ExchangeRepository;
