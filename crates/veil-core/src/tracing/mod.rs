//! Observability for Veil.
//! `tracing` crate with `EnvFilter`; logs go to stderr so stdout stays free
//! for sanitized records.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
