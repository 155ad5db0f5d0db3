//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define connection settings and optional credentials.
//! - Provide serialization helpers for secrets and durations.
//!
//! Does NOT handle:
//! - Loading from environment variables or `.env` files (see `loader` module).
//! - Building HTTP clients or applying credentials (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` so they never appear in `Debug` output.
//! - Durations serialize as whole seconds.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
