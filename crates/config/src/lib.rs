//! Connection configuration for the OpenSearch security client.
//!
//! This crate provides the types and the loader used to describe how a
//! client reaches an OpenSearch cluster: base URL, TLS verification, request
//! timeout and optional credentials, sourced from builder calls, environment
//! variables or a `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
