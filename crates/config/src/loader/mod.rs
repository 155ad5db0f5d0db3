//! Configuration loader for builder calls, environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values and env vars.
//! - Enforce the `DOTENV_DISABLED` gate before touching `.env` files.
//! - Validate the base URL, timeout and credential combination on `build()`.
//!
//! Invariants / Assumptions:
//! - Later calls win: `from_env()` after `with_*` overrides, and vice versa.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
