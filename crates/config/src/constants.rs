//! Shared default values for the OpenSearch security workspace.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default OpenSearch HTTP port.
pub const DEFAULT_OPENSEARCH_PORT: u16 = 9200;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_URL: &str = "OPENSEARCH_URL";
pub const ENV_USERNAME: &str = "OPENSEARCH_USERNAME";
pub const ENV_PASSWORD: &str = "OPENSEARCH_PASSWORD";
pub const ENV_API_TOKEN: &str = "OPENSEARCH_API_TOKEN";
pub const ENV_SKIP_VERIFY: &str = "OPENSEARCH_SKIP_VERIFY";
/// Request timeout in whole seconds.
pub const ENV_TIMEOUT: &str = "OPENSEARCH_TIMEOUT";
/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
