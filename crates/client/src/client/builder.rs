//! Client builder for constructing reqwest-backed [`SecurityClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SecurityClient`] endpoint constructors)
//! - Custom transports (use [`SecurityClient::with_transport`])
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::client::SecurityClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::transport::{Credentials, HttpTransport};
use opensearch_security_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SecurityClient`].
///
/// All options have defaults except `base_url`.
///
/// # Example
///
/// ```rust,ignore
/// use opensearch_security_client::SecurityClient;
///
/// let client = SecurityClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct SecurityClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for SecurityClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl SecurityClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster, e.g. `https://localhost:9200`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials the transport authenticates with.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments (e.g. the demo
    /// certificates shipped with the security plugin).
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the client-wide request timeout.
    ///
    /// Default is 30 seconds. A per-call deadline overrides it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.credentials = config.auth.as_ref().map(|auth| match &auth.strategy {
            ConfigAuthStrategy::Basic { username, password } => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::ApiToken { token } => Credentials::ApiToken {
                token: token.clone(),
            },
        });
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`SecurityClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SecurityClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SecurityClient {
            transport: HttpTransport::new(http, self.credentials),
            base_url,
            metrics: self.metrics,
        })
    }
}

/// Remove trailing slashes so endpoint paths never produce `//`.
///
/// - `"https://localhost:9200/"` -> `"https://localhost:9200"`
/// - `"https://localhost:9200//"` -> `"https://localhost:9200"`
pub(crate) fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
