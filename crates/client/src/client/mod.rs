//! Security API client and endpoint constructors.
//!
//! This module provides [`SecurityClient`], which binds a [`Transport`] and a
//! base URL to the endpoint table in [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: reqwest-backed client construction and configuration
//! - `request_builder`: the chained per-call option surface
//! - `roles`: role endpoint constructors
//! - `role_mappings`: role-mapping endpoint constructors
//!
//! # What this module does NOT handle:
//! - Request construction and dispatch (delegated to [`crate::endpoints::request`])
//! - Network I/O (delegated to the [`Transport`])
//!
//! # Invariants
//! - The client holds no per-call state; concurrent calls share nothing but
//!   the transport.
//! - The base URL never ends with a slash.

pub mod builder;
mod request_builder;
mod role_mappings;
mod roles;

pub use request_builder::RequestBuilder;

use crate::endpoints::{self, Endpoint};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::options::RequestOptions;
use crate::response::Response;
use crate::transport::{HttpTransport, Transport};

/// Client for the search engine's security plugin REST API.
///
/// # Creating a Client
///
/// Use [`SecurityClient::builder()`] for a reqwest-backed client:
///
/// ```rust,ignore
/// use opensearch_security_client::{Credentials, SecurityClient};
/// use secrecy::SecretString;
///
/// let client = SecurityClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .credentials(Credentials::Basic {
///         username: "admin".to_string(),
///         password: SecretString::new("admin".to_string().into()),
///     })
///     .build()?;
///
/// let response = client
///     .role_create("readall")
///     .json_body(&serde_json::json!({"cluster_permissions": ["cluster_composite_ops_ro"]}))?
///     .send()
///     .await?;
/// ```
///
/// or [`SecurityClient::with_transport`] to inject any [`Transport`].
#[derive(Debug)]
pub struct SecurityClient<T = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) base_url: String,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SecurityClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SecurityClientBuilder {
        builder::SecurityClientBuilder::new()
    }
}

impl<T: Transport> SecurityClient<T> {
    /// Create a client over an existing transport.
    ///
    /// Trailing slashes are removed from `base_url`.
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: builder::normalize_base_url(base_url.into()),
            metrics: None,
        }
    }

    /// Attach a metrics collector.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Start a call to an arbitrary endpoint descriptor.
    pub fn request(&self, endpoint: Endpoint, identifier: impl Into<String>) -> RequestBuilder<'_, T> {
        RequestBuilder::new(self, endpoint, identifier.into())
    }

    /// Dispatch a fully configured call.
    ///
    /// This is the generic entry point every endpoint constructor ends in.
    pub async fn perform(
        &self,
        endpoint: &Endpoint,
        identifier: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        endpoints::dispatch(
            &self.transport,
            &self.base_url,
            endpoint,
            identifier,
            options,
            self.metrics.as_ref(),
        )
        .await
    }
}
