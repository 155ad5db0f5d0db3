//! Chained option surface for a single security API call.
//!
//! A [`RequestBuilder`] is what every endpoint constructor on
//! [`SecurityClient`] returns. Each method applies one setting to the call's
//! [`RequestOptions`] in order; [`RequestBuilder::send`] dispatches it.

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::SecurityClient;
use crate::endpoints::{self, Endpoint, PreparedRequest};
use crate::error::Result;
use crate::options::RequestOptions;
use crate::response::Response;
use crate::transport::Transport;

/// One pending call bound to an endpoint and a resource identifier.
///
/// ```rust,ignore
/// let response = client
///     .role_mapping_create("readall")
///     .json_body(&serde_json::json!({"users": ["alice"]}))?
///     .cluster_manager_timeout(Duration::from_secs(30))
///     .opaque_id("provisioning-42")
///     .send()
///     .await?;
/// ```
#[must_use = "RequestBuilder does nothing until .send() is called"]
#[derive(Debug)]
pub struct RequestBuilder<'a, T> {
    client: &'a SecurityClient<T>,
    endpoint: Endpoint,
    identifier: String,
    options: RequestOptions,
}

impl<'a, T: Transport> RequestBuilder<'a, T> {
    pub(crate) fn new(client: &'a SecurityClient<T>, endpoint: Endpoint, identifier: String) -> Self {
        Self {
            client,
            endpoint,
            identifier,
            options: RequestOptions::default(),
        }
    }

    /// The endpoint this call is bound to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The options collected so far.
    pub fn current_options(&self) -> &RequestOptions {
        &self.options
    }

    /// Replace the collected options with a pre-built configuration.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Apply an arbitrary mutator to the options.
    pub fn with(mut self, mutate: impl FnOnce(&mut RequestOptions)) -> Self {
        mutate(&mut self.options);
        self
    }

    pub fn body(mut self, body: impl Into<reqwest::Body>) -> Self {
        self.options = self.options.body(body);
        self
    }

    /// Serialize `value` as the JSON request body.
    pub fn json_body<B: Serialize + ?Sized>(mut self, value: &B) -> Result<Self> {
        self.options = self.options.json_body(value)?;
        Ok(self)
    }

    #[deprecated(note = "use `cluster_manager_timeout` instead")]
    pub fn master_timeout(mut self, timeout: Duration) -> Self {
        self.options.master_timeout = Some(timeout);
        self
    }

    pub fn cluster_manager_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.cluster_manager_timeout(timeout);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.timeout(timeout);
        self
    }

    pub fn wait_for_active_shards(mut self, shards: impl Into<String>) -> Self {
        self.options = self.options.wait_for_active_shards(shards);
        self
    }

    pub fn pretty(mut self) -> Self {
        self.options = self.options.pretty();
        self
    }

    pub fn human(mut self) -> Self {
        self.options = self.options.human();
        self
    }

    pub fn error_trace(mut self) -> Self {
        self.options = self.options.error_trace();
        self
    }

    pub fn filter_path<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.filter_path(paths);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options = self.options.header(name, value);
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options = self.options.headers(headers);
        self
    }

    pub fn opaque_id(mut self, id: impl Into<String>) -> Self {
        self.options = self.options.opaque_id(id);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.options = self.options.cancellation(token);
        self
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.options = self.options.deadline(deadline);
        self
    }

    /// Construct the HTTP request without sending it.
    pub fn build(self) -> Result<PreparedRequest> {
        endpoints::build_request(
            &self.client.base_url,
            &self.endpoint,
            &self.identifier,
            self.options,
        )
    }

    /// Send the call through the client's transport.
    pub async fn send(self) -> Result<Response> {
        self.client
            .perform(&self.endpoint, &self.identifier, self.options)
            .await
    }
}
