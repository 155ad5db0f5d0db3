//! Per-call request configuration.
//!
//! A [`RequestOptions`] value is created fresh for every call, filled in by
//! the option setters in call order, and consumed once by
//! [`crate::endpoints::build_request`].
//!
//! # Invariants
//! - Scalar settings are last-write-wins; setting a field twice keeps the
//!   second value without error.
//! - Header additions accumulate, so the same name may carry several values.
//!   [`RequestOptions::opaque_id`] is the exception and replaces any earlier
//!   `X-Opaque-Id` value.
//! - `master_timeout` and `cluster_manager_timeout` are independent; both are
//!   sent when both are set.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::endpoints::QueryParams;
use crate::endpoints::params::{
    CLUSTER_MANAGER_TIMEOUT, ERROR_TRACE, FILTER_PATH, HUMAN, MASTER_TIMEOUT, PRETTY, TIMEOUT,
    WAIT_FOR_ACTIVE_SHARDS,
};
use crate::error::{ClientError, Result};

/// Header carrying the caller's opaque trace id.
pub const OPAQUE_ID_HEADER: &str = "X-Opaque-Id";

/// Optional settings for one security API call.
///
/// Fields are public so a configuration can be written as a struct literal;
/// the consuming setters exist for chained construction.
///
/// ```
/// use std::time::Duration;
/// use opensearch_security_client::RequestOptions;
///
/// let options = RequestOptions::new()
///     .timeout(Duration::from_secs(5))
///     .pretty()
///     .opaque_id("trace-1");
/// assert_eq!(options.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Request body, forwarded unmodified and always labelled as JSON.
    pub body: Option<reqwest::Body>,
    /// Deprecated alias of `cluster_manager_timeout`.
    pub master_timeout: Option<Duration>,
    pub cluster_manager_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub wait_for_active_shards: Option<String>,
    pub pretty: bool,
    pub human: bool,
    pub error_trace: bool,
    pub filter_path: Vec<String>,
    /// Caller headers in insertion order; validated when the request is built.
    pub headers: Vec<(String, String)>,
    pub cancellation: Option<CancellationToken>,
    /// Point in time after which the transport should give up.
    pub deadline: Option<Instant>,
}

impl RequestOptions {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<reqwest::Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as JSON and use it as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestBuild`] if serialization fails.
    pub fn json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ClientError::RequestBuild(format!("Failed to serialize body: {}", e)))?;
        Ok(self.body(bytes))
    }

    /// Explicit operation timeout for the connection to the cluster-manager node.
    #[deprecated(note = "use `cluster_manager_timeout` instead")]
    pub fn master_timeout(mut self, timeout: Duration) -> Self {
        self.master_timeout = Some(timeout);
        self
    }

    /// Explicit operation timeout for the connection to the cluster-manager node.
    pub fn cluster_manager_timeout(mut self, timeout: Duration) -> Self {
        self.cluster_manager_timeout = Some(timeout);
        self
    }

    /// Explicit operation timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Number of active shards to wait for before the operation returns.
    pub fn wait_for_active_shards(mut self, shards: impl Into<String>) -> Self {
        self.wait_for_active_shards = Some(shards.into());
        self
    }

    /// Pretty-print the response body.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Render statistical values in human-readable form.
    pub fn human(mut self) -> Self {
        self.human = true;
        self
    }

    /// Include stack traces for errors in the response body.
    pub fn error_trace(mut self) -> Self {
        self.error_trace = true;
        self
    }

    /// Restrict the response body to the given paths.
    pub fn filter_path<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_path = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Add a header value. Earlier values for the same name are kept.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several header values.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the `X-Opaque-Id` header, replacing any previous value.
    pub fn opaque_id(mut self, id: impl Into<String>) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(OPAQUE_ID_HEADER));
        self.headers.push((OPAQUE_ID_HEADER.to_string(), id.into()));
        self
    }

    /// Cancel the in-flight request when `token` is cancelled.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Give the transport a deadline for this request.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Serialize the non-default query parameters honored by `honored`.
    ///
    /// Keys come back sorted, which is also their order on the wire.
    pub fn query_pairs(&self, honored: QueryParams) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();

        crate::query_params! { params, honored =>
            MASTER_TIMEOUT, MASTER_TIMEOUT => duration self.master_timeout,
            CLUSTER_MANAGER_TIMEOUT, CLUSTER_MANAGER_TIMEOUT => duration self.cluster_manager_timeout,
            TIMEOUT, TIMEOUT => duration self.timeout,
            WAIT_FOR_ACTIVE_SHARDS, WAIT_FOR_ACTIVE_SHARDS => ref self.wait_for_active_shards,
            PRETTY, PRETTY => flag self.pretty,
            HUMAN, HUMAN => flag self.human,
            ERROR_TRACE, ERROR_TRACE => flag self.error_trace,
            FILTER_PATH, FILTER_PATH => join self.filter_path,
        }

        params
    }
}
