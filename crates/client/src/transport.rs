//! The transport seam: the only place a request touches the network.
//!
//! # What this module handles:
//! - The [`Transport`] trait every dispatch goes through
//! - A plain `reqwest::Client` transport
//! - [`HttpTransport`], a reqwest client that also applies [`Credentials`]
//!
//! # What this module does NOT handle:
//! - Request construction (see [`crate::endpoints::request`])
//! - Retries or backoff; a failed call is reported as-is
//!
//! # Invariants
//! - Implementations must be safe to share between concurrent callers.

use std::future::Future;
use std::sync::Arc;

use reqwest::Request;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;

/// Performs a fully formed HTTP request.
///
/// The returned response still owns its unread body.
pub trait Transport: Send + Sync {
    /// Send `request` and return the raw response, or the failure that
    /// prevented one.
    fn perform(&self, request: Request) -> impl Future<Output = Result<reqwest::Response>> + Send;
}

impl Transport for reqwest::Client {
    async fn perform(&self, request: Request) -> Result<reqwest::Response> {
        Ok(self.execute(request).await?)
    }
}

impl<T: Transport> Transport for &T {
    fn perform(&self, request: Request) -> impl Future<Output = Result<reqwest::Response>> + Send {
        (**self).perform(request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn perform(&self, request: Request) -> impl Future<Output = Result<reqwest::Response>> + Send {
        (**self).perform(request)
    }
}

/// Credentials applied by [`HttpTransport`].
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HTTP basic authentication (internal users database).
    Basic {
        username: String,
        password: SecretString,
    },
    /// Bearer token (e.g. a JWT accepted by the security plugin).
    ApiToken { token: SecretString },
}

/// reqwest-backed transport with optional authentication.
///
/// Credentials are added only when the request does not already carry an
/// `Authorization` header, so a caller header always wins.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Wrap an existing reqwest client.
    pub fn new(http: reqwest::Client, credentials: Option<Credentials>) -> Self {
        Self { http, credentials }
    }

    /// The underlying reqwest client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Whether requests are authenticated by this transport.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

impl Transport for HttpTransport {
    async fn perform(&self, request: Request) -> Result<reqwest::Response> {
        let credentials = match &self.credentials {
            Some(credentials) if !request.headers().contains_key(AUTHORIZATION) => credentials,
            _ => return Ok(self.http.execute(request).await?),
        };

        let builder = reqwest::RequestBuilder::from_parts(self.http.clone(), request);
        let builder = match credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Credentials::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        };

        Ok(builder.send().await?)
    }
}
