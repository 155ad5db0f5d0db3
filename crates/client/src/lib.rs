//! Client for the search engine security plugin REST API.
//!
//! This crate builds role and role-mapping requests from a small endpoint
//! table, sends them through a pluggable [`Transport`] and hands back the raw
//! [`Response`]. Request bodies and response bodies are opaque bytes; the
//! caller owns the response body.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod metrics;
pub mod options;
pub mod response;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::SecurityClientBuilder;
pub use client::{RequestBuilder, SecurityClient};
pub use endpoints::{Endpoint, HttpMethod, PreparedRequest, QueryParams};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use options::RequestOptions;
pub use response::{Response, ResponseBody};
pub use transport::{Credentials, HttpTransport, Transport};
