//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use opensearch_security_client::{
    ClientError, Credentials, RequestOptions, SecurityClient, endpoints,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Prefix shared by every role endpoint path.
#[allow(dead_code)]
pub const ROLES_PATH: &str = "/_plugins/_security/api/roles/";

/// Prefix shared by every role-mapping endpoint path.
#[allow(dead_code)]
pub const ROLES_MAPPING_PATH: &str = "/_plugins/_security/api/rolesmapping/";

/// reqwest-backed client pointed at the mock server, without credentials.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SecurityClient {
    SecurityClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build for mock server")
}

/// Single request the mock server received.
#[allow(dead_code)]
pub async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
