//! Generic request construction and dispatch for every endpoint descriptor.
//!
//! [`build_request`] turns an [`Endpoint`], a resource identifier and a
//! [`RequestOptions`] into a `reqwest::Request` without doing any I/O.
//! [`dispatch`] sends it through a [`Transport`] and wraps the result.
//!
//! # Invariants
//! - Query parameters are only written when at least one is set, so an empty
//!   configuration never produces a trailing `?`.
//! - A body always gets `Content-Type: application/json`, whatever its bytes.
//! - Caller headers replace an empty header map wholesale and are appended
//!   value-by-value otherwise.
//! - The identifier never leaves the endpoint prefix: a path the URL parser
//!   would rewrite (dot segments, backslashes) is rejected, not normalized.
//! - No retries: construction and transport failures are returned unchanged.

use std::time::{Duration, Instant};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use reqwest::Request;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::endpoints::Endpoint;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::options::RequestOptions;
use crate::response::Response;
use crate::transport::Transport;

/// Media type forced onto every request that carries a body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Characters the URL parser percent-encodes when it sets a path.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Smallest timeout handed to the transport for an already-elapsed deadline.
const ELAPSED_DEADLINE_TIMEOUT: Duration = Duration::from_nanos(1);

/// A constructed request plus the cancellation handle that travels with it.
#[derive(Debug)]
pub struct PreparedRequest {
    pub request: Request,
    pub cancellation: Option<CancellationToken>,
}

/// Build the HTTP request for one call.
///
/// `base_url` is the server root (scheme, host, optional path prefix and
/// query). The endpoint path is appended to its path component.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] if the URL cannot be formed and
/// [`ClientError::InvalidHeader`] for a caller header that is not valid HTTP.
pub fn build_request(
    base_url: &str,
    endpoint: &Endpoint,
    identifier: &str,
    options: RequestOptions,
) -> Result<PreparedRequest> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!(
            "Base URL '{}' cannot carry a path",
            base_url
        )));
    }

    let path = endpoint.path(identifier);
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}{}", base_path, path));

    let expected_path = format!(
        "{}{}",
        base_path,
        utf8_percent_encode(&path, PATH_ENCODE_SET)
    );
    if url.path() != expected_path {
        return Err(ClientError::InvalidUrl(format!(
            "Identifier '{}' does not stay under '{}' (resolved to '{}')",
            identifier,
            endpoint.prefix,
            url.path()
        )));
    }

    let params = options.query_pairs(endpoint.params);
    if !params.is_empty() {
        let mut merged: Vec<(String, String)> = url
            .query_pairs()
            .into_owned()
            .filter(|(key, _)| !params.contains_key(key.as_str()))
            .collect();
        merged.extend(params.into_iter().map(|(k, v)| (k.to_string(), v)));
        merged.sort_by(|a, b| a.0.cmp(&b.0));
        url.query_pairs_mut().clear().extend_pairs(&merged);
    }

    let mut request = Request::new(endpoint.method.into(), url);

    if endpoint.sends_body {
        if let Some(body) = options.body {
            *request.body_mut() = Some(body);
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
    }

    if endpoint.forwards_headers && !options.headers.is_empty() {
        let caller_headers = header_map(&options.headers)?;
        if request.headers().is_empty() {
            *request.headers_mut() = caller_headers;
        } else {
            for (name, value) in caller_headers.iter() {
                request.headers_mut().append(name.clone(), value.clone());
            }
        }
    }

    if let Some(deadline) = options.deadline {
        let remaining = deadline.saturating_duration_since(Instant::now());
        *request.timeout_mut() = Some(remaining.max(ELAPSED_DEADLINE_TIMEOUT));
    }

    Ok(PreparedRequest {
        request,
        cancellation: options.cancellation,
    })
}

/// Convert caller headers into a multi-valued, case-insensitive map.
fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ClientError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
            name: name.clone(),
            message: e.to_string(),
        })?;
        map.append(header_name, header_value);
    }
    Ok(map)
}

/// Build and send one call, returning the wrapped response.
///
/// A remote error status is returned as a normal [`Response`]. When a
/// cancellation token is present the transport call is abandoned as soon as
/// the token fires and [`ClientError::Cancelled`] is returned.
pub async fn dispatch<T: Transport>(
    transport: &T,
    base_url: &str,
    endpoint: &Endpoint,
    identifier: &str,
    options: RequestOptions,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let method = endpoint.method.as_str();
    let result = match build_request(base_url, endpoint, identifier, options) {
        Ok(prepared) => send(transport, endpoint, prepared, metrics).await,
        Err(e) => Err(e),
    };

    if let Err(ref e) = result {
        debug!(endpoint = endpoint.name, method, error = %e, "Security API request failed");
        if let Some(m) = metrics {
            m.record_client_error(endpoint.name, method, e);
        }
    }

    result
}

async fn send<T: Transport>(
    transport: &T,
    endpoint: &Endpoint,
    prepared: PreparedRequest,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let PreparedRequest {
        request,
        cancellation,
    } = prepared;
    let method = endpoint.method.as_str();

    debug!(
        endpoint = endpoint.name,
        method,
        path = request.url().path(),
        has_query = request.url().query().is_some(),
        "Dispatching security API request"
    );

    if let Some(m) = metrics {
        m.record_request(endpoint.name, method);
    }

    let start = Instant::now();
    let raw = match cancellation {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(ClientError::Cancelled),
                result = transport.perform(request) => result,
            }
        }
        None => transport.perform(request).await,
    };
    let elapsed = start.elapsed();

    let status = raw.as_ref().ok().map(|r| r.status().as_u16());
    if let Some(m) = metrics {
        m.record_request_duration(endpoint.name, method, elapsed, status);
    }

    let response = Response::from(raw?);
    debug!(
        endpoint = endpoint.name,
        method,
        status = response.status_code(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Security API request completed"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{ROLE_CREATE, ROLE_DELETE, ROLE_GET, ROLE_MAPPING_DELETE};
    use reqwest::Method;

    const BASE: &str = "http://localhost:9200";

    #[test]
    fn test_build_role_create_without_options() {
        let prepared = build_request(BASE, &ROLE_CREATE, "readall", RequestOptions::new()).unwrap();
        let request = prepared.request;

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/_plugins/_security/api/roles/readall");
        assert_eq!(request.url().query(), None);
        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.timeout().is_none());
        assert!(prepared.cancellation.is_none());
    }

    #[test]
    fn test_build_role_create_with_body_sets_json_content_type() {
        let options = RequestOptions::new().body("not json at all");
        let request = build_request(BASE, &ROLE_CREATE, "readall", options)
            .unwrap()
            .request;

        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(&b"not json at all"[..])
        );
    }

    #[test]
    fn test_build_query_string_sorted() {
        let options = RequestOptions::new()
            .timeout(Duration::from_secs(5))
            .pretty()
            .filter_path(["a", "b"]);
        let request = build_request(BASE, &ROLE_CREATE, "readall", options)
            .unwrap()
            .request;

        assert_eq!(
            request.url().query(),
            Some("filter_path=a%2Cb&pretty=true&timeout=5000ms")
        );
    }

    #[test]
    fn test_build_delete_ignores_params_body_and_headers() {
        let options = RequestOptions::new()
            .timeout(Duration::from_secs(5))
            .pretty()
            .body("{}")
            .header("X-Custom", "1");
        let request = build_request(BASE, &ROLE_MAPPING_DELETE, "readall", options)
            .unwrap()
            .request;

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(
            request.url().path(),
            "/_plugins/_security/api/rolesmapping/readall"
        );
        assert_eq!(request.url().query(), None);
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_build_get_honors_formatting_only() {
        let options = RequestOptions::new()
            .timeout(Duration::from_secs(5))
            .human();
        let request = build_request(BASE, &ROLE_GET, "readall", options)
            .unwrap()
            .request;

        assert_eq!(request.url().query(), Some("human=true"));
    }

    #[test]
    fn test_build_merges_base_url_query() {
        let options = RequestOptions::new().pretty();
        let request = build_request(
            "http://localhost:9200?pretty=false&tenant=global",
            &ROLE_CREATE,
            "readall",
            options,
        )
        .unwrap()
        .request;

        assert_eq!(request.url().query(), Some("pretty=true&tenant=global"));
    }

    #[test]
    fn test_build_keeps_repeated_base_query_keys() {
        let options = RequestOptions::new().pretty();
        let request = build_request(
            "http://localhost:9200?tag=a&tag=b",
            &ROLE_CREATE,
            "readall",
            options,
        )
        .unwrap()
        .request;

        assert_eq!(request.url().query(), Some("pretty=true&tag=a&tag=b"));
    }

    #[test]
    fn test_build_keeps_base_path_prefix() {
        let request = build_request(
            "https://proxy.example.com/opensearch/",
            &ROLE_CREATE,
            "readall",
            RequestOptions::new(),
        )
        .unwrap()
        .request;

        assert_eq!(
            request.url().path(),
            "/opensearch/_plugins/_security/api/roles/readall"
        );
    }

    #[test]
    fn test_caller_headers_replace_empty_map() {
        let options = RequestOptions::new()
            .header("X-Custom", "1")
            .header("x-custom", "2");
        let request = build_request(BASE, &ROLE_CREATE, "readall", options)
            .unwrap()
            .request;

        let values: Vec<_> = request.headers().get_all("x-custom").iter().collect();
        assert_eq!(values, vec!["1", "2"]);
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_caller_headers_appended_after_content_type() {
        let options = RequestOptions::new()
            .body("{}")
            .header("Content-Type", "text/plain");
        let request = build_request(BASE, &ROLE_CREATE, "readall", options)
            .unwrap()
            .request;

        let values: Vec<_> = request.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec![JSON_CONTENT_TYPE, "text/plain"]);
    }

    #[test]
    fn test_invalid_header_is_construction_error() {
        let options = RequestOptions::new().header("bad header", "value");
        let err = build_request(BASE, &ROLE_CREATE, "readall", options).unwrap_err();

        assert!(matches!(err, ClientError::InvalidHeader { ref name, .. } if name == "bad header"));
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_request("not a url", &ROLE_CREATE, "readall", RequestOptions::new())
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_dot_segments_in_identifier_rejected() {
        for identifier in ["../internalusers/admin", "..", ".", "a/../b", "%2e%2e", ".%2E"] {
            let err = build_request(BASE, &ROLE_DELETE, identifier, RequestOptions::new())
                .unwrap_err();
            assert!(
                matches!(err, ClientError::InvalidUrl(_)),
                "{identifier:?} gave {err:?}"
            );
            assert!(err.is_construction_error());
        }
    }

    #[test]
    fn test_backslash_in_identifier_rejected() {
        let err = build_request(BASE, &ROLE_DELETE, "..\\internalusers", RequestOptions::new())
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_identifier_with_space_and_percent_stays_under_prefix() {
        let request = build_request(BASE, &ROLE_DELETE, "ops team%", RequestOptions::new())
            .unwrap()
            .request;
        assert_eq!(
            request.url().path(),
            "/_plugins/_security/api/roles/ops%20team%"
        );

        let request = build_request(BASE, &ROLE_GET, "a.b/c..d", RequestOptions::new())
            .unwrap()
            .request;
        assert_eq!(request.url().path(), "/_plugins/_security/api/roles/a.b/c..d");
    }

    #[test]
    fn test_deadline_becomes_request_timeout() {
        let options =
            RequestOptions::new().deadline(Instant::now() + Duration::from_secs(60));
        let request = build_request(BASE, &ROLE_MAPPING_DELETE, "readall", options)
            .unwrap()
            .request;

        let timeout = request.timeout().copied().unwrap();
        assert!(timeout <= Duration::from_secs(60));
        assert!(timeout > Duration::from_secs(50));
    }

    #[test]
    fn test_elapsed_deadline_still_bound() {
        let options = RequestOptions::new().deadline(Instant::now());
        let request = build_request(BASE, &ROLE_CREATE, "readall", options)
            .unwrap()
            .request;

        assert_eq!(request.timeout().copied(), Some(ELAPSED_DEADLINE_TIMEOUT));
    }

    #[test]
    fn test_cancellation_travels_with_request() {
        let token = CancellationToken::new();
        let options = RequestOptions::new().cancellation(token.clone());
        let prepared = build_request(BASE, &ROLE_MAPPING_DELETE, "readall", options).unwrap();

        token.cancel();
        assert!(prepared.cancellation.unwrap().is_cancelled());
    }
}
