//! Security plugin REST endpoint descriptors.
//!
//! Each operation is one row in the table below: HTTP method, path prefix,
//! the query parameters it serializes and whether it forwards a body and
//! caller headers. Request construction and dispatch are generic over
//! [`Endpoint`] (see [`request`]).
//!
//! # Invariants
//! - Every prefix ends in `/`; the resource identifier is appended verbatim.
//! - Delete operations forward neither body, headers nor query parameters;
//!   only the cancellation and deadline options affect them.

pub mod params;
pub mod request;

pub use params::QueryParams;
pub use request::{PreparedRequest, build_request, dispatch};

use reqwest::Method;

/// HTTP methods used by the security API family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    /// Returns the method as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Static description of one security API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Stable operation name used in logs and metrics labels.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path prefix; the resource identifier follows it directly.
    pub prefix: &'static str,
    /// Query parameters this operation serializes.
    pub params: QueryParams,
    /// Whether a caller-supplied body is sent.
    pub sends_body: bool,
    /// Whether caller-supplied headers are sent.
    pub forwards_headers: bool,
}

impl Endpoint {
    /// Build the request path for a resource identifier.
    ///
    /// The identifier is appended exactly once with no trimming or escaping;
    /// an empty identifier yields the bare prefix.
    pub fn path(&self, identifier: &str) -> String {
        let mut path = String::with_capacity(self.prefix.len() + identifier.len());
        path.push_str(self.prefix);
        path.push_str(identifier);
        path
    }
}

macro_rules! endpoints {
    ($(
        $(#[$meta:meta])*
        $ident:ident = $name:literal {
            method: $method:ident,
            prefix: $prefix:expr,
            params: $params:expr,
            body: $body:literal,
            headers: $headers:literal $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            pub const $ident: Endpoint = Endpoint {
                name: $name,
                method: HttpMethod::$method,
                prefix: $prefix,
                params: $params,
                sends_body: $body,
                forwards_headers: $headers,
            };
        )*

        /// Every operation in the table, in declaration order.
        pub const ALL: &[Endpoint] = &[$($ident),*];
    };
}

const ROLES_PREFIX: &str = "/_plugins/_security/api/roles/";
const ROLES_MAPPING_PREFIX: &str = "/_plugins/_security/api/rolesmapping/";

endpoints! {
    /// Create or replace a role.
    ROLE_CREATE = "security.role.create" {
        method: Put,
        prefix: ROLES_PREFIX,
        params: QueryParams::all(),
        body: true,
        headers: true,
    }

    /// Delete a role.
    ROLE_DELETE = "security.role.delete" {
        method: Delete,
        prefix: ROLES_PREFIX,
        params: QueryParams::empty(),
        body: false,
        headers: false,
    }

    /// Fetch a role.
    ROLE_GET = "security.role.get" {
        method: Get,
        prefix: ROLES_PREFIX,
        params: QueryParams::FORMATTING,
        body: false,
        headers: true,
    }

    /// Create or replace the mapping of users, backend roles and hosts to a role.
    ROLE_MAPPING_CREATE = "security.role_mapping.create" {
        method: Put,
        prefix: ROLES_MAPPING_PREFIX,
        params: QueryParams::all(),
        body: true,
        headers: true,
    }

    /// Delete a role mapping.
    ROLE_MAPPING_DELETE = "security.role_mapping.delete" {
        method: Delete,
        prefix: ROLES_MAPPING_PREFIX,
        params: QueryParams::empty(),
        body: false,
        headers: false,
    }

    /// Fetch a role mapping.
    ROLE_MAPPING_GET = "security.role_mapping.get" {
        method: Get,
        prefix: ROLES_MAPPING_PREFIX,
        params: QueryParams::FORMATTING,
        body: false,
        headers: true,
    }
}
