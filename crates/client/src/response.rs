//! Normalized response returned by every security API call.
//!
//! The status line and headers are copied out of the transport response; the
//! body stays unread and is handed to the caller inside [`ResponseBody`].
//! Dropping the body releases the underlying connection.

use std::fmt;

use bytes::Bytes;
use futures::Stream;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Response from the security API.
///
/// Remote failures (4xx/5xx) are ordinary responses; use
/// [`Response::is_error`] to tell them apart.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl Response {
    /// Numeric HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns true when the status code is greater than 299.
    pub fn is_error(&self) -> bool {
        self.status.as_u16() > 299
    }

    /// Borrow the unread body.
    pub fn body_mut(&mut self) -> &mut ResponseBody {
        &mut self.body
    }

    /// Take ownership of the unread body.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// Split into status, headers and body.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, ResponseBody) {
        (self.status, self.headers, self.body)
    }
}

impl From<reqwest::Response> for Response {
    fn from(response: reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            body: ResponseBody { inner: response },
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.canonical_reason() {
            Some(reason) => write!(f, "[{} {}]", self.status.as_u16(), reason),
            None => write!(f, "[{}]", self.status.as_u16()),
        }
    }
}

/// The live, caller-owned body of a [`Response`].
#[derive(Debug)]
pub struct ResponseBody {
    inner: reqwest::Response,
}

impl ResponseBody {
    /// Read the whole body.
    pub async fn bytes(self) -> Result<Bytes> {
        Ok(self.inner.bytes().await?)
    }

    /// Read the whole body as UTF-8 text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Read the whole body and deserialize it from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] if the body is not valid JSON
    /// for `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Read the next chunk, or `None` once the body is exhausted.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(self.inner.chunk().await?)
    }

    /// Convert into a stream of chunks.
    pub fn bytes_stream(self) -> impl Stream<Item = reqwest::Result<Bytes>> {
        self.inner.bytes_stream()
    }
}
