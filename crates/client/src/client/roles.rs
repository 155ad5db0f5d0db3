//! Role endpoint constructors for [`SecurityClient`].
//!
//! # What this module handles:
//! - Creating or replacing roles
//! - Deleting roles
//! - Fetching a role
//!
//! # What this module does NOT handle:
//! - Request construction (in [`crate::endpoints::request`])
//! - Role document schema; bodies are passed through opaquely

use crate::client::{RequestBuilder, SecurityClient};
use crate::endpoints::{ROLE_CREATE, ROLE_DELETE, ROLE_GET};
use crate::transport::Transport;

impl<T: Transport> SecurityClient<T> {
    /// Create or replace a role (`PUT /_plugins/_security/api/roles/{role}`).
    pub fn role_create(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_CREATE, role)
    }

    /// Delete a role (`DELETE /_plugins/_security/api/roles/{role}`).
    ///
    /// Only the cancellation and deadline options affect this call.
    pub fn role_delete(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_DELETE, role)
    }

    /// Fetch a role (`GET /_plugins/_security/api/roles/{role}`).
    pub fn role_get(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_GET, role)
    }
}
