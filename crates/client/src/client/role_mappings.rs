//! Role-mapping endpoint constructors for [`SecurityClient`].

use crate::client::{RequestBuilder, SecurityClient};
use crate::endpoints::{ROLE_MAPPING_CREATE, ROLE_MAPPING_DELETE, ROLE_MAPPING_GET};
use crate::transport::Transport;

impl<T: Transport> SecurityClient<T> {
    /// Create or replace a role mapping
    /// (`PUT /_plugins/_security/api/rolesmapping/{role}`).
    pub fn role_mapping_create(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_MAPPING_CREATE, role)
    }

    /// Delete a role mapping (`DELETE /_plugins/_security/api/rolesmapping/{role}`).
    ///
    /// Only the cancellation and deadline options affect this call.
    pub fn role_mapping_delete(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_MAPPING_DELETE, role)
    }

    /// Fetch a role mapping (`GET /_plugins/_security/api/rolesmapping/{role}`).
    pub fn role_mapping_get(&self, role: impl Into<String>) -> RequestBuilder<'_, T> {
        self.request(ROLE_MAPPING_GET, role)
    }
}
