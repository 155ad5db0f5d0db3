//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the top-level `Config` combining connection and optional auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Invariants:
//! - `timeout` is serialized as whole seconds.
//! - `Config::default()` points at a local development cluster without credentials.

use crate::constants::{DEFAULT_OPENSEARCH_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// How to reach the cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the cluster (e.g., https://localhost:9200)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: default_timeout(),
        }
    }
}

/// Complete client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Credentials, if the cluster requires them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self::anonymous(format!("https://localhost:{}", DEFAULT_OPENSEARCH_PORT))
    }
}

impl Config {
    /// Config with the given base URL and no credentials.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: None,
        }
    }

    /// Config with the given base URL and HTTP basic credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: Some(AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            }),
        }
    }

    /// Config with the given base URL and bearer token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: Some(AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_local_and_anonymous() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "https://localhost:9200");
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let mut config = Config::anonymous("http://localhost:9200".to_string());
        config.connection.timeout = Duration::from_secs(90);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["connection"]["timeout"], 90);
        assert!(json.get("auth").is_none());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"connection":{"base_url":"http://os:9200"}}"#).unwrap();
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert!(!config.connection.skip_verify);
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_with_basic_auth_sets_strategy() {
        let config = Config::with_basic_auth(
            "http://localhost:9200".to_string(),
            "admin".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        assert!(matches!(
            config.auth.map(|a| a.strategy),
            Some(AuthStrategy::Basic { ref username, .. }) if username == "admin"
        ));
    }
}
