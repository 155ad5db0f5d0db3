//! Property-based tests for configuration serialization and loading.
//!
//! Test coverage:
//! - ConnectionConfig: serialization keeps every field
//! - AuthConfig: strategy and secret survive a JSON round trip
//! - ConfigLoader: trailing slashes never survive normalization

use proptest::prelude::*;
use secrecy::{ExposeSecret, SecretString};

use opensearch_security_config::{AuthConfig, AuthStrategy, ConfigLoader, ConnectionConfig};
use std::time::Duration;

/// Strategy for generating valid base URLs.
fn base_url_strategy() -> impl Strategy<Value = String> {
    let localhost_strategy =
        (9200u16..=9300u16).prop_map(|port| format!("https://localhost:{}", port));

    let host_strategy = prop_oneof![
        Just("opensearch"),
        Just("search-node-1"),
        Just("cluster-manager"),
    ];
    let domain_strategy = prop_oneof![
        Just("example.com"),
        Just("internal.local"),
        Just("company.net"),
    ];
    let port_strategy = 9200u16..=9210u16;

    let production_strategy = (host_strategy, domain_strategy, port_strategy)
        .prop_map(|(host, domain, port)| format!("https://{}.{}:{}", host, domain, port));

    prop_oneof![localhost_strategy, production_strategy]
}

fn secret_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-]{8,48}"
}

proptest! {
    #[test]
    fn prop_connection_config_roundtrip(
        base_url in base_url_strategy(),
        skip_verify in any::<bool>(),
        timeout_secs in 1u64..3600,
    ) {
        let original = ConnectionConfig {
            base_url: base_url.clone(),
            skip_verify,
            timeout: Duration::from_secs(timeout_secs),
        };

        let json = serde_json::to_string(&original).unwrap();
        let back: ConnectionConfig = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.base_url, base_url);
        prop_assert_eq!(back.skip_verify, skip_verify);
        prop_assert_eq!(back.timeout, Duration::from_secs(timeout_secs));
    }

    #[test]
    fn prop_basic_auth_roundtrip(username in "[a-z][a-z0-9_]{2,16}", password in secret_strategy()) {
        let original = AuthConfig {
            strategy: AuthStrategy::Basic {
                username: username.clone(),
                password: SecretString::new(password.clone().into()),
            },
        };

        let json = serde_json::to_string(&original).unwrap();
        let back: AuthConfig = serde_json::from_str(&json).unwrap();

        match back.strategy {
            AuthStrategy::Basic { username: u, password: p } => {
                prop_assert_eq!(u, username);
                prop_assert_eq!(p.expose_secret(), password.as_str());
            }
            AuthStrategy::ApiToken { .. } => prop_assert!(false, "strategy changed"),
        }
    }

    #[test]
    fn prop_api_token_roundtrip(token in secret_strategy()) {
        let original = AuthConfig {
            strategy: AuthStrategy::ApiToken { token: SecretString::new(token.clone().into()) },
        };

        let json = serde_json::to_string(&original).unwrap();
        let back: AuthConfig = serde_json::from_str(&json).unwrap();

        match back.strategy {
            AuthStrategy::ApiToken { token: t } => prop_assert_eq!(t.expose_secret(), token.as_str()),
            AuthStrategy::Basic { .. } => prop_assert!(false, "strategy changed"),
        }
    }

    #[test]
    fn prop_loader_strips_trailing_slashes(base_url in base_url_strategy(), slashes in 0usize..4) {
        let raw = format!("{}{}", base_url, "/".repeat(slashes));
        let config = ConfigLoader::new().with_base_url(raw).build().unwrap();
        prop_assert_eq!(config.connection.base_url, base_url);
    }
}
