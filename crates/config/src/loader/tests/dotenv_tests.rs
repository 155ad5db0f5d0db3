//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

const MARKER: &str = "OPENSEARCH_DOTENV_TEST_MARKER";

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_valid_dotenv_sets_variables() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), format!("{}=loaded\n", MARKER)).unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>), (MARKER, None)], || {
        ConfigLoader::new().load_dotenv().unwrap();
        assert_eq!(std::env::var(MARKER).as_deref(), Ok("loaded"));
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        match ConfigLoader::new().load_dotenv() {
            Err(ConfigError::DotenvParse { .. }) => {}
            Err(other) => panic!("Expected DotenvParse, got {}", other),
            Ok(_) => panic!("Expected DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let secret_value = "supersecret_token_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("{}_SECRET={}\nINVALID_LINE_WITHOUT_EQUALS", MARKER, secret_value),
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("OPENSEARCH_DOTENV_TEST_MARKER_SECRET", None),
        ],
        || {
            let err = ConfigLoader::new()
                .load_dotenv()
                .err()
                .expect("invalid .env should fail");
            let rendered = format!("{} {:?}", err, err);
            assert!(!rendered.contains(secret_value), "leaked: {}", rendered);
            assert!(!rendered.contains("INVALID_LINE_WITHOUT_EQUALS"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            assert!(
                ConfigLoader::new().load_dotenv().is_ok(),
                "DOTENV_DISABLED={} should skip loading",
                value
            );
        });
    }
}
