//! Configuration loader tests
//!
//! File-based tests point the loader at a temporary TOML file. The
//! environment override test mutates process environment and is ignored by
//! default:
//!
//! ```bash
//! cargo test -p notegate-infrastructure --test unit config_tests -- --test-threads=1 --ignored
//! ```

use notegate_domain::Error;
use notegate_infrastructure::config::{ConfigBuilder, ConfigLoader, SigningAlgorithm};
use notegate_infrastructure::constants::{
    BREACH_DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, TOKEN_DEFAULT_TTL_MINUTES,
};
use std::env;
use std::fs;
use tempfile::TempDir;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("notegate.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn loader_for(path: &std::path::Path) -> ConfigLoader {
    // Private prefix keeps stray NOTEGATE__ variables out of these tests
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix("NOTEGATE_UNIT_TEST")
}

#[test]
fn test_defaults_apply_under_minimal_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &format!("[auth.token]\nsecret = \"{SECRET}\"\n"));

    let config = loader_for(&path).load().unwrap();

    assert_eq!(config.auth.token.secret, SECRET);
    assert_eq!(config.auth.token.algorithm, SigningAlgorithm::HS256);
    assert_eq!(config.auth.token.ttl_minutes, TOKEN_DEFAULT_TTL_MINUTES);
    assert_eq!(config.auth.password.min_length, 12);
    assert_eq!(config.auth.breach.threshold, 5);
    assert_eq!(config.auth.breach.timeout_secs, 5);
    assert_eq!(config.auth.breach.base_url, BREACH_DEFAULT_BASE_URL);
    assert!(!config.auth.registration.activate_on_register);
    assert!(config.auth.admin.is_none());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        &format!(
            r#"
[auth.token]
secret = "{SECRET}"
algorithm = "HS512"
ttl_minutes = 60

[auth.password]
min_length = 16

[auth.breach]
base_url = "http://localhost:8080/range/"
threshold = 0
timeout_secs = 2

[auth.registration]
activate_on_register = true

[auth.admin]
username = "admin"
email = "admin@example.com"
password = "an operator supplied password"

[logging]
level = "debug"
json_format = true
"#
        ),
    );

    let config = loader_for(&path).load().unwrap();

    assert_eq!(config.auth.token.algorithm, SigningAlgorithm::HS512);
    assert_eq!(config.auth.token.ttl_minutes, 60);
    assert_eq!(config.auth.password.min_length, 16);
    assert_eq!(config.auth.breach.base_url, "http://localhost:8080/range/");
    assert_eq!(config.auth.breach.threshold, 0);
    assert!(config.auth.registration.activate_on_register);
    assert_eq!(config.auth.admin.unwrap().email, "admin@example.com");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_short_secret_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[auth.token]\nsecret = \"too-short\"\n");

    assert!(matches!(
        loader_for(&path).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_missing_explicit_file_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = loader_for(&dir.path().join("typo.toml"));

    match loader.load() {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("typo.toml"), "unexpected message: {message}");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_source_path_prefers_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &format!("[auth.token]\nsecret = \"{SECRET}\"\n"));

    assert_eq!(loader_for(&path).source_path(), Some(path));
}

#[test]
fn test_missing_secret_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"info\"\n");

    assert!(matches!(
        loader_for(&path).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let secret = format!("secret = \"{SECRET}\"");
    let cases = [
        format!("[auth.token]\n{secret}\nttl_minutes = 0\n"),
        format!("[auth.token]\n{secret}\nalgorithm = \"RS256\"\n"),
        format!("[auth.token]\n{secret}\n[auth.password]\nmin_length = 0\n"),
        format!("[auth.token]\n{secret}\n[auth.breach]\ntimeout_secs = 0\n"),
        format!("[auth.token]\n{secret}\n[auth.breach]\nbase_url = \"not a url\"\n"),
        format!(
            "[auth.token]\n{secret}\n[auth.breach]\nbase_url = \"https://api.pwnedpasswords.com/range\"\n"
        ),
        format!("[auth.token]\n{secret}\n[auth.hashing]\nparallelism = 0\n"),
        format!("[auth.token]\n{secret}\n[logging]\nlevel = \"verbose\"\n"),
    ];

    for case in &cases {
        let path = write_config(&dir, case);
        assert!(
            matches!(loader_for(&path).load(), Err(Error::Configuration { .. })),
            "expected configuration error for {case:?}"
        );
    }
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let original = ConfigBuilder::new().with_token_secret(SECRET).build();
    let loader = loader_for(&path);
    loader.save_to_file(&original, &path).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded.auth.token.secret, SECRET);
    assert_eq!(loaded.auth.token.ttl_minutes, original.auth.token.ttl_minutes);
}

/// Run with: `cargo test -p notegate-infrastructure --test unit config_tests -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &format!("[auth.token]\nsecret = \"{SECRET}\"\n"));

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("NOTEGATE__AUTH__TOKEN__TTL_MINUTES", "90");
    }

    let config = ConfigLoader::new().with_config_path(&path).load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("NOTEGATE__AUTH__TOKEN__TTL_MINUTES");
    }

    assert_eq!(config.unwrap().auth.token.ttl_minutes, 90);
}
