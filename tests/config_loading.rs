//! Configuration loading integration tests
//!
//! Tests the HLTB_CONFIG environment variable support and configuration precedence

use hltb_client::config::ConfigLoader;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Environment variable tests must not interleave
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn config_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", contents).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_hltb_config_env_var_loading() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let temp_file = config_file(
        r#"
[client]
cache_minutes = 15

[site]
base_url = "http://127.0.0.1:9999"

[browser]
landing_query = "zelda"
        "#,
    );

    let original_config = std::env::var("HLTB_CONFIG").ok();
    unsafe {
        std::env::set_var("HLTB_CONFIG", temp_file.path());
    }

    let config_path = ConfigLoader::get_config_path();
    assert_eq!(config_path.as_deref(), Some(temp_file.path()));

    let settings = ConfigLoader::new().load(config_path.as_deref()).unwrap();
    assert_eq!(settings.client.cache_minutes, 15);
    assert_eq!(settings.site.base_url, "http://127.0.0.1:9999");
    assert_eq!(settings.browser.landing_query, "zelda");
    assert_eq!(settings.browser.navigation_timeout_secs, 30);

    unsafe {
        match original_config {
            Some(value) => std::env::set_var("HLTB_CONFIG", value),
            None => std::env::remove_var("HLTB_CONFIG"),
        }
    }
}

#[test]
fn test_hltb_config_pointing_nowhere_is_ignored() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let original_config = std::env::var("HLTB_CONFIG").ok();
    unsafe {
        std::env::set_var("HLTB_CONFIG", "/nonexistent/hltb/config.toml");
    }

    let config_path = ConfigLoader::get_config_path();
    assert_ne!(
        config_path.as_deref(),
        Some(std::path::Path::new("/nonexistent/hltb/config.toml"))
    );

    unsafe {
        match original_config {
            Some(value) => std::env::set_var("HLTB_CONFIG", value),
            None => std::env::remove_var("HLTB_CONFIG"),
        }
    }
}

#[test]
fn test_env_overrides_file() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let temp_file = config_file(
        r#"
[client]
cache_minutes = 15
enabled = true
        "#,
    );

    unsafe {
        std::env::set_var("HLTB_CACHE_MINUTES", "90");
        std::env::set_var("HLTB_ENABLED", "false");
    }

    let settings = ConfigLoader::new().load(Some(temp_file.path())).unwrap();
    assert_eq!(settings.client.cache_minutes, 90);
    assert!(!settings.client.enabled);
    assert_eq!(settings.cache_ttl().unwrap(), chrono::Duration::minutes(90));

    unsafe {
        std::env::remove_var("HLTB_CACHE_MINUTES");
        std::env::remove_var("HLTB_ENABLED");
    }
}

#[test]
fn test_invalid_values_fail_validation() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let temp_file = config_file(
        r#"
[client]
cache_minutes = 0
        "#,
    );

    let err = ConfigLoader::new().load(Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, hltb_client::Error::Config { .. }));
}

#[test]
fn test_oversized_cache_lifetime_is_rejected() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let temp_file = config_file(
        r#"
[client]
cache_minutes = 1000000000000
        "#,
    );

    let err = ConfigLoader::new().load(Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, hltb_client::Error::Config { .. }));
}

#[test]
fn test_malformed_toml_is_rejected() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let temp_file = config_file("[client\ncache_minutes = ");

    assert!(ConfigLoader::new().load(Some(temp_file.path())).is_err());
}
