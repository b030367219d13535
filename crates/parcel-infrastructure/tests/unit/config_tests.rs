//! Configuration loading tests
//!
//! Every test points the loader at an explicit file and a prefix of its own,
//! so no test observes a `parcel.toml` or `PARCEL_*` variable from the host.

use std::fs;
use std::path::Path;

use parcel_domain::Error;
use parcel_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::TempDir;

fn loader(dir: &TempDir, contents: &str, prefix: &str) -> ConfigLoader {
    let path = dir.path().join("parcel.toml");
    fs::write(&path, contents).unwrap();
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(prefix)
}

fn assert_configuration_error(result: parcel_domain::Result<AppConfig>, needle: &str) {
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {}", message);
        }
        other => panic!("Expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
    assert_eq!(config.shipping.providers, vec!["UPS", "FedEx", "USPS"]);
    assert_eq!(config.shipping.default_shipper, "UPS");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("PARCEL_TEST_MISSING")
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = loader(
        &dir,
        r#"
[logging]
level = "debug"

[shipping]
providers = ["FedEx", "UPS"]
default_shipper = "FedEx"
"#,
        "PARCEL_TEST_FILE",
    )
    .load()
    .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
    assert_eq!(config.shipping.providers, vec!["FedEx", "UPS"]);
    assert_eq!(config.shipping.default_shipper, "FedEx");
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("PARCEL_TEST_ENV_SHIPPING__DEFAULT_SHIPPER", "USPS");
    }
    let result = loader(&dir, "[shipping]\ndefault_shipper = \"UPS\"\n", "PARCEL_TEST_ENV").load();
    // SAFETY: see above
    unsafe {
        std::env::remove_var("PARCEL_TEST_ENV_SHIPPING__DEFAULT_SHIPPER");
    }

    assert_eq!(result.unwrap().shipping.default_shipper, "USPS");
}

#[test]
fn test_empty_provider_list_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader(&dir, "[shipping]\nproviders = []\n", "PARCEL_TEST_EMPTY").load();
    assert_configuration_error(result, "At least one shipping provider");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader(
        &dir,
        "[shipping]\nproviders = [\"UPS\", \"DHL\"]\n",
        "PARCEL_TEST_UNKNOWN",
    )
    .load();
    assert_configuration_error(result, "Unknown shipping provider 'DHL'");
}

#[test]
fn test_duplicate_provider_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader(
        &dir,
        "[shipping]\nproviders = [\"UPS\", \"UPS\"]\n",
        "PARCEL_TEST_DUPLICATE",
    )
    .load();
    assert_configuration_error(result, "more than once");
}

#[test]
fn test_disabled_default_shipper_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader(
        &dir,
        "[shipping]\nproviders = [\"FedEx\"]\ndefault_shipper = \"UPS\"\n",
        "PARCEL_TEST_DEFAULT",
    )
    .load();
    assert_configuration_error(result, "Default shipper 'UPS'");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = loader(&dir, "[logging]\nlevel = \"loud\"\n", "PARCEL_TEST_LEVEL").load();
    assert_configuration_error(result, "Invalid log level");
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let result = loader(&dir, "[shipping\nproviders = ", "PARCEL_TEST_MALFORMED").load();
    assert_configuration_error(result, "Failed to extract configuration");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.shipping.providers = vec!["USPS".to_string()];
    config.shipping.default_shipper = "USPS".to_string();
    config.logging.json_format = true;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("PARCEL_TEST_SAVE");
    loader.save_to_file(&config, &path).unwrap();

    assert!(Path::new(&path).exists());
    assert_eq!(loader.config_path(), Some(path.as_path()));
    assert_eq!(loader.load().unwrap(), config);
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("parcel.toml");
    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);
    assert!(matches!(result, Err(Error::Io { .. })));
}
