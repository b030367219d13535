//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values through Figment.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use parcel_domain::{Error, Result};
use parcel_providers::list_shipping_providers;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file, if one exists
    /// 3. Environment variables such as `PARCEL_SHIPPING__DEFAULT_SHIPPER`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            }
            Some(config_path) => {
                warn!("Configuration file not found: {}", config_path.display());
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    info!("Configuration loaded from {}", default_path.display());
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_shipping_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_shipping_config(config: &AppConfig) -> Result<()> {
    let shipping = &config.shipping;
    if shipping.providers.is_empty() {
        return Err(Error::configuration(
            "At least one shipping provider must be enabled",
        ));
    }

    let known: Vec<&str> = list_shipping_providers()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    let mut seen = HashSet::new();
    for key in &shipping.providers {
        if !known.contains(&key.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown shipping provider '{}'. Known providers: {}",
                key,
                known.join(", ")
            )));
        }
        if !seen.insert(key.as_str()) {
            return Err(Error::configuration(format!(
                "Shipping provider '{}' is listed more than once",
                key
            )));
        }
    }

    if !seen.contains(shipping.default_shipper.as_str()) {
        return Err(Error::configuration(format!(
            "Default shipper '{}' is not an enabled provider",
            shipping.default_shipper
        )));
    }
    Ok(())
}
