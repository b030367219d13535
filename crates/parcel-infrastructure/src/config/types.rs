//! Configuration types

use std::path::PathBuf;

use parcel_providers::constants::{FEDEX_KEY, UPS_KEY, USPS_KEY};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Carrier configuration
    pub shipping: ShippingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Carrier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingConfig {
    /// Enabled carrier keys, in lookup order
    pub providers: Vec<String>,
    /// Carrier used when an order does not name one
    pub default_shipper: String,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            providers: [UPS_KEY, FEDEX_KEY, USPS_KEY]
                .into_iter()
                .map(str::to_string)
                .collect(),
            default_shipper: UPS_KEY.to_string(),
        }
    }
}
