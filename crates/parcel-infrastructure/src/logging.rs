//! Structured logging with tracing
//!
//! Installs the global subscriber: an `EnvFilter` (overridable through
//! `PARCEL_LOG`), plain or JSON output on stdout, and an optional daily
//! rolling log file.

use std::ffi::OsStr;
use std::path::Path;

use parcel_domain::{Error, Result};
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM)),
        )
    });

    // Layer types differ between formats, hence the separate branches
    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        match file_appender {
            Some(appender) => registry
                .with(stdout)
                .with(fmt::layer().json().with_writer(appender).with_ansi(false))
                .try_init(),
            None => registry.with(stdout).try_init(),
        }
    } else {
        let stdout = fmt::layer().with_target(true);
        match file_appender {
            Some(appender) => registry
                .with(stdout)
                .with(fmt::layer().with_writer(appender).with_ansi(false))
                .try_init(),
            None => registry.with(stdout).try_init(),
        }
    };
    installed.map_err(|e| Error::configuration_with_source("Failed to install logger", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}
