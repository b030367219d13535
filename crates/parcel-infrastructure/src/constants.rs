//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "parcel.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "parcel";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PARCEL";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "PARCEL_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "parcel";
