//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `PARCEL_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ShippingConfig};
