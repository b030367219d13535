//! Infrastructure layer for Parcel
//!
//! Cross-cutting concerns and the composition root:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`error_ext`]: context helpers for foreign errors
//! - [`di`]: builds the [`parcel_di::Resolver`] from configuration

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, ShippingConfig};
pub use di::bootstrap::{build_resolver, init_app, AppContext};
