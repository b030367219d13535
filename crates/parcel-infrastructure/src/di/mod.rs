//! Dependency injection wiring
//!
//! The composition root lives in [`bootstrap`]: it is the only place that
//! knows which concrete use cases and carriers back the domain ports.

pub mod bootstrap;

pub use bootstrap::{build_resolver, init_app, AppContext};
