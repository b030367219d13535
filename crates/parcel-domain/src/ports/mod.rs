//! Port traits
//!
//! Interfaces the application layer depends on. Each trait object is an
//! abstract resolver key: it resolves only after something is registered
//! for it.

pub mod processing;
pub mod shipping;

pub use processing::{OrderProcessorInterface, ShippingControllerInterface};
pub use shipping::{ShippingService, ShippingServices};
