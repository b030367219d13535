//! Value objects
//!
//! Immutable records exchanged between the application layer and carriers.

pub mod order;
pub mod shipment;

pub use order::Order;
pub use shipment::Shipment;
