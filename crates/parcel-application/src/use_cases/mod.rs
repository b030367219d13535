//! Order dispatch use cases

pub mod order_processor;
pub mod shipping_controller;

pub use order_processor::OrderProcessor;
pub use shipping_controller::{ControlledOrderProcessor, ShippingController};
