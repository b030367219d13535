//! Order processing ports

use crate::error::Result;
use crate::value_objects::{Order, Shipment};

/// Entry point of the order use case
pub trait OrderProcessorInterface {
    /// Dispatch `order` to the carrier named by its shipping key
    fn process_order(&self, order: &Order) -> Result<Shipment>;
}

/// Routes orders to carriers on behalf of a processor
pub trait ShippingControllerInterface {
    /// Ship `order` with the carrier named by its shipping key
    fn ship_order(&self, order: &Order) -> Result<Shipment>;
}

parcel_di::interface!(dyn OrderProcessorInterface, dyn ShippingControllerInterface);
