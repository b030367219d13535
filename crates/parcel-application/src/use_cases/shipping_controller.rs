//! Controller-based dispatch
//!
//! The processor hands orders to a [`ShippingControllerInterface`], which
//! owns carrier selection. The controller can also be swapped on an
//! existing processor with [`ControlledOrderProcessor::with_shipping_controller`].

use std::sync::Arc;

use parcel_di::{Component, Constructor};
use parcel_domain::{
    Order, OrderProcessorInterface, Result, Shipment, ShippingControllerInterface,
    ShippingServices,
};
use tracing::debug;

/// Selects a carrier from the shared collection and ships through it
pub struct ShippingController {
    shipping_services: Arc<ShippingServices>,
}

impl ShippingController {
    /// Create a controller over `shipping_services`
    pub fn new(shipping_services: Arc<ShippingServices>) -> Self {
        Self { shipping_services }
    }
}

impl ShippingControllerInterface for ShippingController {
    fn ship_order(&self, order: &Order) -> Result<Shipment> {
        let carrier = self.shipping_services.find(&order.shipping_method_key)?;
        debug!(carrier = carrier.key(), order = %order.order_number, "Routing order");
        carrier.ship_order(order)
    }
}

impl Component for ShippingController {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new("ShippingController::new", |args| {
                Ok(ShippingController::new(args.take()?))
            })
            .param::<ShippingServices>(),
        ]
    }
}

parcel_di::implements!(ShippingController => dyn ShippingControllerInterface);

/// Order processor that delegates to a shipping controller
pub struct ControlledOrderProcessor {
    shipping_controller: Arc<dyn ShippingControllerInterface>,
}

impl ControlledOrderProcessor {
    /// Create a processor that ships through `shipping_controller`
    pub fn new(shipping_controller: Arc<dyn ShippingControllerInterface>) -> Self {
        Self {
            shipping_controller,
        }
    }

    /// Replace the controller, keeping the processor
    #[must_use]
    pub fn with_shipping_controller(
        mut self,
        shipping_controller: Arc<dyn ShippingControllerInterface>,
    ) -> Self {
        self.shipping_controller = shipping_controller;
        self
    }

    /// Controller currently in use
    pub fn shipping_controller(&self) -> &Arc<dyn ShippingControllerInterface> {
        &self.shipping_controller
    }
}

impl OrderProcessorInterface for ControlledOrderProcessor {
    fn process_order(&self, order: &Order) -> Result<Shipment> {
        self.shipping_controller.ship_order(order)
    }
}

impl Component for ControlledOrderProcessor {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new("ControlledOrderProcessor::new", |args| {
                Ok(ControlledOrderProcessor::new(args.take()?))
            })
            .param::<dyn ShippingControllerInterface>(),
        ]
    }
}

parcel_di::implements!(ControlledOrderProcessor => dyn OrderProcessorInterface);
