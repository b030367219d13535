//! Order processor
//!
//! Dispatches each order to the carrier whose key matches the order's
//! shipping method.

use std::sync::Arc;

use parcel_di::{Component, Constructor};
use parcel_domain::{Order, OrderProcessorInterface, Result, Shipment, ShippingServices};
use tracing::debug;

/// Order processor backed by the shared carrier collection
pub struct OrderProcessor {
    shipping_services: Arc<ShippingServices>,
}

impl OrderProcessor {
    /// Create a processor over `shipping_services`
    pub fn new(shipping_services: Arc<ShippingServices>) -> Self {
        Self { shipping_services }
    }

    /// Carriers this processor can dispatch to
    pub fn shipping_services(&self) -> &Arc<ShippingServices> {
        &self.shipping_services
    }
}

impl OrderProcessorInterface for OrderProcessor {
    fn process_order(&self, order: &Order) -> Result<Shipment> {
        debug!(
            order = %order.order_number,
            shipping_method = %order.shipping_method_key,
            "Processing order"
        );
        let carrier = self.shipping_services.find(&order.shipping_method_key)?;
        carrier.ship_order(order)
    }
}

impl Component for OrderProcessor {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new("OrderProcessor::new", |args| {
                Ok(OrderProcessor::new(args.take()?))
            })
            .param::<ShippingServices>(),
        ]
    }
}

parcel_di::implements!(OrderProcessor => dyn OrderProcessorInterface);
