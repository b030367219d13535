//! FedEx carrier

use parcel_di::{Component, Constructor};
use parcel_domain::{Order, Result, Shipment, ShippingService};
use tracing::info;

use crate::constants::{FEDEX_KEY, FEDEX_NAME};

/// Federal Express
#[derive(Debug, Default)]
pub struct FedExShippingService;

impl FedExShippingService {
    /// Create a new FedEx carrier
    pub fn new() -> Self {
        Self
    }
}

impl ShippingService for FedExShippingService {
    fn key(&self) -> &str {
        FEDEX_KEY
    }

    fn name(&self) -> &str {
        FEDEX_NAME
    }

    fn ship_order(&self, order: &Order) -> Result<Shipment> {
        info!(order = %order.order_number, carrier = FEDEX_KEY, "Shipped via {}", FEDEX_NAME);
        Ok(Shipment::new(order, FEDEX_KEY, FEDEX_NAME))
    }
}

impl Component for FedExShippingService {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::new("FedExShippingService::new", |_| Ok(Self::new()))]
    }
}

parcel_di::implements!(FedExShippingService => dyn ShippingService);
