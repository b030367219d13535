//! USPS carrier

use parcel_di::{Component, Constructor};
use parcel_domain::{Order, Result, Shipment, ShippingService};
use tracing::info;

use crate::constants::{USPS_KEY, USPS_NAME};

/// United States Postal Service
#[derive(Debug, Default)]
pub struct UspsShippingService;

impl UspsShippingService {
    /// Create a new USPS carrier
    pub fn new() -> Self {
        Self
    }
}

impl ShippingService for UspsShippingService {
    fn key(&self) -> &str {
        USPS_KEY
    }

    fn name(&self) -> &str {
        USPS_NAME
    }

    fn ship_order(&self, order: &Order) -> Result<Shipment> {
        info!(order = %order.order_number, carrier = USPS_KEY, "Shipped via {}", USPS_NAME);
        Ok(Shipment::new(order, USPS_KEY, USPS_NAME))
    }
}

impl Component for UspsShippingService {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::new("UspsShippingService::new", |_| Ok(Self::new()))]
    }
}

parcel_di::implements!(UspsShippingService => dyn ShippingService);
