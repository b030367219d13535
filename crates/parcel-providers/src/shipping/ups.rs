//! UPS carrier

use parcel_di::{Component, Constructor};
use parcel_domain::{Order, Result, Shipment, ShippingService};
use tracing::info;

use crate::constants::{UPS_KEY, UPS_NAME};

/// United Parcel Service
///
/// # Example
///
/// ```rust
/// use parcel_domain::ShippingService;
/// use parcel_providers::UpsShippingService;
///
/// let carrier = UpsShippingService::new();
/// assert_eq!(carrier.key(), "UPS");
/// ```
#[derive(Debug, Default)]
pub struct UpsShippingService;

impl UpsShippingService {
    /// Create a new UPS carrier
    pub fn new() -> Self {
        Self
    }
}

impl ShippingService for UpsShippingService {
    fn key(&self) -> &str {
        UPS_KEY
    }

    fn name(&self) -> &str {
        UPS_NAME
    }

    fn ship_order(&self, order: &Order) -> Result<Shipment> {
        info!(order = %order.order_number, carrier = UPS_KEY, "Shipped via {}", UPS_NAME);
        Ok(Shipment::new(order, UPS_KEY, UPS_NAME))
    }
}

impl Component for UpsShippingService {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::new("UpsShippingService::new", |_| Ok(Self::new()))]
    }
}

parcel_di::implements!(UpsShippingService => dyn ShippingService);
