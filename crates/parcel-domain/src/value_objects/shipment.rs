//! Record of a dispatched order

use serde::{Deserialize, Serialize};

use crate::value_objects::Order;

/// Confirmation returned by a carrier after shipping an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Identifier of the shipped order
    pub order_id: u64,
    /// Order number of the shipped order
    pub order_number: String,
    /// Key of the carrier that shipped it
    pub carrier_key: String,
    /// Display name of the carrier
    pub carrier_name: String,
}

impl Shipment {
    /// Shipment of `order` by the carrier identified by `carrier_key`
    pub fn new<K, N>(order: &Order, carrier_key: K, carrier_name: N) -> Self
    where
        K: Into<String>,
        N: Into<String>,
    {
        Self {
            order_id: order.id,
            order_number: order.order_number.clone(),
            carrier_key: carrier_key.into(),
            carrier_name: carrier_name.into(),
        }
    }
}

impl std::fmt::Display for Shipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} (#{}) shipped via {}",
            self.order_number, self.order_id, self.carrier_name
        )
    }
}
