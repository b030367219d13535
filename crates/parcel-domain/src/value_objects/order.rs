//! Customer order

use serde::{Deserialize, Serialize};

/// An order waiting to be shipped
///
/// `shipping_method_key` names the carrier that must handle the order and is
/// matched against [`ShippingService::key`](crate::ports::ShippingService::key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: u64,
    /// Human-facing order number
    pub order_number: String,
    /// Key of the carrier selected for this order
    pub shipping_method_key: String,
}

impl Order {
    /// Create an order routed to the carrier `shipping_method_key`
    pub fn new<N, K>(id: u64, order_number: N, shipping_method_key: K) -> Self
    where
        N: Into<String>,
        K: Into<String>,
    {
        Self {
            id,
            order_number: order_number.into(),
            shipping_method_key: shipping_method_key.into(),
        }
    }
}
