//! Shared fixtures for use case tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parcel_domain::{Order, Result, Shipment, ShippingService, ShippingServices};

/// Carrier that counts how often it ships
pub struct RecordingCarrier {
    key: &'static str,
    shipped: AtomicUsize,
}

impl RecordingCarrier {
    pub fn new(key: &'static str) -> Arc<Self> {
        Arc::new(Self {
            key,
            shipped: AtomicUsize::new(0),
        })
    }

    pub fn shipped(&self) -> usize {
        self.shipped.load(Ordering::SeqCst)
    }
}

impl ShippingService for RecordingCarrier {
    fn key(&self) -> &str {
        self.key
    }

    fn name(&self) -> &str {
        self.key
    }

    fn ship_order(&self, order: &Order) -> Result<Shipment> {
        self.shipped.fetch_add(1, Ordering::SeqCst);
        Ok(Shipment::new(order, self.key, self.key))
    }
}

pub fn services(carriers: &[&Arc<RecordingCarrier>]) -> Arc<ShippingServices> {
    Arc::new(
        carriers
            .iter()
            .map(|carrier| Arc::clone(*carrier) as Arc<dyn ShippingService>)
            .collect(),
    )
}
