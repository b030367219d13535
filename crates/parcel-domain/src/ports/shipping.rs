//! Shipping carrier port

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Order, Shipment};

/// A carrier able to ship orders
pub trait ShippingService {
    /// Key orders use to select this carrier (e.g. `"UPS"`)
    fn key(&self) -> &str;

    /// Display name of the carrier
    fn name(&self) -> &str;

    /// Ship `order`
    fn ship_order(&self, order: &Order) -> Result<Shipment>;
}

/// The set of carriers available to the application
///
/// Registered as a single instance; processors receive the same collection
/// and select a carrier per order by key.
#[derive(Clone, Default)]
pub struct ShippingServices {
    services: Vec<Arc<dyn ShippingService>>,
}

parcel_di::interface!(dyn ShippingService, ShippingServices);

impl ShippingServices {
    /// Collection over the given carriers, in order
    pub fn new(services: Vec<Arc<dyn ShippingService>>) -> Self {
        Self { services }
    }

    /// The only carrier whose key is `key`
    ///
    /// Fails with `NotFound` when no carrier matches and with
    /// `InvalidArgument` when several do.
    pub fn find(&self, key: &str) -> Result<&Arc<dyn ShippingService>> {
        let mut matches = self.services.iter().filter(|s| s.key() == key);
        let found = matches
            .next()
            .ok_or_else(|| Error::not_found(format!("shipping service '{}'", key)))?;

        if matches.next().is_some() {
            return Err(Error::invalid_argument(format!(
                "more than one shipping service is registered for '{}'",
                key
            )));
        }
        Ok(found)
    }

    /// Keys of all carriers, in order
    pub fn keys(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.key()).collect()
    }

    /// Iterate over the carriers
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ShippingService>> {
        self.services.iter()
    }

    /// Number of carriers
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True when no carrier is available
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl FromIterator<Arc<dyn ShippingService>> for ShippingServices {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ShippingService>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for ShippingServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
