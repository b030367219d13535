//! Shipping carriers
//!
//! ```text
//! Config: "shipping.providers = [\"UPS\", \"FedEx\"]"
//!                    │
//!                    ▼
//!   resolve_shipping_provider(&resolver, key)
//!                    │   implicit construction of the concrete carrier
//!                    ▼
//!   Arc<dyn ShippingService>
//! ```

pub mod fedex;
pub mod ups;
pub mod usps;

use std::sync::Arc;

use parcel_di::{Implements, Resolver};
use parcel_domain::{Error, Result, ShippingService};

use crate::constants::{FEDEX_KEY, FEDEX_NAME, UPS_KEY, UPS_NAME, USPS_KEY, USPS_NAME};

pub use fedex::FedExShippingService;
pub use ups::UpsShippingService;
pub use usps::UspsShippingService;

/// Built-in carriers as (key, display name)
pub fn list_shipping_providers() -> Vec<(&'static str, &'static str)> {
    vec![
        (UPS_KEY, UPS_NAME),
        (FEDEX_KEY, FEDEX_NAME),
        (USPS_KEY, USPS_NAME),
    ]
}

/// Build the built-in carrier registered under `key`
///
/// A binding for the concrete carrier type in `resolver` takes precedence
/// over implicit construction.
pub fn resolve_shipping_provider(resolver: &Resolver, key: &str) -> Result<Arc<dyn ShippingService>> {
    match key {
        UPS_KEY => resolve_as_service::<UpsShippingService>(resolver),
        FEDEX_KEY => resolve_as_service::<FedExShippingService>(resolver),
        USPS_KEY => resolve_as_service::<UspsShippingService>(resolver),
        other => Err(Error::not_found(format!("shipping provider '{}'", other))),
    }
}

fn resolve_as_service<C>(resolver: &Resolver) -> Result<Arc<dyn ShippingService>>
where
    C: Implements<dyn ShippingService>,
{
    let carrier = resolver.resolve::<C>()?;
    Ok(<C as Implements<dyn ShippingService>>::upcast(carrier))
}
