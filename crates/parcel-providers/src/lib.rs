//! Carrier implementations for Parcel
//!
//! Each carrier is a zero-dependency component, so the resolver can build
//! it by implicit construction. [`resolve_shipping_provider`] maps a
//! configured carrier key to an instance.

pub mod constants;
pub mod shipping;

pub use shipping::{
    list_shipping_providers, resolve_shipping_provider, FedExShippingService,
    UpsShippingService, UspsShippingService,
};
