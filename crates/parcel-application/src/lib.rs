//! Application Layer - Parcel
//!
//! Use cases that route orders to carriers. They depend only on the ports
//! declared in `parcel-domain`; concrete carriers are supplied by whoever
//! wires the resolver.
//!
//! ## Use Cases
//!
//! - [`OrderProcessor`]: selects the carrier for an order directly from the
//!   carrier collection
//! - [`ControlledOrderProcessor`]: delegates carrier selection to a
//!   [`ShippingController`]

pub mod use_cases;

pub use use_cases::*;
