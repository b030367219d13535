//! # Parcel
//!
//! Order dispatch wired through a small dependency-injection resolver.
//!
//! ## Example
//!
//! ```
//! use parcel::domain::{Order, OrderProcessorInterface};
//! use parcel::infrastructure::{init_app, AppConfig};
//!
//! let context = init_app(AppConfig::default()).unwrap();
//! let processor = context.order_processor(false).unwrap();
//!
//! let shipment = processor
//!     .process_order(&Order::new(1, "ABC-555-0001", "UPS"))
//!     .unwrap();
//! assert_eq!(shipment.carrier_name, "United Parcel Service");
//! ```
//!
//! ## Architecture
//!
//! - `di` - the resolver: registrations, implicit construction, error kinds
//! - `domain` - orders, shipments and port traits
//! - `application` - order processing use cases
//! - `providers` - UPS, FedEx and USPS carriers
//! - `infrastructure` - configuration, logging and the composition root

pub mod cli;

/// Resolver
pub mod di {
    pub use parcel_di::*;
}

/// Domain layer - orders, shipments and ports
pub mod domain {
    pub use parcel_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use parcel_application::*;
}

/// Carrier implementations
pub mod providers {
    pub use parcel_providers::*;
}

/// Infrastructure layer - config, logging and composition root
pub mod infrastructure {
    pub use parcel_infrastructure::*;
}
