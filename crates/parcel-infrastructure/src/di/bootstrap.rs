//! Composition root
//!
//! ```text
//! AppConfig.shipping.providers
//!        │  resolve_shipping_provider (implicit construction)
//!        ▼
//! ShippingServices ──instance──► Resolver
//!                                  ├── dyn ShippingControllerInterface → ShippingController
//!                                  └── dyn OrderProcessorInterface     → OrderProcessor
//! ```

use std::sync::Arc;

use parcel_application::{ControlledOrderProcessor, OrderProcessor, ShippingController};
use parcel_di::Resolver;
use parcel_domain::{
    OrderProcessorInterface, Result, ShippingControllerInterface, ShippingService,
    ShippingServices,
};
use parcel_providers::resolve_shipping_provider;
use tracing::info;

use crate::config::{AppConfig, ShippingConfig};

/// Build a resolver wired for the enabled carriers
///
/// Carriers are built once, in configuration order, and shared through a
/// single [`ShippingServices`] instance. Use cases stay type bindings and are
/// constructed on every resolution.
pub fn build_resolver(config: &ShippingConfig) -> Result<Resolver> {
    let mut resolver = Resolver::new();

    let carriers = config
        .providers
        .iter()
        .map(|key| resolve_shipping_provider(&resolver, key))
        .collect::<Result<Vec<Arc<dyn ShippingService>>>>()?;
    let shipping_services: ShippingServices = carriers.into_iter().collect();
    info!(carriers = ?shipping_services, "Shipping providers enabled");

    resolver
        .register_instance(Arc::new(shipping_services))
        .register_type::<dyn ShippingControllerInterface, ShippingController>()
        .register_type::<dyn OrderProcessorInterface, OrderProcessor>();

    Ok(resolver)
}

/// Application context: configuration plus the wired resolver
#[derive(Debug)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    resolver: Resolver,
}

impl AppContext {
    /// The wired resolver
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve the order processor
    ///
    /// With `via_controller` the processor delegates carrier selection to the
    /// registered shipping controller.
    pub fn order_processor(&self, via_controller: bool) -> Result<Arc<dyn OrderProcessorInterface>> {
        if via_controller {
            let processor = self.resolver.resolve::<ControlledOrderProcessor>()?;
            Ok(processor as Arc<dyn OrderProcessorInterface>)
        } else {
            Ok(self.resolver.resolve::<dyn OrderProcessorInterface>()?)
        }
    }

    /// Enabled carriers, in lookup order
    pub fn shipping_services(&self) -> Result<Arc<ShippingServices>> {
        Ok(self.resolver.resolve::<ShippingServices>()?)
    }
}

/// Initialize the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let resolver = build_resolver(&config.shipping)?;
    Ok(AppContext {
        config: Arc::new(config),
        resolver,
    })
}
