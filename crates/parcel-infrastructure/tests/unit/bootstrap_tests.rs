//! Composition root tests

use std::sync::Arc;

use parcel_di::Binding;
use parcel_domain::{
    Error, Order, OrderProcessorInterface, ShippingControllerInterface, ShippingServices,
};
use parcel_infrastructure::config::{AppConfig, ShippingConfig};
use parcel_infrastructure::{build_resolver, init_app};

fn shipping(providers: &[&str]) -> ShippingConfig {
    ShippingConfig {
        providers: providers.iter().map(|key| key.to_string()).collect(),
        default_shipper: providers[0].to_string(),
    }
}

#[test]
fn test_resolver_bindings() {
    let resolver = build_resolver(&ShippingConfig::default()).unwrap();

    assert_eq!(resolver.len(), 3);
    assert_eq!(resolver.binding::<ShippingServices>(), Some(Binding::Instance));
    assert!(matches!(
        resolver.binding::<dyn OrderProcessorInterface>(),
        Some(Binding::Type { .. })
    ));
    assert!(resolver.is_registered::<dyn ShippingControllerInterface>());
}

#[test]
fn test_enabled_providers_in_order() {
    let resolver = build_resolver(&shipping(&["USPS", "FedEx"])).unwrap();
    let services = resolver.resolve::<ShippingServices>().unwrap();
    assert_eq!(services.keys(), vec!["USPS", "FedEx"]);
}

#[test]
fn test_unknown_provider_fails_bootstrap() {
    let result = build_resolver(&shipping(&["UPS", "DHL"]));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_processors_share_provider_collection() {
    let resolver = build_resolver(&ShippingConfig::default()).unwrap();
    let services = resolver.resolve::<ShippingServices>().unwrap();
    let again = resolver.resolve::<ShippingServices>().unwrap();
    assert!(Arc::ptr_eq(&services, &again));

    let first = resolver.resolve::<dyn OrderProcessorInterface>().unwrap();
    let second = resolver.resolve::<dyn OrderProcessorInterface>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_context_ships_both_ways() {
    let context = init_app(AppConfig::default()).unwrap();
    let order = Order::new(42, "ABC-555-0042", "FedEx");

    for via_controller in [false, true] {
        let shipment = context
            .order_processor(via_controller)
            .unwrap()
            .process_order(&order)
            .unwrap();
        assert_eq!(shipment.carrier_key, "FedEx");
        assert_eq!(shipment.order_id, 42);
    }
}

#[test]
fn test_disabled_provider_is_not_found() {
    let mut config = AppConfig::default();
    config.shipping = shipping(&["UPS"]);
    let context = init_app(config).unwrap();

    let result = context
        .order_processor(false)
        .unwrap()
        .process_order(&Order::new(1, "ABC-555-0001", "USPS"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert_eq!(context.shipping_services().unwrap().len(), 1);
}
