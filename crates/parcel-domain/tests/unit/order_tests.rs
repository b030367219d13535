//! Unit tests for orders and shipments

use parcel_domain::{Order, Shipment};

#[test]
fn test_order_creation() {
    let order = Order::new(1, "ABC-555-0001", "UPS");
    assert_eq!(order.id, 1);
    assert_eq!(order.order_number, "ABC-555-0001");
    assert_eq!(order.shipping_method_key, "UPS");
}

#[test]
fn test_order_json_roundtrip() {
    let order = Order::new(7, "XYZ-1", "FedEx");
    let json = serde_json::to_string(&order).unwrap();
    assert!(json.contains("\"shipping_method_key\":\"FedEx\""));

    let parsed: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, order);
}

#[test]
fn test_shipment_copies_order_identity() {
    let order = Order::new(3, "ABC-555-0003", "FedEx");
    let shipment = Shipment::new(&order, "FedEx", "Federal Express");

    assert_eq!(shipment.order_id, 3);
    assert_eq!(shipment.order_number, "ABC-555-0003");
    assert_eq!(shipment.carrier_key, "FedEx");
    assert_eq!(
        shipment.to_string(),
        "Order ABC-555-0003 (#3) shipped via Federal Express"
    );
}
