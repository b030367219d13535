//! Unit tests for domain error types

use parcel_di::{ResolveError, TypeKey};
use parcel_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("shipping service 'DHL'");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "shipping service 'DHL'"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("duplicate key");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "duplicate key"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_shipping_error() {
    let error = Error::shipping("truck broke down");
    assert_eq!(error.to_string(), "Shipping error: truck broke down");
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::other("disk on fire");
    let error = Error::configuration_with_source("cannot read config", io);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "cannot read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_resolution_error_conversion() {
    struct Missing;
    let resolve_error = ResolveError::MissingConstructor {
        key: TypeKey::of::<Missing>(),
    };

    let error: Error = resolve_error.into();
    assert!(matches!(
        error,
        Error::Resolution(ResolveError::MissingConstructor { .. })
    ));
    assert!(error.to_string().starts_with("Resolution error"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io { .. }));
}
