//! Tests for resolution error formatting

use parcel_di::{ResolveError, TypeKey};

struct Widget;
struct Gadget;

#[test]
fn test_ambiguous_constructor_message() {
    let error = ResolveError::AmbiguousConstructor {
        key: TypeKey::of::<Widget>(),
        count: 3,
    };
    let message = error.to_string();
    assert!(message.contains("ambiguous constructor"));
    assert!(message.contains("Widget"));
    assert!(message.contains('3'));
}

#[test]
fn test_missing_constructor_message() {
    let error = ResolveError::MissingConstructor {
        key: TypeKey::of::<Widget>(),
    };
    assert!(error.to_string().starts_with("missing constructor"));
    assert_eq!(error.key(), Some(TypeKey::of::<Widget>()));
}

#[test]
fn test_unresolvable_dependency_message() {
    let error = ResolveError::UnresolvableDependency {
        key: TypeKey::of::<Gadget>(),
    };
    assert!(error.to_string().contains("Gadget"));
}

#[test]
fn test_circular_dependency_message_lists_path() {
    let error = ResolveError::CircularDependency {
        path: vec![
            TypeKey::of::<Widget>(),
            TypeKey::of::<Gadget>(),
            TypeKey::of::<Widget>(),
        ],
    };
    let message = error.to_string();
    assert!(message.starts_with("circular dependency"));
    assert_eq!(message.matches(" -> ").count(), 2);
    assert_eq!(error.key(), Some(TypeKey::of::<Widget>()));
}

#[test]
fn test_construction_helper() {
    let error = ResolveError::construction::<Widget, _>("out of parts");
    match error {
        ResolveError::Construction { key, message } => {
            assert_eq!(key, TypeKey::of::<Widget>());
            assert_eq!(message, "out of parts");
        }
        _ => panic!("Expected Construction error"),
    }
}
