//! Registry of explicit bindings

use std::collections::HashMap;
use std::fmt;

use crate::component::Instance;
use crate::error::Result;
use crate::key::TypeKey;
use crate::resolver::{ResolutionStack, Resolver};

/// Zero-argument factory behind a registration
///
/// The resolver and the in-flight stack are passed through so that lazily
/// bound types can construct their own dependencies at call time.
pub(crate) type Factory = Box<dyn Fn(&Resolver, &mut ResolutionStack) -> Result<Instance>>;

/// How a key is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Always returns the same registered instance
    Instance,
    /// Constructs `implementation` on every resolution
    Type {
        /// Concrete type built for the key
        implementation: TypeKey,
    },
    /// Calls a caller-supplied factory on every resolution
    Factory,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance => f.write_str("instance"),
            Self::Type { implementation } => write!(f, "type {}", implementation),
            Self::Factory => f.write_str("factory"),
        }
    }
}

/// A key bound to its factory
pub(crate) struct Registration {
    binding: Binding,
    factory: Factory,
}

impl Registration {
    pub(crate) fn new(binding: Binding, factory: Factory) -> Self {
        Self { binding, factory }
    }

    pub(crate) fn binding(&self) -> Binding {
        self.binding
    }

    pub(crate) fn produce(
        &self,
        resolver: &Resolver,
        stack: &mut ResolutionStack,
    ) -> Result<Instance> {
        (self.factory)(resolver, stack)
    }
}

/// Map from key to registration; at most one registration per key
#[derive(Default)]
pub(crate) struct Registry {
    entries: HashMap<TypeKey, Registration>,
}

impl Registry {
    /// Bind `key`, returning the binding it replaced
    pub(crate) fn insert(&mut self, key: TypeKey, registration: Registration) -> Option<Binding> {
        self.entries
            .insert(key, registration)
            .map(|previous| previous.binding())
    }

    pub(crate) fn get(&self, key: &TypeKey) -> Option<&Registration> {
        self.entries.get(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn bindings(&self) -> impl Iterator<Item = (TypeKey, Binding)> + '_ {
        self.entries
            .iter()
            .map(|(key, registration)| (*key, registration.binding()))
    }
}
