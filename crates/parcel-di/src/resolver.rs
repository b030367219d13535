//! The resolver: explicit registrations plus implicit construction
//!
//! ## Algorithm
//!
//! ```text
//! resolve::<T>()
//!   │
//!   ├── T registered? ──yes──► invoke its factory
//!   │
//!   └── no ──► implicit construction of T
//!                ├── abstract         → UnresolvableDependency
//!                ├── 0 constructors   → MissingConstructor
//!                ├── 2+ constructors  → AmbiguousConstructor
//!                └── 1 constructor    → resolve each parameter in order,
//!                                       then call the constructor body
//! ```
//!
//! Every key resolution is pushed on an in-flight stack for the duration of
//! the call; asking for a key that is already on the stack fails with
//! `CircularDependency` instead of recursing forever.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::component::{Component, Implements, Instance};
use crate::error::{ResolveError, Result};
use crate::key::TypeKey;
use crate::registry::{Binding, Factory, Registration, Registry};

/// Keys currently being resolved, outermost first
#[derive(Debug, Default)]
pub(crate) struct ResolutionStack {
    keys: Vec<TypeKey>,
}

impl ResolutionStack {
    fn enter(&mut self, key: TypeKey) -> Result<()> {
        if self.keys.contains(&key) {
            let mut path = self.keys.clone();
            path.push(key);
            return Err(ResolveError::CircularDependency { path });
        }
        self.keys.push(key);
        Ok(())
    }

    fn leave(&mut self) {
        self.keys.pop();
    }

    fn depth(&self) -> usize {
        self.keys.len()
    }
}

/// Dependency-injection container
///
/// Created at the composition root and passed by reference to whatever needs
/// to resolve. Registration needs `&mut self`; resolution only `&self`. The
/// resolver is single-threaded: factories are not required to be `Send` or
/// `Sync`.
#[derive(Default)]
pub struct Resolver {
    registry: Registry,
}

impl Resolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `T` to an existing instance
    ///
    /// Every later `resolve::<T>()` returns a clone of this `Arc`, pointing at
    /// the same object.
    pub fn register_instance<T: Component + ?Sized>(&mut self, instance: Arc<T>) -> &mut Self {
        let factory: Factory = Box::new(move |_, _| Ok(Box::new(Arc::clone(&instance)) as Instance));
        self.bind(TypeKey::of::<T>(), Registration::new(Binding::Instance, factory))
    }

    /// Bind `I` to the concrete component `C`
    ///
    /// `C` is built by implicit construction each time `I` is resolved, so
    /// registrations of its dependencies made after this call are honored.
    pub fn register_type<I, C>(&mut self) -> &mut Self
    where
        I: Component + ?Sized,
        C: Implements<I>,
    {
        let factory: Factory = Box::new(|resolver: &Resolver, stack: &mut ResolutionStack| {
            let concrete = resolver.construct::<C>(stack)?;
            Ok(Box::new(<C as Implements<I>>::upcast(concrete)) as Instance)
        });
        let binding = Binding::Type {
            implementation: TypeKey::of::<C>(),
        };
        self.bind(TypeKey::of::<I>(), Registration::new(binding, factory))
    }

    /// Bind `T` to a zero-argument factory called on every resolution
    pub fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Component + ?Sized,
        F: Fn() -> Arc<T> + 'static,
    {
        let factory: Factory = Box::new(move |_, _| Ok(Box::new(factory()) as Instance));
        self.bind(TypeKey::of::<T>(), Registration::new(Binding::Factory, factory))
    }

    /// Resolve `T` into a fully wired object
    pub fn resolve<T: Component + ?Sized>(&self) -> Result<Arc<T>> {
        let key = TypeKey::of::<T>();
        let mut stack = ResolutionStack::default();
        let resolved = self
            .resolve_instance::<T>(&mut stack)
            .and_then(|instance| downcast::<T>(key, instance));

        if let Err(e) = &resolved {
            debug!(key = %key, error = %e, "Resolution failed");
        }
        resolved
    }

    /// Whether an explicit binding exists for `T`
    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        self.registry.get(&TypeKey::of::<T>()).is_some()
    }

    /// Current binding of `T`, if any
    pub fn binding<T: ?Sized + 'static>(&self) -> Option<Binding> {
        self.registry
            .get(&TypeKey::of::<T>())
            .map(Registration::binding)
    }

    /// Number of explicit bindings
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bind(&mut self, key: TypeKey, registration: Registration) -> &mut Self {
        let binding = registration.binding();
        match self.registry.insert(key, registration) {
            Some(previous) => warn!(
                key = %key,
                binding = %binding,
                previous = %previous,
                "Replaced existing registration"
            ),
            None => debug!(key = %key, binding = %binding, "Registered"),
        }
        self
    }

    /// Resolve `T` as a type-erased `Arc<T>`; used for constructor parameters
    pub(crate) fn resolve_instance<T: Component + ?Sized>(
        &self,
        stack: &mut ResolutionStack,
    ) -> Result<Instance> {
        let key = TypeKey::of::<T>();
        stack.enter(key)?;
        trace!(key = %key, depth = stack.depth(), "Resolving");

        let resolved = match self.registry.get(&key) {
            Some(registration) => registration.produce(self, stack),
            None => self
                .construct::<T>(stack)
                .map(|object| Box::new(object) as Instance),
        };

        stack.leave();
        resolved
    }

    /// Implicit construction through the single public constructor of `T`
    fn construct<T: Component + ?Sized>(&self, stack: &mut ResolutionStack) -> Result<Arc<T>> {
        let key = TypeKey::of::<T>();
        if T::is_abstract() {
            return Err(ResolveError::UnresolvableDependency { key });
        }

        let mut constructors = T::constructors();
        if constructors.len() > 1 {
            return Err(ResolveError::AmbiguousConstructor {
                key,
                count: constructors.len(),
            });
        }
        let Some(constructor) = constructors.pop() else {
            return Err(ResolveError::MissingConstructor { key });
        };

        let mut arguments = Vec::with_capacity(constructor.arity());
        for dependency in constructor.parameters() {
            arguments.push(dependency.resolve(self, stack)?);
        }

        trace!(
            key = %key,
            constructor = constructor.signature(),
            "Invoking constructor"
        );
        constructor.invoke(arguments)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self
            .registry
            .bindings()
            .map(|(key, binding)| (key.name(), binding.to_string()))
            .collect();
        bindings.sort();

        f.debug_struct("Resolver")
            .field("bindings", &bindings)
            .finish()
    }
}

fn downcast<T: ?Sized + 'static>(key: TypeKey, instance: Instance) -> Result<Arc<T>> {
    instance
        .downcast::<Arc<T>>()
        .map(|arc| *arc)
        .map_err(|_| ResolveError::TypeMismatch { key })
}
