//! Constructor declarations for implicit construction
//!
//! A type takes part in resolution by implementing [`Component`]. Concrete
//! types list their public constructors; abstract keys (trait objects,
//! collections of trait objects) are marked with [`interface!`](crate::interface)
//! and can only be satisfied through a registration.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use crate::error::{ResolveError, Result};
use crate::key::TypeKey;
use crate::resolver::{ResolutionStack, Resolver};

/// Type-erased resolved object: a boxed `Arc<T>` for the requested `T`
pub(crate) type Instance = Box<dyn Any>;

type ResolveFn = fn(&Resolver, &mut ResolutionStack) -> Result<Instance>;

/// A type the resolver can hand out
pub trait Component: 'static {
    /// Abstract components have no constructors of their own and must be
    /// registered before they can be resolved.
    fn is_abstract() -> bool {
        false
    }

    /// Public constructors available for implicit construction
    ///
    /// Exactly one is required; zero or several make implicit construction
    /// fail.
    fn constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }
}

/// Exposes a concrete component under the key `I`
///
/// Every component implements itself. Trait-object keys are declared with
/// [`implements!`](crate::implements).
pub trait Implements<I: ?Sized + 'static>: Component + Sized {
    /// Convert the shared concrete instance into the key type
    fn upcast(self: Arc<Self>) -> Arc<I>;
}

impl<T: Component> Implements<T> for T {
    fn upcast(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// A constructor parameter: the key to resolve and how to resolve it
#[derive(Clone, Copy)]
pub struct Dependency {
    key: TypeKey,
    resolve: ResolveFn,
}

impl Dependency {
    /// Dependency on the component `T`
    pub fn of<T: Component + ?Sized>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            resolve: Resolver::resolve_instance::<T>,
        }
    }

    /// Key of the required type
    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub(crate) fn resolve(
        &self,
        resolver: &Resolver,
        stack: &mut ResolutionStack,
    ) -> Result<Instance> {
        (self.resolve)(resolver, stack)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dependency").field(&self.key).finish()
    }
}

/// A public constructor of `T`
///
/// Parameters are resolved in the order they were declared with
/// [`param`](Constructor::param) and handed to the body through
/// [`Arguments`], which yields them in the same order.
///
/// ```rust,ignore
/// impl Component for OrderProcessor {
///     fn constructors() -> Vec<Constructor<Self>> {
///         vec![
///             Constructor::new("OrderProcessor::new", |args| {
///                 Ok(OrderProcessor::new(args.take()?))
///             })
///             .param::<ShippingServices>(),
///         ]
///     }
/// }
/// ```
pub struct Constructor<T: ?Sized> {
    signature: &'static str,
    parameters: Vec<Dependency>,
    body: Box<dyn Fn(&mut Arguments) -> Result<Arc<T>>>,
}

impl<T: 'static> Constructor<T> {
    /// Constructor with the given signature and body and no parameters yet
    pub fn new<F>(signature: &'static str, body: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<T> + 'static,
    {
        Self {
            signature,
            parameters: Vec::new(),
            body: Box::new(move |args| body(args).map(Arc::new)),
        }
    }
}

impl<T: ?Sized + 'static> Constructor<T> {
    /// Append a parameter of type `P`
    #[must_use]
    pub fn param<P: Component + ?Sized>(mut self) -> Self {
        self.parameters.push(Dependency::of::<P>());
        self
    }

    /// Human-readable signature used in diagnostics
    pub fn signature(&self) -> &'static str {
        self.signature
    }

    /// Declared parameters in order
    pub fn parameters(&self) -> &[Dependency] {
        &self.parameters
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub(crate) fn invoke(&self, values: Vec<Instance>) -> Result<Arc<T>> {
        let mut args = Arguments::new(self.signature, values);
        (self.body)(&mut args)
    }
}

impl<T: ?Sized> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Resolved arguments passed to a constructor body
pub struct Arguments {
    constructor: &'static str,
    values: std::vec::IntoIter<Instance>,
    position: usize,
}

impl Arguments {
    fn new(constructor: &'static str, values: Vec<Instance>) -> Self {
        Self {
            constructor,
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Take the next argument as `Arc<P>`
    pub fn take<P: ?Sized + 'static>(&mut self) -> Result<Arc<P>> {
        let constructor = self.constructor;
        let position = self.position;
        self.position += 1;
        let mismatch = || ResolveError::ArgumentMismatch {
            constructor,
            position,
            expected: type_name::<P>(),
        };

        let value = self.values.next().ok_or_else(mismatch)?;
        value
            .downcast::<Arc<P>>()
            .map(|arc| *arc)
            .map_err(|_| mismatch())
    }

    /// Arguments not taken yet
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

/// Mark types as abstract components
///
/// ```rust,ignore
/// pub trait ShippingService { /* ... */ }
/// parcel_di::interface!(dyn ShippingService);
/// ```
#[macro_export]
macro_rules! interface {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Component for $ty {
                fn is_abstract() -> bool {
                    true
                }
            }
        )+
    };
}

/// Declare that a concrete component can be resolved under trait-object keys
///
/// ```rust,ignore
/// parcel_di::implements!(UpsShippingService => dyn ShippingService);
/// ```
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $($iface:ty),+ $(,)?) => {
        $(
            impl $crate::Implements<$iface> for $concrete {
                fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$iface> {
                    self
                }
            }
        )+
    };
}
