//! Parcel resolver
//!
//! A small dependency-injection container. Abstractions are keyed by type
//! identity; each key is either bound explicitly or built on demand from the
//! single public constructor its type declares.
//!
//! ## Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`Resolver::register_instance`] | bind a key to one shared instance |
//! | [`Resolver::register_type`] | bind a key to a concrete type built lazily on every resolution |
//! | [`Resolver::register_factory`] | bind a key to a caller-supplied factory |
//! | [`Resolver::resolve`] | produce a fully wired object for a key |
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use parcel_di::{Component, Constructor, Resolver};
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//! parcel_di::interface!(dyn Greeter);
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//! impl Component for English {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::new("English::new", |_| Ok(English))]
//!     }
//! }
//! parcel_di::implements!(English => dyn Greeter);
//!
//! struct Host {
//!     greeter: Arc<dyn Greeter>,
//! }
//! impl Component for Host {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![
//!             Constructor::new("Host::new", |args| Ok(Host { greeter: args.take()? }))
//!                 .param::<dyn Greeter>(),
//!         ]
//!     }
//! }
//!
//! let mut resolver = Resolver::new();
//! resolver.register_type::<dyn Greeter, English>();
//!
//! let host = resolver.resolve::<Host>().unwrap();
//! assert_eq!(host.greeter.greet(), "hello");
//! ```

pub mod component;
pub mod error;
pub mod key;
mod registry;
pub mod resolver;

pub use component::{Arguments, Component, Constructor, Dependency, Implements};
pub use error::{ResolveError, Result};
pub use key::TypeKey;
pub use registry::Binding;
pub use resolver::Resolver;
