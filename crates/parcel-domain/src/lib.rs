//! Domain layer for Parcel
//!
//! Orders, shipments and the ports the application layer programs against.
//! Port traits are declared as abstract components so they can be used as
//! resolver keys; this crate knows nothing about concrete carriers.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
