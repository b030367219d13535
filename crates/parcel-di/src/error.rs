//! Resolution error types

use thiserror::Error;

use crate::key::TypeKey;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Reasons a resolution can fail
///
/// Any of these aborts the outermost `resolve` call; nested failures are
/// propagated unchanged.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The target type declares more than one public constructor
    #[error("ambiguous constructor: {key} declares {count} public constructors, expected exactly one")]
    AmbiguousConstructor {
        /// Type that could not be constructed
        key: TypeKey,
        /// Number of constructors found
        count: usize,
    },

    /// The target type declares no public constructor
    #[error("missing constructor: {key} declares no public constructor")]
    MissingConstructor {
        /// Type that could not be constructed
        key: TypeKey,
    },

    /// An abstract type was requested and nothing is registered for it
    #[error("unresolvable dependency: no registration for abstract type {key}")]
    UnresolvableDependency {
        /// Key with no registration
        key: TypeKey,
    },

    /// A type was requested again while it was still being resolved
    #[error("circular dependency: {}", format_path(.path))]
    CircularDependency {
        /// Keys on the resolution stack, ending with the re-entered key
        path: Vec<TypeKey>,
    },

    /// A constructor body read an argument of the wrong type or count
    #[error("argument mismatch in {constructor}: parameter {position} is not a {expected}")]
    ArgumentMismatch {
        /// Constructor signature
        constructor: &'static str,
        /// Zero-based parameter position
        position: usize,
        /// Type the body asked for
        expected: &'static str,
    },

    /// A constructor body reported a failure of its own
    #[error("construction of {key} failed: {message}")]
    Construction {
        /// Type being constructed
        key: TypeKey,
        /// Description of the failure
        message: String,
    },

    /// A factory produced a value that does not match its key
    #[error("factory registered for {key} produced a value of another type")]
    TypeMismatch {
        /// Key the factory is bound to
        key: TypeKey,
    },
}

impl ResolveError {
    /// Create a construction error for type `T`
    pub fn construction<T: ?Sized + 'static, S: Into<String>>(message: S) -> Self {
        Self::Construction {
            key: TypeKey::of::<T>(),
            message: message.into(),
        }
    }

    /// Key the error is about; the re-entered key for cycles
    pub fn key(&self) -> Option<TypeKey> {
        match self {
            Self::AmbiguousConstructor { key, .. }
            | Self::MissingConstructor { key }
            | Self::UnresolvableDependency { key }
            | Self::Construction { key, .. }
            | Self::TypeMismatch { key } => Some(*key),
            Self::CircularDependency { path } => path.last().copied(),
            Self::ArgumentMismatch { .. } => None,
        }
    }
}

fn format_path(path: &[TypeKey]) -> String {
    path.iter()
        .map(TypeKey::name)
        .collect::<Vec<_>>()
        .join(" -> ")
}
