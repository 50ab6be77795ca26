use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ConstructionError
// ---------------------------------------------------------------------------

/// Raised when a conformance check is requested at construction time and a
/// stored element is not a fixed point of the inward translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Non-conforming collection provided: element at position {position} changes under inward translation")]
pub struct ConstructionError {
    /// Iteration position of the first offending element.
    pub position: usize,
}

/// A [`ConstructionError`] carrying the rejected collection, so a failed
/// checked build does not lose it.
pub struct RejectedCollection<C> {
    error: ConstructionError,
    collection: C,
}

impl<C> RejectedCollection<C> {
    pub(crate) fn new(error: ConstructionError, collection: C) -> Self {
        Self { error, collection }
    }

    pub fn error(&self) -> &ConstructionError {
        &self.error
    }

    /// The collection that failed the check, untouched.
    pub fn into_inner(self) -> C {
        self.collection
    }

    pub fn into_error(self) -> ConstructionError {
        self.error
    }
}

impl<C> fmt::Debug for RejectedCollection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RejectedCollection")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for RejectedCollection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<C> std::error::Error for RejectedCollection<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ---------------------------------------------------------------------------
// LookupError
// ---------------------------------------------------------------------------

/// Raised by `fetch` when the position or key holds no element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `key` is the `Debug` rendering of the missing key.
    #[error("Key not found: {key}")]
    MissingKey { key: String },
}

// ---------------------------------------------------------------------------
// ImmutabilityError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {operation}: translated collection is frozen")]
pub struct ImmutabilityError {
    /// Name of the rejected operation (e.g. `"append"`).
    pub operation: &'static str,
}

impl ImmutabilityError {
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

// ---------------------------------------------------------------------------
// ObserverError
// ---------------------------------------------------------------------------

/// Failure reported by an observer callback.
///
/// Observers are not isolated from each other: the first failure aborts the
/// notification round and is handed back to the caller of the mutation.
#[derive(Debug)]
pub struct ObserverError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ObserverError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Build an observer error from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(message.to_string())
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.source
    }
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observer failed: {}", self.source)
    }
}

impl std::error::Error for ObserverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

// ---------------------------------------------------------------------------
// TranslatedCollectionError — top-level rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum TranslatedCollectionError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Immutable(#[from] ImmutabilityError),

    #[error(transparent)]
    Observer(#[from] ObserverError),
}

impl<C> From<RejectedCollection<C>> for TranslatedCollectionError {
    fn from(rejected: RejectedCollection<C>) -> Self {
        Self::Construction(rejected.into_error())
    }
}

/// Convenience alias — the default error type is `TranslatedCollectionError`.
pub type Result<T, E = TranslatedCollectionError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
