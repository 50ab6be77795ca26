use serde::{Deserialize, Serialize};

/// Construction-time options for a [`TranslatedCollection`](crate::TranslatedCollection).
///
/// Missing fields fall back to their defaults when deserialized, so a partial
/// configuration document such as `{"wrap_results": false}` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperOptions {
    /// Reject non-empty collections whose elements are not fixed points of the
    /// inward translation. Default: `false`.
    pub check_conformance: bool,
    /// Return derived collections wrapped in a new translated collection
    /// (`true`) or as a bare underlying collection (`false`). Default: `true`.
    pub wrap_results: bool,
}

impl Default for WrapperOptions {
    fn default() -> Self {
        Self {
            check_conformance: false,
            wrap_results: true,
        }
    }
}

/// A named capability that an underlying collection (or a wrapper around
/// one) can report supporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Elements have a stable, caller-visible order and duplicates are kept.
    OrderedSequence,
    /// Elements are unique under equality.
    UniqueSet,
    /// Elements are addressable by key or position.
    Indexed,
}

/// Unique identity of a wrapper instance, handed to observers as the source
/// of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WrapperId(pub(crate) u64);

impl WrapperId {
    pub fn get(self) -> u64 {
        self.0
    }
}
