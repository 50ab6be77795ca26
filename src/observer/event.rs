//! ChangeEvent — describes a completed mutation.
//!
//! Payloads always carry stored (inward-translated) values, never the
//! outward form the caller supplied. `K` is the collection's key type.

/// A change event delivered to observers after every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent<K, S> {
    /// A value was stored under a key.
    Set { key: K, value: S },
    /// A value was appended.
    Push(S),
    /// One or more values were removed from the end, in collection order.
    Pop(Vec<S>),
    /// A value was removed by equality or by position.
    Delete(S),
    /// The collection was emptied.
    Clear,
    /// A bulk rewrite (e.g. conformance fix-up, in-place filtering).
    Misc,
}

/// Fieldless discriminant of a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Set,
    Push,
    Pop,
    Delete,
    Clear,
    Misc,
}

impl<K, S> ChangeEvent<K, S> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Set { .. } => ChangeKind::Set,
            Self::Push(_) => ChangeKind::Push,
            Self::Pop(_) => ChangeKind::Pop,
            Self::Delete(_) => ChangeKind::Delete,
            Self::Clear => ChangeKind::Clear,
            Self::Misc => ChangeKind::Misc,
        }
    }

    /// Key of a [`Set`](Self::Set) event.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Set { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Stored values carried by the event.
    pub fn values(&self) -> Vec<&S> {
        match self {
            Self::Set { value, .. } => vec![value],
            Self::Push(value) => vec![value],
            Self::Pop(values) => values.iter().collect(),
            Self::Delete(value) => vec![value],
            Self::Clear | Self::Misc => Vec::new(),
        }
    }
}
