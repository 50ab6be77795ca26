//! Underlying collection capabilities.
//!
//! A [`TranslatedCollection`](crate::TranslatedCollection) never implements
//! storage itself; it delegates to any container implementing [`Collection`].
//! Keyed access lives in the separate [`Indexed`] trait so that sets can be
//! wrapped without pretending to support indices. Sequences are keyed by
//! position (`usize`); sets, which have no addressable slots, use
//! [`Infallible`](std::convert::Infallible) as their key.
//!
//! # Capability queries
//!
//! Two ways to ask "what kind of collection is this?":
//!   - statically, through the marker traits [`OrderedSequence`] and
//!     [`UniqueSet`], which a wrapper implements exactly when its underlying
//!     collection does;
//!   - at runtime, through [`Capabilities::supports`].

pub mod impls;

use std::fmt;

use crate::error::LookupError;
use crate::types::Capability;

/// The minimal capability set a wrapped collection must provide.
pub trait Collection: Default {
    /// Stored element type.
    type Item: Clone + PartialEq;

    /// Address of a slot, carried by [`ChangeEvent::Set`](crate::ChangeEvent::Set).
    type Key: Clone + PartialEq + fmt::Debug;

    /// Borrowing iterator in the collection's natural order.
    type Iter<'a>: Iterator<Item = &'a Self::Item> + Clone
    where
        Self: 'a;

    /// Capabilities reported by this collection type.
    const CAPABILITIES: &'static [Capability];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;

    /// Add an element: push for sequences, insert for sets.
    fn append(&mut self, item: Self::Item);

    /// Remove every element equal to `item`, returning the first one removed.
    fn remove_value(&mut self, item: &Self::Item) -> Option<Self::Item>;

    /// Remove the element at the end of iteration order.
    fn pop_last(&mut self) -> Option<Self::Item>;

    fn clear(&mut self);

    /// Keep only elements for which `keep` returns `true`.
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Item) -> bool;

    /// Build a fresh collection of the same concrete type.
    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>;
}

/// Collections addressable by [`Collection::Key`].
pub trait Indexed: Collection {
    fn get(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Store `item` under `key`. Sequences append when `key == len()` and
    /// fail with [`LookupError::IndexOutOfBounds`] past the end.
    fn set(&mut self, key: Self::Key, item: Self::Item) -> Result<(), LookupError>;

    fn remove_at(&mut self, key: &Self::Key) -> Option<Self::Item>;

    /// Error reported when `key` has no element.
    fn lookup_error(&self, key: &Self::Key) -> LookupError {
        LookupError::MissingKey {
            key: format!("{key:?}"),
        }
    }
}

/// Marker: elements keep insertion order and duplicates are allowed.
///
/// Implemented by sequence collections and by any wrapper around one.
pub trait OrderedSequence {}

/// Marker: elements are unique under equality.
///
/// Implemented by set collections and by any wrapper around one.
pub trait UniqueSet {}

/// Runtime capability query, answered by raw collections and wrappers alike.
pub trait Capabilities {
    fn capabilities(&self) -> &'static [Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Whether this is a translating wrapper rather than a raw collection.
    fn is_translated(&self) -> bool {
        false
    }
}
