//! Bulk operations that produce a new collection from the receiver.
//!
//! Every closure receives elements in their outward form. The receiver is
//! never mutated and no observer is notified. The resulting stored values are
//! rewrapped (or returned bare) according to the receiver's `wrap_results`
//! setting.
//!
//! The closure-less counterpart of each operation is the lazy
//! [`iter`](super::TranslatedCollection::iter) combined with the std iterator
//! adapters (`iter().filter(..)`, `iter().take_while(..)`, ...).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;

use super::TranslatedCollection;

// ============================================================================
// Derived
// ============================================================================

/// Result of a derived operation: a fresh wrapper sharing the receiver's
/// translation functions, or the bare underlying collection.
pub enum Derived<C: Collection, O> {
    Wrapped(TranslatedCollection<C, O>),
    Bare(C),
}

impl<C: Collection, O> Derived<C, O> {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }

    /// The stored values, whichever form the result took.
    pub fn stored(&self) -> &C {
        match self {
            Self::Wrapped(w) => w.collection(),
            Self::Bare(c) => c,
        }
    }

    pub fn into_stored(self) -> C {
        match self {
            Self::Wrapped(w) => w.into_inner(),
            Self::Bare(c) => c,
        }
    }

    pub fn as_wrapped(&self) -> Option<&TranslatedCollection<C, O>> {
        match self {
            Self::Wrapped(w) => Some(w),
            Self::Bare(_) => None,
        }
    }

    pub fn into_wrapped(self) -> Option<TranslatedCollection<C, O>> {
        match self {
            Self::Wrapped(w) => Some(w),
            Self::Bare(_) => None,
        }
    }
}

impl<C: Collection + fmt::Debug, O> fmt::Debug for Derived<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapped(w) => f.debug_tuple("Wrapped").field(w).finish(),
            Self::Bare(c) => f.debug_tuple("Bare").field(c).finish(),
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

impl<C: Collection, O> TranslatedCollection<C, O> {
    /// Wrap a freshly built collection like `self`, or hand it back bare.
    fn rewrap(&self, collection: C) -> Derived<C, O> {
        if self.wrap_results {
            Derived::Wrapped(Self::from_parts(
                collection,
                Arc::clone(&self.translate_in),
                Arc::clone(&self.translate_out),
                self.wrap_results,
            ))
        } else {
            Derived::Bare(collection)
        }
    }

    /// Build a new collection from the transform's results. Results are
    /// stored as returned, without inward translation.
    pub fn map<F>(&self, transform: F) -> Derived<C, O>
    where
        F: FnMut(O) -> C::Item,
    {
        self.rewrap(C::from_items(self.iter().map(transform)))
    }

    /// Alias for [`map`](Self::map).
    pub fn collect<F>(&self, transform: F) -> Derived<C, O>
    where
        F: FnMut(O) -> C::Item,
    {
        self.map(transform)
    }

    /// Like [`map`](Self::map), concatenating each transform's output.
    pub fn flat_map<I, F>(&self, transform: F) -> Derived<C, O>
    where
        I: IntoIterator<Item = C::Item>,
        F: FnMut(O) -> I,
    {
        self.rewrap(C::from_items(self.iter().flat_map(transform)))
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn collect_concat<I, F>(&self, transform: F) -> Derived<C, O>
    where
        I: IntoIterator<Item = C::Item>,
        F: FnMut(O) -> I,
    {
        self.flat_map(transform)
    }

    /// Keep the elements whose outward form satisfies `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        let items = self
            .collection
            .iter()
            .filter(|stored| predicate(&self.translate_out(stored)))
            .cloned();
        self.rewrap(C::from_items(items))
    }

    /// Alias for [`filter`](Self::filter).
    pub fn select<P>(&self, predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        self.filter(predicate)
    }

    /// Alias for [`filter`](Self::filter).
    pub fn find_all<P>(&self, predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        self.filter(predicate)
    }

    /// Keep the elements whose outward form does not satisfy `predicate`.
    pub fn reject<P>(&self, mut predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        self.filter(|o| !predicate(o))
    }

    /// Skip leading elements while `predicate` holds, keep the rest.
    pub fn drop_while<P>(&self, mut predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        let items = self
            .collection
            .iter()
            .skip_while(|stored| predicate(&self.translate_out(stored)))
            .cloned();
        self.rewrap(C::from_items(items))
    }

    /// Keep leading elements while `predicate` holds.
    pub fn take_while<P>(&self, mut predicate: P) -> Derived<C, O>
    where
        P: FnMut(&O) -> bool,
    {
        let items = self
            .collection
            .iter()
            .take_while(|stored| predicate(&self.translate_out(stored)))
            .cloned();
        self.rewrap(C::from_items(items))
    }

    /// Stable sort by a key computed from each element's outward form.
    pub fn sort_by_key<K, F>(&self, mut key: F) -> Derived<C, O>
    where
        K: Ord,
        F: FnMut(&O) -> K,
    {
        let mut keyed: Vec<(K, &C::Item)> = self
            .collection
            .iter()
            .map(|stored| (key(&self.translate_out(stored)), stored))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        self.rewrap(C::from_items(keyed.into_iter().map(|(_, s)| s.clone())))
    }

    /// Stable sort comparing outward forms with `compare`.
    pub fn sort_by<F>(&self, mut compare: F) -> Derived<C, O>
    where
        F: FnMut(&O, &O) -> Ordering,
    {
        let mut pairs: Vec<(O, &C::Item)> = self
            .collection
            .iter()
            .map(|stored| (self.translate_out(stored), stored))
            .collect();
        pairs.sort_by(|a, b| compare(&a.0, &b.0));
        self.rewrap(C::from_items(pairs.into_iter().map(|(_, s)| s.clone())))
    }

    /// Stable sort by the natural order of outward forms.
    pub fn sorted(&self) -> Derived<C, O>
    where
        O: Ord,
    {
        self.sort_by(|a, b| a.cmp(b))
    }
}
