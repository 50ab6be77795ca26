//! `TranslatedCollection<C, O>` — a translating proxy over a [`Collection`].
//!
//! Every value read out of the wrapper passes through `translate_out`
//! (stored → outward); every value written passes through `translate_in`
//! (outward → stored). The underlying collection only ever holds stored
//! values.
//!
//! # Notifications
//!
//! Each completed mutation fires exactly one [`ChangeEvent`] to the
//! registered observers, synchronously and in registration order, before the
//! mutating call returns. Reads never notify. Removals that remove nothing
//! and pops on an empty collection do not notify either.
//!
//! The collection is mutated *before* observers run. If an observer fails,
//! the error is returned to the caller, the mutation stays applied and
//! observers registered after the failing one never see the event.
//!
//! # Modules
//!
//! - [`builder`] — typestate builder and [`wrap`](builder::wrap).
//! - [`derived`] — bulk operations returning a [`Derived`] collection.
//! - [`iter`] — the lazy [`Outward`] iterator.

pub mod builder;
pub mod derived;
pub mod iter;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{
    collection::{Capabilities, Collection, Indexed, OrderedSequence, UniqueSet},
    error::{ImmutabilityError, ObserverError, Result},
    observer::{ChangeEvent, ObserverId, ObserverList},
    types::{Capability, WrapperId, WrapperOptions},
};

pub use derived::Derived;
pub use iter::Outward;

// ============================================================================
// Type aliases
// ============================================================================

/// Inward translation: outward value → stored value.
pub type TranslateIn<C, O> = dyn Fn(&O) -> <C as Collection>::Item + Send + Sync;

/// Outward translation: stored value → outward value.
pub type TranslateOut<C, O> = dyn Fn(&<C as Collection>::Item) -> O + Send + Sync;

/// Event type delivered by a wrapper over `C`.
pub type WrapperEvent<C> = ChangeEvent<<C as Collection>::Key, <C as Collection>::Item>;

static NEXT_WRAPPER_ID: AtomicU64 = AtomicU64::new(1);

fn next_wrapper_id() -> WrapperId {
    WrapperId(NEXT_WRAPPER_ID.fetch_add(1, Ordering::Relaxed))
}

/// Position of the first stored element that `translate_in` changes.
pub(crate) fn first_nonconforming<C: Collection>(
    collection: &C,
    translate_in: &TranslateIn<C, C::Item>,
) -> Option<usize> {
    collection
        .iter()
        .position(|stored| translate_in(stored) != *stored)
}

// ============================================================================
// TranslatedCollection
// ============================================================================

/// Presents the elements of `C` through a pair of translation functions.
///
/// The wrapper owns `C`; copies made with [`Clone`] or
/// [`duplicate`](Self::duplicate) own an independent copy and share the
/// translation functions.
pub struct TranslatedCollection<C: Collection, O> {
    id: WrapperId,
    collection: C,
    translate_in: Arc<TranslateIn<C, O>>,
    translate_out: Arc<TranslateOut<C, O>>,
    observers: ObserverList<TranslatedCollection<C, O>, WrapperEvent<C>>,
    wrap_results: bool,
    frozen: bool,
}

impl<C: Collection, O> TranslatedCollection<C, O> {
    /// Wrap `collection` without a conformance check, wrapping derived results.
    pub fn new(
        collection: C,
        translate_in: impl Fn(&O) -> C::Item + Send + Sync + 'static,
        translate_out: impl Fn(&C::Item) -> O + Send + Sync + 'static,
    ) -> Self {
        Self::from_parts(
            collection,
            Arc::new(translate_in),
            Arc::new(translate_out),
            WrapperOptions::default().wrap_results,
        )
    }

    pub(crate) fn from_parts(
        collection: C,
        translate_in: Arc<TranslateIn<C, O>>,
        translate_out: Arc<TranslateOut<C, O>>,
        wrap_results: bool,
    ) -> Self {
        Self {
            id: next_wrapper_id(),
            collection,
            translate_in,
            translate_out,
            observers: ObserverList::new(),
            wrap_results,
            frozen: false,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Identity of this wrapper instance.
    pub fn id(&self) -> WrapperId {
        self.id
    }

    /// The underlying collection, holding stored values.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Mutable access to the underlying collection. Bypasses translation and
    /// notification; fails once the wrapper is frozen.
    pub fn collection_mut(&mut self) -> Result<&mut C> {
        self.ensure_mutable("borrow collection mutably")?;
        Ok(&mut self.collection)
    }

    pub fn into_inner(self) -> C {
        self.collection
    }

    /// Whether derived operations return a wrapped collection.
    pub fn wrap_results(&self) -> bool {
        self.wrap_results
    }

    pub fn set_wrap_results(&mut self, wrap_results: bool) {
        self.wrap_results = wrap_results;
    }

    /// Apply the inward translation to `value`.
    pub fn translate_in(&self, value: &O) -> C::Item {
        (self.translate_in)(value)
    }

    /// Apply the outward translation to `stored`.
    pub fn translate_out(&self, stored: &C::Item) -> O {
        (self.translate_out)(stored)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Lazy iterator of outward values in the collection's natural order.
    /// Call again to restart.
    pub fn iter(&self) -> Outward<'_, C, O> {
        Outward::new(self.collection.iter(), &*self.translate_out)
    }

    /// Every element, translated outward.
    pub fn to_vec(&self) -> Vec<O> {
        self.iter().collect()
    }

    pub fn first(&self) -> Option<O> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<O> {
        self.collection.iter().last().map(|s| self.translate_out(s))
    }

    /// Whether some element's outward form equals `value`.
    pub fn contains(&self, value: &O) -> bool
    where
        O: PartialEq,
    {
        self.iter().any(|o| o == *value)
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register an observer; it receives this wrapper and each change event.
    pub fn add_observer(
        &self,
        observer: impl Fn(&Self, &WrapperEvent<C>) -> std::result::Result<(), ObserverError>
            + Send
            + Sync
            + 'static,
    ) -> ObserverId {
        self.observers.add(observer)
    }

    /// Stop delivering events to `id`. Returns whether it was registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, event: WrapperEvent<C>) -> Result<()> {
        tracing::trace!(wrapper = self.id.get(), kind = ?event.kind(), "collection changed");
        self.observers.notify(self, &event)?;
        Ok(())
    }

    fn ensure_mutable(&self, operation: &'static str) -> Result<()> {
        if self.frozen {
            return Err(ImmutabilityError::new(operation).into());
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Translate `value` inward and append it. Fires [`ChangeEvent::Push`].
    pub fn append(&mut self, value: O) -> Result<&mut Self> {
        self.ensure_mutable("append")?;
        let stored = self.translate_in(&value);
        self.collection.append(stored.clone());
        self.notify(ChangeEvent::Push(stored))?;
        Ok(self)
    }

    /// Alias for [`append`](Self::append).
    pub fn push(&mut self, value: O) -> Result<&mut Self> {
        self.append(value)
    }

    /// Translate each value inward and append it. Fires a single
    /// [`ChangeEvent::Misc`] when at least one value was appended.
    pub fn extend<I>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = O>,
    {
        self.ensure_mutable("extend")?;
        let mut appended = 0usize;
        for value in values {
            let stored = (self.translate_in)(&value);
            self.collection.append(stored);
            appended += 1;
        }
        if appended > 0 {
            self.notify(ChangeEvent::Misc)?;
        }
        Ok(self)
    }

    /// Remove by stored equality after translating `value` inward.
    /// Fires [`ChangeEvent::Delete`] only if something was removed.
    pub fn remove_value(&mut self, value: &O) -> Result<Option<C::Item>> {
        self.ensure_mutable("remove value")?;
        let stored = self.translate_in(value);
        let removed = self.collection.remove_value(&stored);
        if let Some(removed) = &removed {
            self.notify(ChangeEvent::Delete(removed.clone()))?;
        }
        Ok(removed)
    }

    /// Remove and return the last element, translated outward. Fires
    /// [`ChangeEvent::Pop`]; an empty collection returns `None` silently.
    pub fn pop_last(&mut self) -> Result<Option<O>> {
        self.ensure_mutable("pop")?;
        let Some(stored) = self.collection.pop_last() else {
            return Ok(None);
        };
        let outward = self.translate_out(&stored);
        self.notify(ChangeEvent::Pop(vec![stored]))?;
        Ok(Some(outward))
    }

    /// Remove up to `count` elements from the end and return them, translated
    /// outward, in collection order. Fires one [`ChangeEvent::Pop`] for the
    /// whole batch. An empty collection returns `None` silently; a `count` of
    /// zero removes nothing and returns an empty batch without notifying.
    pub fn pop_last_n(&mut self, count: usize) -> Result<Option<Vec<O>>> {
        self.ensure_mutable("pop")?;
        if self.collection.is_empty() {
            return Ok(None);
        }
        let mut popped = Vec::with_capacity(count.min(self.collection.len()));
        while popped.len() < count {
            match self.collection.pop_last() {
                Some(stored) => popped.push(stored),
                None => break,
            }
        }
        if popped.is_empty() {
            return Ok(Some(Vec::new()));
        }
        popped.reverse();
        let outward = popped.iter().map(|s| self.translate_out(s)).collect();
        self.notify(ChangeEvent::Pop(popped))?;
        Ok(Some(outward))
    }

    /// Empty the collection. Always fires [`ChangeEvent::Clear`].
    pub fn clear(&mut self) -> Result<&mut Self> {
        self.ensure_mutable("clear")?;
        self.collection.clear();
        self.notify(ChangeEvent::Clear)?;
        Ok(self)
    }

    /// Remove, in place, every element whose outward form satisfies
    /// `predicate`. Returns `Some(self)` and fires [`ChangeEvent::Misc`] if
    /// anything was removed, `None` otherwise.
    pub fn reject_in_place<P>(&mut self, mut predicate: P) -> Result<Option<&mut Self>>
    where
        P: FnMut(&O) -> bool,
    {
        self.ensure_mutable("reject in place")?;
        let before = self.collection.len();
        let out = &self.translate_out;
        self.collection.retain(|s| !predicate(&out(s)));
        if self.collection.len() == before {
            return Ok(None);
        }
        self.notify(ChangeEvent::Misc)?;
        Ok(Some(self))
    }

    // -----------------------------------------------------------------------
    // Copying and freezing
    // -----------------------------------------------------------------------

    /// Mark the wrapper and its collection immutable. Every later mutating
    /// call fails with [`ImmutabilityError`].
    pub fn freeze(&mut self) -> &mut Self {
        self.frozen = true;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Copy around an independent duplicate of the collection. Never frozen,
    /// starts with no observers.
    pub fn duplicate(&self) -> Self
    where
        C: Clone,
    {
        Self::from_parts(
            self.collection.clone(),
            Arc::clone(&self.translate_in),
            Arc::clone(&self.translate_out),
            self.wrap_results,
        )
    }
}

// ============================================================================
// Keyed access
// ============================================================================

impl<C: Indexed, O> TranslatedCollection<C, O> {
    /// Element under `key`, translated outward.
    pub fn get(&self, key: &C::Key) -> Option<O> {
        self.collection.get(key).map(|s| self.translate_out(s))
    }

    /// Element under `key`, translated outward. A miss fails with the
    /// collection's [`LookupError`](crate::LookupError): `IndexOutOfBounds` for sequences,
    /// `MissingKey` for keyed collections.
    pub fn fetch(&self, key: &C::Key) -> Result<O> {
        match self.collection.get(key) {
            Some(stored) => Ok(self.translate_out(stored)),
            None => Err(self.collection.lookup_error(key).into()),
        }
    }

    /// Element under `key`, or the stored-form `default`; either is translated
    /// outward.
    pub fn fetch_or(&self, key: &C::Key, default: C::Item) -> O {
        match self.collection.get(key) {
            Some(stored) => self.translate_out(stored),
            None => self.translate_out(&default),
        }
    }

    /// Like [`fetch_or`](Self::fetch_or) with a lazily computed default.
    pub fn fetch_or_else<F>(&self, key: &C::Key, default: F) -> O
    where
        F: FnOnce(&C::Key) -> C::Item,
    {
        match self.collection.get(key) {
            Some(stored) => self.translate_out(stored),
            None => self.translate_out(&default(key)),
        }
    }

    /// Translate `value` inward and store it under `key`. Fires
    /// [`ChangeEvent::Set`] and returns the stored value.
    pub fn set(&mut self, key: C::Key, value: O) -> Result<C::Item> {
        self.ensure_mutable("set")?;
        let stored = self.translate_in(&value);
        self.collection.set(key.clone(), stored.clone())?;
        self.notify(ChangeEvent::Set {
            key,
            value: stored.clone(),
        })?;
        Ok(stored)
    }

    /// Remove the element under `key`. Fires [`ChangeEvent::Delete`] only if
    /// an element was there.
    pub fn remove_at(&mut self, key: &C::Key) -> Result<Option<C::Item>> {
        self.ensure_mutable("remove at")?;
        let removed = self.collection.remove_at(key);
        if let Some(removed) = &removed {
            self.notify(ChangeEvent::Delete(removed.clone()))?;
        }
        Ok(removed)
    }
}

// ============================================================================
// Conformance (stored and outward types coincide)
// ============================================================================

impl<C: Collection> TranslatedCollection<C, C::Item> {
    /// Wrap `collection` with explicit [`WrapperOptions`], checking
    /// conformance first when requested.
    pub fn with_options(
        collection: C,
        translate_in: impl Fn(&C::Item) -> C::Item + Send + Sync + 'static,
        translate_out: impl Fn(&C::Item) -> C::Item + Send + Sync + 'static,
        options: WrapperOptions,
    ) -> Result<Self> {
        builder::wrap(collection)
            .translations(translate_in, translate_out)
            .options(options)
            .build()
    }

    /// Whether every stored element is a fixed point of `translate_in`.
    pub fn is_conforming(&self) -> bool {
        first_nonconforming(&self.collection, &*self.translate_in).is_none()
    }

    /// Rewrite every stored element through `translate_in`, keeping order and
    /// the collection's concrete type. No-op when already conforming;
    /// otherwise fires a single [`ChangeEvent::Misc`].
    pub fn make_conforming(&mut self) -> Result<()> {
        self.ensure_mutable("make conforming")?;
        if self.is_conforming() {
            return Ok(());
        }
        let translated: Vec<C::Item> = self
            .collection
            .iter()
            .map(|stored| (self.translate_in)(stored))
            .collect();
        tracing::debug!(
            wrapper = self.id.get(),
            elements = translated.len(),
            "rewriting collection to conform"
        );
        self.collection.clear();
        for stored in translated {
            self.collection.append(stored);
        }
        self.notify(ChangeEvent::Misc)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

/// Copies propagate the frozen state; see [`duplicate`](TranslatedCollection::duplicate)
/// for a copy that never does.
impl<C: Collection + Clone, O> Clone for TranslatedCollection<C, O> {
    fn clone(&self) -> Self {
        let mut copy = self.duplicate();
        copy.frozen = self.frozen;
        copy
    }
}

impl<C: Collection, O> Capabilities for TranslatedCollection<C, O> {
    fn capabilities(&self) -> &'static [Capability] {
        C::CAPABILITIES
    }

    fn is_translated(&self) -> bool {
        true
    }
}

impl<C: Collection + OrderedSequence, O> OrderedSequence for TranslatedCollection<C, O> {}

impl<C: Collection + UniqueSet, O> UniqueSet for TranslatedCollection<C, O> {}

impl<'a, C: Collection, O> IntoIterator for &'a TranslatedCollection<C, O> {
    type Item = O;
    type IntoIter = Outward<'a, C, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Collection + fmt::Debug, O> fmt::Debug for TranslatedCollection<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatedCollection")
            .field("id", &self.id)
            .field("collection", &self.collection)
            .field("observers", &self.observers)
            .field("wrap_results", &self.wrap_results)
            .field("frozen", &self.frozen)
            .finish()
    }
}
