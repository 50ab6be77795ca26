//! [`Collection`] implementations for the standard containers.
//!
//! Calls into the containers are fully qualified (`Vec::len(self)`) because
//! the trait methods share their names with inherent and slice methods.

use std::collections::{btree_set, hash_set, vec_deque, BTreeSet, HashSet, VecDeque};
use std::convert::Infallible;
use std::hash::Hash;

use super::{Capabilities, Collection, Indexed, OrderedSequence, UniqueSet};
use crate::error::LookupError;
use crate::types::Capability;

const SEQUENCE_CAPABILITIES: &[Capability] = &[Capability::OrderedSequence, Capability::Indexed];
const SET_CAPABILITIES: &[Capability] = &[Capability::UniqueSet];

// ============================================================================
// Vec
// ============================================================================

impl<T: Clone + PartialEq> Collection for Vec<T> {
    type Item = T;
    type Key = usize;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    const CAPABILITIES: &'static [Capability] = SEQUENCE_CAPABILITIES;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn append(&mut self, item: T) {
        Vec::push(self, item);
    }

    /// Removes every element equal to `item`; returns the first one removed.
    fn remove_value(&mut self, item: &T) -> Option<T> {
        let pos = <[T]>::iter(self).position(|x| x == item)?;
        let removed = Vec::remove(self, pos);
        Vec::retain(self, |x| x != item);
        Some(removed)
    }

    fn pop_last(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        Vec::retain(self, keep);
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T: Clone + PartialEq> Indexed for Vec<T> {
    fn get(&self, index: &usize) -> Option<&T> {
        <[T]>::get(self, *index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), LookupError> {
        let len = Vec::len(self);
        match index {
            i if i < len => {
                self[i] = item;
                Ok(())
            }
            i if i == len => {
                Vec::push(self, item);
                Ok(())
            }
            _ => Err(LookupError::IndexOutOfBounds { index, len }),
        }
    }

    fn remove_at(&mut self, index: &usize) -> Option<T> {
        if *index < Vec::len(self) {
            Some(Vec::remove(self, *index))
        } else {
            None
        }
    }

    fn lookup_error(&self, index: &usize) -> LookupError {
        LookupError::IndexOutOfBounds {
            index: *index,
            len: Vec::len(self),
        }
    }
}

impl<T: Clone + PartialEq> OrderedSequence for Vec<T> {}

impl<T: Clone + PartialEq> Capabilities for Vec<T> {
    fn capabilities(&self) -> &'static [Capability] {
        <Self as Collection>::CAPABILITIES
    }
}

// ============================================================================
// VecDeque
// ============================================================================

impl<T: Clone + PartialEq> Collection for VecDeque<T> {
    type Item = T;
    type Key = usize;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    const CAPABILITIES: &'static [Capability] = SEQUENCE_CAPABILITIES;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn append(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    /// Removes every element equal to `item`; returns the first one removed.
    fn remove_value(&mut self, item: &T) -> Option<T> {
        let pos = VecDeque::iter(self).position(|x| x == item)?;
        let removed = VecDeque::remove(self, pos)?;
        VecDeque::retain(self, |x| x != item);
        Some(removed)
    }

    fn pop_last(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        VecDeque::retain(self, keep);
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T: Clone + PartialEq> Indexed for VecDeque<T> {
    fn get(&self, index: &usize) -> Option<&T> {
        VecDeque::get(self, *index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), LookupError> {
        let len = VecDeque::len(self);
        if let Some(slot) = VecDeque::get_mut(self, index) {
            *slot = item;
            Ok(())
        } else if index == len {
            VecDeque::push_back(self, item);
            Ok(())
        } else {
            Err(LookupError::IndexOutOfBounds { index, len })
        }
    }

    fn remove_at(&mut self, index: &usize) -> Option<T> {
        VecDeque::remove(self, *index)
    }

    fn lookup_error(&self, index: &usize) -> LookupError {
        LookupError::IndexOutOfBounds {
            index: *index,
            len: VecDeque::len(self),
        }
    }
}

impl<T: Clone + PartialEq> OrderedSequence for VecDeque<T> {}

impl<T: Clone + PartialEq> Capabilities for VecDeque<T> {
    fn capabilities(&self) -> &'static [Capability] {
        <Self as Collection>::CAPABILITIES
    }
}

// ============================================================================
// BTreeSet
// ============================================================================

impl<T: Clone + Ord> Collection for BTreeSet<T> {
    type Item = T;
    type Key = Infallible;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        T: 'a;

    const CAPABILITIES: &'static [Capability] = SET_CAPABILITIES;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    fn append(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }

    fn remove_value(&mut self, item: &T) -> Option<T> {
        BTreeSet::take(self, item)
    }

    fn pop_last(&mut self) -> Option<T> {
        BTreeSet::pop_last(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        BTreeSet::retain(self, keep);
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T: Clone + Ord> UniqueSet for BTreeSet<T> {}

impl<T: Clone + Ord> Capabilities for BTreeSet<T> {
    fn capabilities(&self) -> &'static [Capability] {
        <Self as Collection>::CAPABILITIES
    }
}

// ============================================================================
// HashSet
// ============================================================================

impl<T: Clone + Eq + Hash> Collection for HashSet<T> {
    type Item = T;
    type Key = Infallible;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        T: 'a;

    const CAPABILITIES: &'static [Capability] = SET_CAPABILITIES;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn append(&mut self, item: T) {
        HashSet::insert(self, item);
    }

    fn remove_value(&mut self, item: &T) -> Option<T> {
        HashSet::take(self, item)
    }

    /// Hash sets have no end; this removes whichever element iterates first.
    fn pop_last(&mut self) -> Option<T> {
        let item = HashSet::iter(self).next()?.clone();
        HashSet::take(self, &item)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        HashSet::retain(self, keep);
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> UniqueSet for HashSet<T> {}

impl<T: Clone + Eq + Hash> Capabilities for HashSet<T> {
    fn capabilities(&self) -> &'static [Capability] {
        <Self as Collection>::CAPABILITIES
    }
}

// ============================================================================
// Tests
// ============================================================================
