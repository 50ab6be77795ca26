//! Outward<'a, C, O> — lazy outward-translating iterator.
//!
//! Pulling from an `Outward` is a pure read: it never notifies observers.

use std::fmt;
use std::iter::FusedIterator;

use crate::collection::Collection;

use super::TranslateOut;

/// Iterator over the outward form of a collection's elements.
///
/// Returned by [`TranslatedCollection::iter`](super::TranslatedCollection::iter).
/// Cloning yields an independent cursor at the same position.
pub struct Outward<'a, C: Collection + 'a, O> {
    inner: C::Iter<'a>,
    translate_out: &'a TranslateOut<C, O>,
}

impl<'a, C: Collection + 'a, O> Outward<'a, C, O> {
    pub(crate) fn new(inner: C::Iter<'a>, translate_out: &'a TranslateOut<C, O>) -> Self {
        Self {
            inner,
            translate_out,
        }
    }
}

impl<'a, C: Collection + 'a, O> Iterator for Outward<'a, C, O> {
    type Item = O;

    fn next(&mut self) -> Option<O> {
        self.inner.next().map(|stored| (self.translate_out)(stored))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, C, O> DoubleEndedIterator for Outward<'a, C, O>
where
    C: Collection + 'a,
    C::Iter<'a>: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<O> {
        self.inner.next_back().map(|stored| (self.translate_out)(stored))
    }
}

impl<'a, C, O> ExactSizeIterator for Outward<'a, C, O>
where
    C: Collection + 'a,
    C::Iter<'a>: ExactSizeIterator,
{
}

impl<'a, C, O> FusedIterator for Outward<'a, C, O>
where
    C: Collection + 'a,
    C::Iter<'a>: FusedIterator,
{
}

impl<'a, C: Collection + 'a, O> Clone for Outward<'a, C, O> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            translate_out: self.translate_out,
        }
    }
}

impl<'a, C: Collection + 'a, O> fmt::Debug for Outward<'a, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outward")
            .field("remaining", &self.inner.size_hint())
            .finish()
    }
}
