//! Fluent builder for [`TranslatedCollection`].
//!
//! ```
//! use translated_collection::wrap;
//!
//! let wrapper = wrap(vec!["a".to_string(), "b".to_string()])
//!     .translations(|s: &String| s.to_lowercase(), |s: &String| s.to_uppercase())
//!     .check_conformance()
//!     .build()
//!     .unwrap();
//! assert_eq!(wrapper.get(&0).as_deref(), Some("A"));
//! ```
//!
//! The conformance check is only offered when stored and outward values share
//! a type, since it feeds stored values to the inward translation.

use std::sync::Arc;

use crate::{
    collection::Collection,
    error::{ConstructionError, RejectedCollection, Result},
    types::WrapperOptions,
};

use super::{first_nonconforming, TranslateIn, TranslateOut, TranslatedCollection};

/// Start building a wrapper around `collection`.
pub fn wrap<C: Collection>(collection: C) -> TranslatedCollectionBuilder<C> {
    TranslatedCollectionBuilder { collection }
}

// ============================================================================
// Builder — No Translations Yet
// ============================================================================

/// Initial builder — awaiting the translation pair.
pub struct TranslatedCollectionBuilder<C: Collection> {
    collection: C,
}

impl<C: Collection> TranslatedCollectionBuilder<C> {
    pub fn translations<O>(
        self,
        translate_in: impl Fn(&O) -> C::Item + Send + Sync + 'static,
        translate_out: impl Fn(&C::Item) -> O + Send + Sync + 'static,
    ) -> BuilderWithTranslations<C, O> {
        BuilderWithTranslations {
            collection: self.collection,
            translate_in: Arc::new(translate_in),
            translate_out: Arc::new(translate_out),
            wrap_results: WrapperOptions::default().wrap_results,
        }
    }
}

// ============================================================================
// Builder — With Translations
// ============================================================================

/// Builder after the translation pair has been supplied.
pub struct BuilderWithTranslations<C: Collection, O> {
    collection: C,
    translate_in: Arc<TranslateIn<C, O>>,
    translate_out: Arc<TranslateOut<C, O>>,
    wrap_results: bool,
}

impl<C: Collection, O> BuilderWithTranslations<C, O> {
    /// Whether derived operations return wrapped results. Default: `true`.
    pub fn wrap_results(mut self, wrap_results: bool) -> Self {
        self.wrap_results = wrap_results;
        self
    }

    pub fn build(self) -> TranslatedCollection<C, O> {
        TranslatedCollection::from_parts(
            self.collection,
            self.translate_in,
            self.translate_out,
            self.wrap_results,
        )
    }
}

impl<C: Collection> BuilderWithTranslations<C, C::Item> {
    /// Require the collection to be conforming at build time.
    pub fn check_conformance(self) -> CheckedBuilder<C> {
        CheckedBuilder { inner: self }
    }

    /// Apply every field of `options`.
    pub fn options(self, options: WrapperOptions) -> OptionsBuilder<C> {
        OptionsBuilder {
            inner: self.wrap_results(options.wrap_results),
            check_conformance: options.check_conformance,
        }
    }
}

// ============================================================================
// Builder — Conformance Checked
// ============================================================================

/// Builder whose `build()` rejects non-conforming collections.
pub struct CheckedBuilder<C: Collection> {
    inner: BuilderWithTranslations<C, C::Item>,
}

impl<C: Collection> CheckedBuilder<C> {
    pub fn wrap_results(self, wrap_results: bool) -> Self {
        Self {
            inner: self.inner.wrap_results(wrap_results),
        }
    }

    /// Fails with [`ConstructionError`] if some element is not a fixed
    /// point of the inward translation. An empty collection always passes.
    pub fn build(self) -> Result<TranslatedCollection<C, C::Item>> {
        Ok(self.try_build()?)
    }

    /// Like [`build`](Self::build), but a rejection hands the collection
    /// back through [`RejectedCollection::into_inner`].
    pub fn try_build(
        self,
    ) -> std::result::Result<TranslatedCollection<C, C::Item>, RejectedCollection<C>> {
        let inner = self.inner;
        if let Some(position) = first_nonconforming(&inner.collection, &*inner.translate_in) {
            tracing::debug!(position, "rejecting non-conforming collection");
            return Err(RejectedCollection::new(
                ConstructionError { position },
                inner.collection,
            ));
        }
        Ok(inner.build())
    }
}

/// Builder configured from a [`WrapperOptions`] value.
pub struct OptionsBuilder<C: Collection> {
    inner: BuilderWithTranslations<C, C::Item>,
    check_conformance: bool,
}

impl<C: Collection> OptionsBuilder<C> {
    pub fn build(self) -> Result<TranslatedCollection<C, C::Item>> {
        if self.check_conformance {
            CheckedBuilder { inner: self.inner }.build()
        } else {
            Ok(self.inner.build())
        }
    }
}
