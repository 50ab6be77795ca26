//! Translating proxy over ordered and set-like collections.
//!
//! A [`TranslatedCollection`] keeps elements in a canonical *stored* encoding
//! while callers read and write an *outward* presentation encoding. Reads pass
//! through `translate_out`, writes through `translate_in`, and every
//! completed mutation is announced to registered observers.
//!
//! ```
//! use translated_collection::{ChangeEvent, TranslatedCollection};
//!
//! let mut names = TranslatedCollection::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     |s: &String| s.to_lowercase(),
//!     |s: &String| s.to_uppercase(),
//! );
//! assert_eq!(names.get(&0).as_deref(), Some("A"));
//!
//! names.add_observer(|_, event| {
//!     assert_eq!(event, &ChangeEvent::Push("c".to_string()));
//!     Ok(())
//! });
//! names.append("C".to_string()).unwrap();
//! assert_eq!(names.collection(), &vec!["a", "b", "c"]);
//! ```

pub mod error;
pub mod types;

pub mod collection;
pub mod observer;
pub mod wrapper;

pub use collection::{Capabilities, Collection, Indexed, OrderedSequence, UniqueSet};
pub use error::{
    ConstructionError, ImmutabilityError, LookupError, ObserverError, RejectedCollection, Result,
    TranslatedCollectionError,
};
pub use observer::{ChangeEvent, ChangeKind, ObserverId};
pub use types::{Capability, WrapperId, WrapperOptions};
pub use wrapper::{builder::wrap, Derived, Outward, TranslatedCollection};
