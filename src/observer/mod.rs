//! Change notification — synchronous observer fan-out.
//!
//! # Modules
//!
//! - [`event`] — [`ChangeEvent`] enum and its fieldless [`ChangeKind`].
//! - [`observer_list`] — ordered listener list ([`ObserverList`]).

pub mod event;
pub mod observer_list;

pub use event::{ChangeEvent, ChangeKind};
pub use observer_list::{ObserverFn, ObserverId, ObserverList};
