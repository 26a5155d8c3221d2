//! viewprint-var - non-owning byte views
//!
//! A [`View`] describes bytes that live somewhere else: a buffer, a scalar, an
//! array, a [`Data`] or the bytes of a string. It never allocates or copies.
//!
//! Write capability is part of the type. [`View`] can only read, [`ViewMut`]
//! can also write, and narrowing from the latter to the former is the only
//! conversion offered. [`Reference`] carries the capability as a run-time tag
//! for callers that only learn it dynamically.
//!
//! # Example
//!
//! ```
//! use viewprint_var::{ByteView, SwapBy, View, ViewMut};
//!
//! let mut words = [0u32; 4];
//! let mut view = ViewMut::from_slice_mut(&mut words);
//! view.fill(0x1122_3344u32).swap_byte_order(SwapBy::Word);
//!
//! // Indexing wraps around: position 6 aliases position 2.
//! assert_eq!(view.at::<u32>(6), Some(0x4433_2211));
//!
//! let read_only: View = view.as_view();
//! assert!(read_only.is_read_only());
//! ```

mod access;
mod data;
pub mod error;
pub mod plain;
mod reference;
mod view;

pub use access::ByteView;
pub use data::Data;
pub use error::{Error, Result};
pub use plain::Plain;
pub use reference::Reference;
pub use view::{SwapBy, View, ViewMut};
