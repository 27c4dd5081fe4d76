//! Runtime-typed containers and the operations over them.
//!
//! # Purpose
//! Everything in [`collections`](crate::collections) needs the element type at compile time. This
//! module is for the times it isn't available: a [`Value`] carries its own [`Kind`], a
//! [`DynSlice`] carries its element kind, and the free functions here check those kinds before
//! doing anything.
//!
//! # Method
//! Operations take the container as a [`Value`], so handing them something that isn't a slice
//! (or a map, for [`map_keys`]) is an error rather than a type error at compile time. Splicing
//! operations take `i64` positions so that negative positions can be reported as such.
//!
//! Operations that build a new container ([`delete_at`], [`cut`], [`expand`], [`unify`], ...)
//! never modify their input, and the result always has the same element kind as the input.
//! [`sort()`] and [`sort_natural`] are the only operations that work in place.
//!
//! # Examples
//! ```
//! # use slice_kit::dynamic::{self, DynSlice, Kind, Value};
//! let container = Value::Slice(
//!     DynSlice::from_values(Kind::Any, [Value::Int(3), Value::Float(1.5), Value::Uint(2)]).unwrap(),
//! );
//!
//! let mut sorted = container.clone();
//! dynamic::sort_natural(&mut sorted).unwrap();
//! assert_eq!(sorted.as_slice().unwrap()[0], Value::Float(1.5));
//!
//! assert!(dynamic::cut(&container, 2, 1).unwrap_err().is_range());
//! assert!(dynamic::cut(&Value::Int(1), 0, 0).unwrap_err().is_invalid_kind());
//! ```

mod binding;
pub mod compare;
mod error;
mod func;
mod kind;
mod map;
mod ops;
mod slice;
mod sort;
mod value;
mod tests;

pub use binding::*;
pub use error::*;
pub use func::*;
pub use kind::*;
pub use map::*;
pub use ops::*;
pub use slice::*;
pub use sort::*;
pub use value::*;
