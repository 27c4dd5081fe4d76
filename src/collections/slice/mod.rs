//! Searching, splicing and sorting over `[T]`.
//!
//! None of the splicing functions modify their input; they return a newly allocated [`Vec`].
//! Positional arguments are validated before anything is copied, with failures reported through
//! [`RangeError`].

mod error;
mod search;
mod sort;
mod splice;

pub use error::*;
pub use search::*;
pub use sort::*;
pub use splice::*;

pub(crate) use splice::{check_cut, check_delete, check_expand, join, splice_in};
