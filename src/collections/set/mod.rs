//! Deduplication and union of slices.
//!
//! Sets are represented with the standard [`HashSet`](std::collections::HashSet), so element
//! types need [`Hash`] and [`Eq`]. Hashing is only ever used to find duplicates; equality is what
//! decides them.

mod set;

pub use set::*;
