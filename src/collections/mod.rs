//! Statically typed collection operations.
//!
//! # Method
//! Everything here works on borrowed slices and hands back freshly allocated [`Vec`]s or
//! [`HashSet`](std::collections::HashSet)s, so the caller keeps ownership of its input the whole
//! time.

#[cfg(feature = "set")]
pub mod set;
#[cfg(feature = "slice")]
pub mod slice;
