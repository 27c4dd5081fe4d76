//! A toolkit of slice operations that work whether or not the element type is known at compile
//! time.
//!
//! # Purpose
//! Most of the time, Rust knows exactly what a collection holds and generic functions are the
//! right tool. Sometimes it doesn't, because values arrive from a config file or a scripting layer
//! and the element type is only known at runtime. This crate provides the same
//! handful of operations (searching, cutting, expanding, deduplicating, unifying and sorting) for
//! both cases.
//!
//! # Layout
//! - [`collections::slice`] and [`collections::set`] are the statically typed operations over
//!   `[T]`. Prefer these whenever the element type is known.
//! - [`dynamic`] is a small tagged value model ([`Kind`](dynamic::Kind),
//!   [`Value`](dynamic::Value), [`DynSlice`](dynamic::DynSlice), [`DynFunc`](dynamic::DynFunc))
//!   with runtime-checked versions of the same operations. Element kinds are validated before
//!   anything is touched, so a failed call never leaves a container half modified.
//!
//! # Error Handling
//! Errors are strongly typed: each condition is a struct that implements
//! [`Error`](std::error::Error) and carries the values involved, and each family of operations
//! has an enum over the conditions it can produce. Nothing here panics because of bad input; an
//! out of range index is an [`Err`], not an abort, so the caller gets to decide how fatal it is.
//!
//! # Features
//! - `slice`: searching, splicing and sorting over `[T]`.
//! - `set`: deduplication and union.
//! - `dynamic`: the runtime-typed layer (enables both of the above). Enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "dynamic")]
pub mod dynamic;

pub(crate) mod util;
