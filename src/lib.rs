//! # Introduction
//!
//! typeview is a didactic crate that narrates Rust's type system at the
//! terminal: value vs. reference semantics, generics, iteration protocols,
//! and compile-time type introspection.  The library provides a small
//! introspection and formatting core; four console demos
//! (`data`, `objects`, `generics`, `iteration`) exercise it.
//!
//! ## Display pipeline
//!
//! ```text
//! value → describe → TypeDescriptor  → display
//! items → fold     → FoldedRendering → display
//! ```
//!
//! 1. [`describe`] — the introspection core: [`describe::Semantics`]
//!    classifies a type's storage model at compile time,
//!    [`describe::describe`] builds a [`describe::TypeDescriptor`],
//!    [`describe::fold`] lays sequences out as fixed-width rows, and
//!    [`describe::TypeRegistry`] holds descriptors for runtime enumeration.
//! 2. [`display`] — console presentation helpers: framed labels, notes,
//!    operation markers, and printers for descriptors and renderings.
//! 3. [`demo`] — example types used by the demo binaries:
//!    [`demo::points::Point4D`], [`demo::points::PointN`], and
//!    [`demo::stats::Stats`].
//!
//! ## Semantics in one paragraph
//!
//! A type has *value semantics* when copying it produces an independent
//! instance (primitives, `String`, `Vec`, plain structs), and *reference
//! semantics* when duplicating the handle produces an alias of the same
//! instance (`Rc`, `Arc`, shared references).  Reported sizes are always
//! the size of the named binding itself: the inline footprint for value
//! types, the handle for reference types, never the pointee.

pub mod demo;
pub mod describe;
pub mod display;
