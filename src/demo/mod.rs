//! Example types for the demo binaries
//!
//! These are the subjects the demos introspect, not part of the
//! introspection core:
//! - [`points`]: `Point4D` (value-semantics aggregate with a timestamp
//!   coordinate) and `PointN<T>` (generic, iterable coordinate container)
//! - [`stats`]: `Stats<T>` generic statistics over an `Arithmetic` bound

pub mod points;
pub mod stats;
