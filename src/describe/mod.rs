//! Type introspection core
//!
//! This module provides the introspection abstractions:
//! - [`semantics`]: storage-model classification ([`Category`], [`Semantics`])
//! - [`descriptor`]: on-demand type descriptors ([`describe`], [`identity_equals`])
//! - [`fold`]: row-folded sequence rendering ([`fold`], [`FoldedRendering`])
//! - [`registry`]: explicit metadata table for runtime enumeration
//!
//! # Reported Sizes
//!
//! Sizes are `std::mem::size_of` of the binding itself, so they follow the
//! host platform rather than a fixed pedagogical table:
//! - `i32`: 4 bytes
//! - `String`: 24 bytes on 64-bit targets (pointer, length, capacity)
//! - `Rc<T>`: 8 bytes (the handle, never the pointee)
//!
//! # Identity
//!
//! [`identity_equals`] is an alias test, not structural equality.  Two `Rc`
//! clones of one allocation are identical; two independently constructed
//! values never are, even when their contents match.

pub mod descriptor;
pub mod fold;
pub mod registry;
pub mod semantics;

pub use descriptor::{describe, descriptor_of, identity_equals, TypeDescriptor};
pub use fold::{fold, Describable, FoldedRendering};
pub use registry::TypeRegistry;
pub use semantics::{Category, Semantics};
