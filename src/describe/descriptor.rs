//! On-demand type descriptors
//!
//! [`describe`] inspects a value's type and returns a [`TypeDescriptor`]
//! holding its short display name, its in-memory footprint, and its storage
//! model. Descriptors are computed per call and never cached.
//!
//! [`identity_equals`] is the companion alias test: it compares instance
//! addresses, not contents.

use std::fmt;
use std::mem;

use crate::describe::semantics::{Category, Semantics};

/// Name, size, and storage model of one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Short type name with module paths stripped, e.g. `Rc<i32>`
    pub display_name: String,
    /// Size of one binding of the type: the inline footprint for value
    /// types, the handle for reference types
    pub byte_size: usize,
    /// Storage model
    pub category: Category,
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, {})",
            self.display_name, self.byte_size, self.category
        )
    }
}

/// Describe the type of `value`
///
/// Pure and stateless; the value is only used to drive type inference.
pub fn describe<T: Semantics>(_value: &T) -> TypeDescriptor {
    descriptor_of::<T>()
}

/// Describe a type without a value in hand
pub fn descriptor_of<T: Semantics>() -> TypeDescriptor {
    TypeDescriptor {
        display_name: short_type_name::<T>(),
        byte_size: mem::size_of::<T>(),
        category: T::CATEGORY,
    }
}

/// Alias test: true iff `a` and `b` denote the same underlying instance
///
/// Meaningful for reference-semantics types. For value-semantics types the
/// operands are distinct bindings, so the result is always false; this is
/// not a structural-equality check.
pub fn identity_equals<T: Semantics>(a: &T, b: &T) -> bool {
    a.instance_addr() == b.instance_addr()
}

/// Strip module paths from a type name, inside generic arguments too
///
/// `alloc::rc::Rc<core::option::Option<i32>>` becomes `Rc<Option<i32>>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            // "::" clears the pending segment twice, which is harmless
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '&' | '[' | ']' | ';' | '(' | ')' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}
