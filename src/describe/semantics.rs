//! Storage-model classification
//!
//! This module defines the [`Semantics`] trait, which classifies a type's
//! storage model at compile time. Unlike reflection-based runtimes, the
//! classification is part of the type, not discovered at runtime.
//!
//! # Categories
//!
//! - [`Category::Value`]: copying yields an independent instance
//! - [`Category::Reference`]: duplicating the handle yields an alias
//!
//! # Instance Identity
//!
//! Each implementation also supplies an instance address used by alias
//! tests. Value types report the address of the binding itself, so two
//! bindings are never identical. Handle types report the pointee address,
//! so clones of one allocation are identical.

use std::rc::Rc;
use std::sync::Arc;

/// Storage model of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Copy produces an independent instance
    Value,
    /// Copy produces an alias of the same instance
    Reference,
}

impl Category {
    pub fn is_value(&self) -> bool {
        matches!(self, Category::Value)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Category::Reference)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Value => write!(f, "value semantics"),
            Category::Reference => write!(f, "reference semantics"),
        }
    }
}

/// Compile-time storage-model classification
///
/// Implementations state whether copying a value of the type produces an
/// independent instance or an alias, and expose an address identifying the
/// underlying instance for alias tests.
pub trait Semantics {
    /// Storage model of the type
    const CATEGORY: Category;

    /// Address identifying the underlying instance
    ///
    /// For value types this is the address of the binding itself; distinct
    /// bindings (including copies) therefore report distinct addresses.
    fn instance_addr(&self) -> usize
    where
        Self: Sized,
    {
        self as *const Self as usize
    }
}

macro_rules! value_semantics {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semantics for $t {
                const CATEGORY: Category = Category::Value;
            }
        )*
    };
}

value_semantics!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
);

impl<T> Semantics for Vec<T> {
    const CATEGORY: Category = Category::Value;
}

impl<T> Semantics for std::collections::VecDeque<T> {
    const CATEGORY: Category = Category::Value;
}

impl<T, const N: usize> Semantics for [T; N] {
    const CATEGORY: Category = Category::Value;
}

impl<T> Semantics for Option<T> {
    const CATEGORY: Category = Category::Value;
}

// Box clones its pointee, so copies are independent instances.
impl<T> Semantics for Box<T> {
    const CATEGORY: Category = Category::Value;
}

impl<T> Semantics for Rc<T> {
    const CATEGORY: Category = Category::Reference;

    fn instance_addr(&self) -> usize {
        Rc::as_ptr(self) as usize
    }
}

impl<T> Semantics for Arc<T> {
    const CATEGORY: Category = Category::Reference;

    fn instance_addr(&self) -> usize {
        Arc::as_ptr(self) as usize
    }
}

impl<T> Semantics for &T {
    const CATEGORY: Category = Category::Reference;

    fn instance_addr(&self) -> usize {
        *self as *const T as usize
    }
}

impl Semantics for &str {
    const CATEGORY: Category = Category::Reference;

    fn instance_addr(&self) -> usize {
        self.as_ptr() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_value_semantics() {
        assert_eq!(i32::CATEGORY, Category::Value);
        assert_eq!(f64::CATEGORY, Category::Value);
        assert_eq!(bool::CATEGORY, Category::Value);
        assert_eq!(String::CATEGORY, Category::Value);
    }

    #[test]
    fn handles_are_reference_semantics() {
        assert_eq!(<Rc<i32>>::CATEGORY, Category::Reference);
        assert_eq!(<Arc<String>>::CATEGORY, Category::Reference);
        assert_eq!(<&i32>::CATEGORY, Category::Reference);
    }

    #[test]
    fn rc_clones_share_an_instance_addr() {
        let a = Rc::new(42);
        let b = Rc::clone(&a);
        assert_eq!(a.instance_addr(), b.instance_addr());

        let c = Rc::new(42);
        assert_ne!(a.instance_addr(), c.instance_addr());
    }

    #[test]
    fn value_copies_have_distinct_addrs() {
        let x = 5i32;
        let y = x;
        assert_ne!(x.instance_addr(), y.instance_addr());
    }
}
