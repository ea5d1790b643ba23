//! Registered-type-metadata table
//!
//! Storage-model classification is compile time ([`Semantics`]), but one
//! demo wants to enumerate "all the types we have met" at runtime. The
//! [`TypeRegistry`] is that explicit table: descriptors registered under
//! their display names, retrievable by name or as a sorted listing.

use rustc_hash::FxHashMap;

use crate::describe::descriptor::{descriptor_of, TypeDescriptor};
use crate::describe::semantics::Semantics;

/// Display name → descriptor table
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: FxHashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry {
            entries: FxHashMap::default(),
        }
    }

    /// Register `T`, replacing any previous descriptor under the same name
    pub fn register<T: Semantics>(&mut self) {
        let descriptor = descriptor_of::<T>();
        self.entries.insert(descriptor.display_name.clone(), descriptor);
    }

    /// Look up a descriptor by display name
    pub fn lookup(&self, display_name: &str) -> Option<&TypeDescriptor> {
        self.entries.get(display_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors sorted by display name, for stable table dumps
    pub fn sorted(&self) -> Vec<&TypeDescriptor> {
        let mut all: Vec<&TypeDescriptor> = self.entries.values().collect();
        all.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::semantics::Category;
    use std::rc::Rc;

    #[test]
    fn register_then_lookup() {
        let mut reg = TypeRegistry::new();
        reg.register::<i32>();
        reg.register::<Rc<String>>();

        let d = reg.lookup("i32").expect("i32 registered");
        assert_eq!(d.byte_size, 4);
        assert_eq!(d.category, Category::Value);

        let d = reg.lookup("Rc<String>").expect("Rc<String> registered");
        assert_eq!(d.category, Category::Reference);

        assert!(reg.lookup("f32").is_none());
    }

    #[test]
    fn re_registration_is_idempotent() {
        let mut reg = TypeRegistry::new();
        reg.register::<bool>();
        reg.register::<bool>();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn sorted_listing_is_ordered_by_name() {
        let mut reg = TypeRegistry::new();
        reg.register::<u8>();
        reg.register::<char>();
        reg.register::<f64>();

        let names: Vec<&str> = reg
            .sorted()
            .iter()
            .map(|d| d.display_name.as_str())
            .collect();
        assert_eq!(names, ["char", "f64", "u8"]);
    }
}
