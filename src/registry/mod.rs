// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Set-class registry and set-class values.
//!
//! The registry is a read-only name table keyed by prime form. The core
//! never depends on a particular table: callers inject whichever
//! [`SetClassRegistry`] they need, including an empty one.

pub mod forte;
pub mod set_class;
pub mod table;

pub use set_class::SetClass;
pub use table::SetClassTable;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::set::{PitchClassSet, PrimeForm};

/// Name and size of a registered set class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub cardinality: usize,
}

/// Read-only lookup from prime form to set-class name
pub trait SetClassRegistry: Send + Sync {
    /// Find the entry for a prime form, if the table has one
    fn lookup(&self, prime_form: &PrimeForm) -> Option<RegistryEntry>;
}

impl<R: SetClassRegistry + ?Sized> SetClassRegistry for &R {
    fn lookup(&self, prime_form: &PrimeForm) -> Option<RegistryEntry> {
        (**self).lookup(prime_form)
    }
}

impl<R: SetClassRegistry + ?Sized> SetClassRegistry for Box<R> {
    fn lookup(&self, prime_form: &PrimeForm) -> Option<RegistryEntry> {
        (**self).lookup(prime_form)
    }
}

/// Registry with no entries
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl SetClassRegistry for EmptyRegistry {
    fn lookup(&self, _prime_form: &PrimeForm) -> Option<RegistryEntry> {
        None
    }
}

/// Map-backed registry
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<PrimeForm, RegistryEntry>,
}

impl StaticRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with Forte's names
    pub fn forte() -> Self {
        let mut registry = Self::new();
        for (name, pcs, _) in forte::FORTE_TABLE {
            registry.register(*name, PitchClassSet::new(pcs.iter().copied()));
        }
        debug!(entries = registry.len(), "loaded Forte catalogue");
        registry
    }

    /// Name the set class of `set`, replacing any earlier name
    pub fn register(&mut self, name: impl Into<String>, set: PitchClassSet) {
        let prime = PrimeForm::of(set);
        self.entries.insert(
            prime,
            RegistryEntry {
                name: name.into(),
                cardinality: prime.cardinality(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every registered name, sorted by prime form
    pub fn names(&self) -> Vec<(PrimeForm, String)> {
        let mut names: Vec<(PrimeForm, String)> = self
            .entries
            .iter()
            .map(|(prime, entry)| (*prime, entry.name.clone()))
            .collect();
        names.sort();
        names
    }
}

impl SetClassRegistry for StaticRegistry {
    fn lookup(&self, prime_form: &PrimeForm) -> Option<RegistryEntry> {
        self.entries.get(prime_form).cloned()
    }
}

impl SetClassRegistry for HashMap<PrimeForm, RegistryEntry> {
    fn lookup(&self, prime_form: &PrimeForm) -> Option<RegistryEntry> {
        self.get(prime_form).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prime(values: &[i64]) -> PrimeForm {
        PrimeForm::of(PitchClassSet::new(values.iter().copied()))
    }

    #[test]
    fn test_empty_registry() {
        assert_eq!(EmptyRegistry.lookup(&prime(&[0, 4, 8])), None);
    }

    #[test]
    fn test_forte_lookup() {
        let registry = StaticRegistry::forte();
        assert_eq!(registry.len(), 223);

        let entry = registry.lookup(&prime(&[0, 4, 8])).unwrap();
        assert_eq!(entry.name, "3-12");
        assert_eq!(entry.cardinality, 3);

        assert_eq!(registry.lookup(&prime(&[1, 2, 5, 7])).unwrap().name, "4-Z15");
        assert_eq!(registry.lookup(&prime(&[3, 4, 6, 10])).unwrap().name, "4-Z29");
        assert_eq!(registry.lookup(&prime(&[0, 2, 4, 6, 8, 10])).unwrap().name, "6-35");
        assert_eq!(registry.lookup(&prime(&[0, 1, 3, 5, 6, 8, 10])).unwrap().name, "7-35");
        assert_eq!(registry.lookup(&PrimeForm::of(PitchClassSet::AGGREGATE)).unwrap().name, "12-1");
        assert_eq!(registry.lookup(&PrimeForm::default()), None);
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = StaticRegistry::forte();
        registry.register("augmented triad", PitchClassSet::new([1, 5, 9]));
        assert_eq!(registry.len(), 223);
        assert_eq!(registry.lookup(&prime(&[0, 4, 8])).unwrap().name, "augmented triad");
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = StaticRegistry::new();
        registry.register("major/minor triad", PitchClassSet::new([0, 4, 7]));
        registry.register("chromatic trichord", PitchClassSet::new([0, 1, 2]));
        let names = registry.names();
        assert_eq!(names[0].1, "chromatic trichord");
        assert_eq!(names[1].0.to_vec(), vec![0, 3, 7]);
    }

    #[test]
    fn test_hash_map_registry() {
        let mut map = HashMap::new();
        map.insert(prime(&[0, 1]), RegistryEntry { name: "semitone".to_string(), cardinality: 2 });
        assert_eq!(map.lookup(&prime(&[5, 6])).unwrap().name, "semitone");
        let boxed: Box<dyn SetClassRegistry> = Box::new(map);
        assert!(boxed.lookup(&prime(&[0, 2])).is_none());
    }
}
