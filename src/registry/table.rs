// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Table of every set class in the 12-tone universe.
//!
//! Built once by canonicalizing all 4096 subsets; afterwards it is a
//! read-only cache shared by batch queries.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::{SetClass, SetClassRegistry};
use crate::error::{require_cardinality, Result};
use crate::set::{PitchClassSet, PrimeForm, MODULUS};

/// All 224 set classes, sorted by cardinality then prime form
#[derive(Debug, Clone)]
pub struct SetClassTable {
    classes: Vec<SetClass>,
    index: HashMap<PrimeForm, usize>,
    /// `offsets[k]..offsets[k + 1]` spans the classes of cardinality k
    offsets: [usize; MODULUS as usize + 2],
}

impl SetClassTable {
    /// Enumerate every set class, naming each from the registry
    pub fn build(registry: &impl SetClassRegistry) -> Self {
        let primes: BTreeSet<PrimeForm> = (0..=PitchClassSet::AGGREGATE.bits())
            .map(|bits| PrimeForm::of(PitchClassSet::from_bits(bits)))
            .collect();

        let classes: Vec<SetClass> = primes
            .into_iter()
            .map(|prime| SetClass::named(prime.as_set(), registry))
            .collect();

        let index = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.prime_form(), i))
            .collect();

        let mut offsets = [0usize; MODULUS as usize + 2];
        for class in &classes {
            offsets[class.cardinality() + 1] += 1;
        }
        for k in 1..offsets.len() {
            offsets[k] += offsets[k - 1];
        }

        let named = classes.iter().filter(|c| c.name().is_some()).count();
        debug!(classes = classes.len(), named, "built set-class table");

        Self {
            classes,
            index,
            offsets,
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every set class in table order
    pub fn iter(&self) -> impl Iterator<Item = &SetClass> {
        self.classes.iter()
    }

    pub fn as_slice(&self) -> &[SetClass] {
        &self.classes
    }

    /// Entry for a prime form
    pub fn get(&self, prime_form: &PrimeForm) -> Option<&SetClass> {
        self.index.get(prime_form).map(|&i| &self.classes[i])
    }

    /// Entry for the class of any set
    pub fn class_of(&self, set: PitchClassSet) -> Option<&SetClass> {
        self.get(&PrimeForm::of(set))
    }

    /// Classes of one cardinality, in prime-form order
    pub fn by_cardinality(&self, cardinality: usize) -> Result<&[SetClass]> {
        require_cardinality(cardinality)?;
        Ok(&self.classes[self.offsets[cardinality]..self.offsets[cardinality + 1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::registry::{EmptyRegistry, StaticRegistry};

    #[test]
    fn test_table_counts() {
        let table = SetClassTable::build(&EmptyRegistry);
        assert_eq!(table.len(), 224);

        let expected = [1, 1, 6, 12, 29, 38, 50, 38, 29, 12, 6, 1, 1];
        for (k, &count) in expected.iter().enumerate() {
            assert_eq!(table.by_cardinality(k).unwrap().len(), count, "cardinality {}", k);
        }
    }

    #[test]
    fn test_table_order() {
        let table = SetClassTable::build(&EmptyRegistry);
        let trichords = table.by_cardinality(3).unwrap();
        assert_eq!(trichords[0].prime_form().to_vec(), vec![0, 1, 2]);
        assert_eq!(trichords[11].prime_form().to_vec(), vec![0, 4, 8]);
        assert!(table.iter().zip(table.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn test_table_lookup() {
        let table = SetClassTable::build(&StaticRegistry::forte());
        let class = table.class_of(PitchClassSet::new([5, 9, 0])).unwrap();
        assert_eq!(class.name(), Some("3-11"));
        assert_eq!(table.by_cardinality(0).unwrap()[0].name(), None);
        assert_eq!(table.iter().filter(|c| c.name().is_some()).count(), 223);
    }

    #[test]
    fn test_invalid_cardinality() {
        let table = SetClassTable::build(&EmptyRegistry);
        assert_eq!(table.by_cardinality(13).unwrap_err(), AnalysisError::InvalidCardinality(13));
    }
}
