// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Query layer
//!
//! Batch operations over the set-class table: catalogues by cardinality,
//! Z-pair scans, pairwise classification, inclusion vectors, and the
//! per-class profile. Pairwise batches are independent and run on the
//! rayon pool when enabled.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::registry::{SetClass, SetClassRegistry, SetClassTable};
use crate::relation::{
    classify, inclusion_count, is_embedded, set_complex_relation, subset_relation, RelationKind,
    RelationResult, SetComplex,
};
use crate::set::{modal_attributes, IntervalClassVector, ModalAttribute, PitchClassSet, PrimeForm};

/// The nine nexus sets of the modal set complexes
pub const NEXUS_SETS: [(&str, [u8; 5]); 9] = [
    ("5-10", [0, 1, 3, 4, 6]),
    ("5-16", [0, 1, 3, 4, 7]),
    ("5-19", [0, 1, 3, 6, 7]),
    ("5-21", [0, 1, 4, 5, 8]),
    ("5-25", [0, 2, 3, 5, 8]),
    ("5-28", [0, 2, 3, 6, 8]),
    ("5-31", [0, 1, 3, 6, 9]),
    ("5-32", [0, 1, 4, 6, 9]),
    ("5-33", [0, 2, 4, 6, 8]),
];

/// How batch queries run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Spread pairwise work over the rayon pool
    pub parallel: bool,
    /// Sort results by (left, right) prime form
    pub deterministic_order: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            deterministic_order: true,
        }
    }
}

/// Catalogue summary of one set class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetClassProfile {
    pub name: Option<String>,
    pub prime_form: PrimeForm,
    pub vector: IntervalClassVector,
    pub z_correspondent: Option<SetClass>,
    /// Degrees of transpositional and inversional symmetry
    pub symmetry: (usize, usize),
    pub modal_attributes: Vec<ModalAttribute>,
    /// Names of the nexus sets whose modal set complex includes the class
    pub nexus_memberships: Vec<String>,
}

/// Query engine over a prebuilt set-class table
pub struct QueryEngine<R: SetClassRegistry> {
    registry: R,
    table: SetClassTable,
    options: QueryOptions,
}

impl<R: SetClassRegistry> QueryEngine<R> {
    /// Create an engine with default options
    pub fn new(registry: R) -> Self {
        Self::with_options(registry, QueryOptions::default())
    }

    pub fn with_options(registry: R, options: QueryOptions) -> Self {
        let table = SetClassTable::build(&registry);
        debug!(
            classes = table.len(),
            parallel = options.parallel,
            deterministic = options.deterministic_order,
            "query engine ready"
        );
        Self {
            registry,
            table,
            options,
        }
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn table(&self) -> &SetClassTable {
        &self.table
    }

    /// Set classes of cardinality `k`, in prime-form order
    pub fn set_classes(&self, k: usize) -> Result<&[SetClass]> {
        self.table.by_cardinality(k)
    }

    /// All 224 set classes
    pub fn all_set_classes(&self) -> &[SetClass] {
        self.table.as_slice()
    }

    /// Named set class of any set
    pub fn lookup(&self, set: PitchClassSet) -> SetClass {
        self.table
            .class_of(set)
            .cloned()
            .unwrap_or_else(|| SetClass::named(set, &self.registry))
    }

    /// Z-related pairs among the classes of cardinality `k`
    pub fn z_pairs(&self, k: usize) -> Result<Vec<RelationResult>> {
        let classes = self.set_classes(k)?;
        let pairs = self.compare_pairs(classes, |r| r.relation.kind() == RelationKind::ZRelated);
        info!(cardinality = k, pairs = pairs.len(), "z-pair scan complete");
        Ok(pairs)
    }

    /// The Z-mate of a class, if it has one
    pub fn z_correspondent(&self, class: &SetClass) -> Option<&SetClass> {
        self.table.by_cardinality(class.cardinality()).ok()?.iter().find(|other| {
            other.vector() == class.vector() && other.prime_form() != class.prime_form()
        })
    }

    /// Classify every unordered pair of the given classes
    pub fn classify_all(&self, classes: &[SetClass]) -> Vec<RelationResult> {
        let results = self.compare_pairs(classes, |_| true);
        info!(classes = classes.len(), pairs = results.len(), "pairwise classification complete");
        results
    }

    /// Pairs of cardinality `k` whose classification is `kind`
    pub fn similar(&self, k: usize, kind: RelationKind) -> Result<Vec<RelationResult>> {
        let classes = self.set_classes(k)?;
        let pairs = self.compare_pairs(classes, |r| r.relation.kind() == kind);
        info!(cardinality = k, %kind, pairs = pairs.len(), "similarity scan complete");
        Ok(pairs)
    }

    /// Classes of cardinality `k` that contain `class` as an abstract subset
    pub fn supersets_of(&self, class: &SetClass, k: usize) -> Result<Vec<&SetClass>> {
        let candidates = self.set_classes(k)?;
        Ok(candidates
            .iter()
            .filter(|candidate| is_embedded(class, candidate))
            .collect())
    }

    /// Inclusion counts of `class` against each class of cardinality `k`,
    /// in table order
    pub fn inclusion_vector(&self, class: &SetClass, k: usize) -> Result<Vec<usize>> {
        let others = self.set_classes(k)?;
        Ok(if self.options.parallel {
            others.par_iter().map(|other| inclusion_count(class, other)).collect()
        } else {
            others.iter().map(|other| inclusion_count(class, other)).collect()
        })
    }

    /// Catalogue profile of a class
    pub fn profile(&self, class: &SetClass) -> SetClassProfile {
        let set = class.representative();
        SetClassProfile {
            name: class
                .name()
                .map(str::to_string)
                .or_else(|| self.registry.lookup(&class.prime_form()).map(|entry| entry.name)),
            prime_form: class.prime_form(),
            vector: class.vector(),
            z_correspondent: self.z_correspondent(class).cloned(),
            symmetry: (
                set.transpositional_symmetry().len(),
                set.inversional_symmetry().len(),
            ),
            modal_attributes: modal_attributes(set),
            nexus_memberships: nexus_memberships(set),
        }
    }

    fn compare_pairs<F>(&self, classes: &[SetClass], keep: F) -> Vec<RelationResult>
    where
        F: Fn(&RelationResult) -> bool + Sync,
    {
        let n = classes.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let compare = |&(i, j): &(usize, usize)| {
            let result = classify(&classes[i], &classes[j]);
            keep(&result).then_some(result)
        };

        let mut results: Vec<RelationResult> = if self.options.parallel {
            pairs.par_iter().filter_map(compare).collect()
        } else {
            pairs.iter().filter_map(compare).collect()
        };

        if self.options.deterministic_order {
            results.sort_by(|a, b| {
                (a.left.prime_form(), a.right.prime_form())
                    .cmp(&(b.left.prime_form(), b.right.prime_form()))
            });
        }
        debug!(pairs = pairs.len(), kept = results.len(), "compared pairs");
        results
    }
}

/// Nexus sets whose modal set complex the set belongs to.
///
/// Sets of up to five elements must be in Kh with the nexus; hexachords
/// must be in K or Kh and include the nexus.
pub fn nexus_memberships(set: PitchClassSet) -> Vec<String> {
    NEXUS_SETS
        .iter()
        .filter(|(_, pcs)| {
            let nexus = PitchClassSet::new(pcs.iter().copied());
            let relation = set_complex_relation(set, nexus);
            match set.len() {
                0..=5 => relation == Some(SetComplex::Kh),
                6 => relation.is_some() && subset_relation(nexus, set).holds(),
                _ => false,
            }
        })
        .map(|(name, _)| name.to_string())
        .collect()
}
