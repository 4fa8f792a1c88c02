// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Inclusion, complement, and set-complex relations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::registry::SetClass;
use crate::set::{PitchClassSet, PrimeForm, MODULUS};

/// How one set is contained in another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Inclusion {
    None,
    /// The pitch classes themselves are contained
    Literal,
    /// Some transposition or inversion is contained
    Abstract,
}

impl Inclusion {
    pub fn holds(self) -> bool {
        self != Inclusion::None
    }
}

/// Relation of a set to the complement of another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplementRelation {
    None,
    /// The set is exactly the other's complement
    Literal,
    /// The set is in the class of the other's complement
    Abstract,
}

/// Forte's set-complex relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetComplex {
    /// Inclusion with the set or with its complement
    K,
    /// Inclusion with both the set and its complement
    Kh,
}

/// Whether some image of `smaller` lies properly inside some image of `larger`
pub fn is_embedded(smaller: &SetClass, larger: &SetClass) -> bool {
    smaller.cardinality() < larger.cardinality()
        && subset_relation(smaller.representative(), larger.representative()).holds()
}

/// Is `set` a proper subset of `of`, literally or up to Tn/TnI?
pub fn subset_relation(set: PitchClassSet, of: PitchClassSet) -> Inclusion {
    if set.len() >= of.len() {
        return Inclusion::None;
    }
    if set.is_proper_subset(of) {
        return Inclusion::Literal;
    }
    let class = PrimeForm::of(set);
    if of.subsets(set.len()).into_iter().any(|s| PrimeForm::of(s) == class) {
        Inclusion::Abstract
    } else {
        Inclusion::None
    }
}

/// Is `set` a proper superset of `of`, literally or up to Tn/TnI?
pub fn superset_relation(set: PitchClassSet, of: PitchClassSet) -> Inclusion {
    subset_relation(of, set)
}

/// Literal subsets of `set` belonging to `class`, each paired with the
/// pitch classes it leaves out
pub fn inclusions(set: PitchClassSet, class: &SetClass) -> Vec<(PitchClassSet, PitchClassSet)> {
    let target = class.prime_form();
    set.subsets(target.cardinality())
        .into_iter()
        .filter(|s| PrimeForm::of(*s) == target)
        .map(|s| (s, set.difference(s)))
        .collect()
}

/// Supersets of `set` belonging to `class`, each paired with the pitch
/// classes added to reach it
pub fn complementations(set: PitchClassSet, class: &SetClass) -> Vec<(PitchClassSet, PitchClassSet)> {
    let target = class.prime_form();
    if target.cardinality() <= set.len() {
        return Vec::new();
    }
    let gap = target.cardinality() - set.len();
    set.complement()
        .combinations(gap)
        .into_iter()
        .map(|added| (set.union(added), added))
        .filter(|(whole, _)| PrimeForm::of(*whole) == target)
        .collect()
}

/// Is `set` the complement of `other`, literally or up to Tn/TnI?
pub fn complement_relation(set: PitchClassSet, other: PitchClassSet) -> ComplementRelation {
    if set.len() + other.len() != MODULUS as usize {
        return ComplementRelation::None;
    }
    let complement = other.complement();
    if set == complement {
        ComplementRelation::Literal
    } else if PrimeForm::of(set) == PrimeForm::of(complement) {
        ComplementRelation::Abstract
    } else {
        ComplementRelation::None
    }
}

/// How often one class occurs within the other.
///
/// When A is larger: the number of literal subsets of A's prime form in
/// B's class. When A is smaller: the number of distinct members of B's
/// class containing A's prime form. Equal cardinalities count nothing.
pub fn inclusion_count(a: &SetClass, b: &SetClass) -> usize {
    use std::cmp::Ordering::*;
    match a.cardinality().cmp(&b.cardinality()) {
        Greater => inclusions(a.representative(), b).len(),
        Less => {
            let within = a.representative();
            b.representative()
                .images()
                .map(|(_, image)| image)
                .filter(|image| within.is_proper_subset(*image))
                .collect::<HashSet<_>>()
                .len()
        }
        Equal => 0,
    }
}

fn included_either_way(a: PitchClassSet, b: PitchClassSet) -> bool {
    subset_relation(a, b).holds() || superset_relation(a, b).holds()
}

/// K or Kh between two sets of unequal cardinality in 3..=9
pub fn set_complex_relation(a: PitchClassSet, b: PitchClassSet) -> Option<SetComplex> {
    let bounds = 3..=9;
    if !bounds.contains(&a.len()) || !bounds.contains(&b.len()) || a.len() == b.len() {
        return None;
    }
    let with_set = included_either_way(a, b);
    let with_complement = included_either_way(a, b.complement());
    match (with_set, with_complement) {
        (true, true) => Some(SetComplex::Kh),
        (true, false) | (false, true) => Some(SetComplex::K),
        (false, false) => None,
    }
}
