// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Canonical forms: normal order and prime form.
//!
//! Normal order is an exhaustive search over the cyclic rotations of the
//! ascending set. A rotation is scored by the distance from its first
//! element to its last; ties are broken by the distance from the first
//! element to the second-to-last, and so on leftwards. Rotations still tied
//! after every comparison belong to a transpositionally symmetric set, and
//! the one starting on the smallest pitch class wins.
//!
//! Prime form transposes the normal orders of the set and of its inversion
//! to start on 0 and keeps the lexicographically smaller one.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Operation, PitchClassSet, MODULUS};

/// Distance from `from` up to `to` in pitch-class space
fn ascending_distance(from: u8, to: u8) -> u8 {
    (to + MODULUS - from) % MODULUS
}

/// The rotation of a set that is most packed to the left
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NormalOrder(Vec<u8>);

impl NormalOrder {
    /// Elements in normal order
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First pitch class of the ordering, if any
    pub fn first(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// Successive ascending intervals, ending with the wrap back to the first element
    pub fn intervals(&self) -> Vec<u8> {
        let n = self.0.len();
        (0..n)
            .map(|i| ascending_distance(self.0[i], self.0[(i + 1) % n]))
            .map(|d| if n == 1 { MODULUS } else { d })
            .collect()
    }

    /// Normal form: the normal order transposed to start on 0
    pub fn zeroed(&self) -> Vec<u8> {
        match self.first() {
            Some(first) => self.0.iter().map(|&pc| ascending_distance(first, pc)).collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for NormalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pcs: Vec<String> = self.0.iter().map(|pc| pc.to_string()).collect();
        write!(f, "[{}]", pcs.join(","))
    }
}

/// Compute the normal order of a set
pub fn normal_order(set: PitchClassSet) -> NormalOrder {
    let base = set.to_vec();
    let n = base.len();

    // Rotation r starts on base[r]; candidates stay in ascending order of
    // their first element throughout the filtering.
    let mut candidates: Vec<Vec<u8>> = (0..n)
        .map(|r| base[r..].iter().chain(&base[..r]).copied().collect())
        .collect();

    for k in (1..n).rev() {
        if candidates.len() == 1 {
            break;
        }
        let span = |rotation: &Vec<u8>| ascending_distance(rotation[0], rotation[k]);
        let Some(best) = candidates.iter().map(span).min() else {
            break;
        };
        candidates.retain(|rotation| span(rotation) == best);
    }

    NormalOrder(candidates.into_iter().next().unwrap_or_default())
}

/// Canonical representative of a set class under transposition and inversion
///
/// The prime form is stored as the set of its pitch classes; because it
/// always starts on 0 and ascends, the ordered sequence is recovered by
/// listing the set in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<i64>")]
pub struct PrimeForm(PitchClassSet);

impl PrimeForm {
    /// Canonicalize any set
    pub fn of(set: PitchClassSet) -> Self {
        prime_form(set)
    }

    /// The prime form as a pitch-class set starting on 0
    pub fn as_set(self) -> PitchClassSet {
        self.0
    }

    /// Ordered elements
    pub fn to_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn cardinality(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for PrimeForm {
    /// Cardinality first, then element-wise left to right
    fn cmp(&self, other: &Self) -> Ordering {
        self.cardinality()
            .cmp(&other.cardinality())
            .then_with(|| self.0.iter().cmp(other.0.iter()))
    }
}

impl PartialOrd for PrimeForm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for PrimeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeForm({})", self)
    }
}

impl fmt::Display for PrimeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pcs: Vec<String> = self.0.iter().map(|pc| pc.to_string()).collect();
        write!(f, "[{}]", pcs.join(","))
    }
}

impl From<PitchClassSet> for PrimeForm {
    fn from(set: PitchClassSet) -> Self {
        prime_form(set)
    }
}

impl From<Vec<i64>> for PrimeForm {
    fn from(pcs: Vec<i64>) -> Self {
        prime_form(PitchClassSet::new(pcs))
    }
}

impl From<PrimeForm> for Vec<u8> {
    fn from(prime: PrimeForm) -> Self {
        prime.to_vec()
    }
}

/// Compute the prime form of a set
pub fn prime_form(set: PitchClassSet) -> PrimeForm {
    let original = normal_order(set).zeroed();
    let inverted = normal_order(set.invert()).zeroed();
    let smaller = if inverted < original { inverted } else { original };
    PrimeForm(PitchClassSet::new(smaller))
}

/// Operations that carry the set's prime form onto the set itself.
///
/// Symmetric sets yield several operations.
pub fn transformation_levels(set: PitchClassSet) -> Vec<Operation> {
    let prime = prime_form(set).as_set();
    Operation::all().filter(|op| op.apply(prime) == set).collect()
}
