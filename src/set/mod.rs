// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class sets in the 12-tone universe.
//!
//! A [`PitchClassSet`] is an immutable value: transposition, inversion and
//! the set-algebra operations all return new sets. The set is stored as a
//! 12-bit mask, so every operation here is a handful of bit moves.
//!
//! Submodules derive the structural descriptors of a set:
//! - [`canon`]: normal order and prime form
//! - [`vector`]: interval-class and index vectors
//! - [`interval`]: intervals of ordered segments
//! - [`collections`]: relations to the modal reference collections

pub mod canon;
pub mod collections;
pub mod interval;
pub mod vector;

pub use canon::{normal_order, prime_form, transformation_levels, NormalOrder, PrimeForm};
pub use collections::{
    modal_attributes, modal_complements, referential_collections, ModalAttribute,
    ModalCollection, ReferenceStatus, ReferentialCollections,
};
pub use vector::{index_vector, interval_class, interval_class_vector, IndexVector, IntervalClassVector};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of the pitch-class universe
pub const MODULUS: u8 = 12;

/// Mask with all twelve pitch classes set
const FULL_MASK: u16 = 0x0FFF;

/// Reduce any integer to its pitch class (0-11)
pub fn pitch_class(value: i64) -> u8 {
    value.rem_euclid(MODULUS as i64) as u8
}

/// An unordered set of distinct pitch classes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<i64>")]
pub struct PitchClassSet {
    bits: u16,
}

impl PitchClassSet {
    /// The empty set
    pub const EMPTY: PitchClassSet = PitchClassSet { bits: 0 };

    /// The aggregate: all twelve pitch classes
    pub const AGGREGATE: PitchClassSet = PitchClassSet { bits: FULL_MASK };

    /// Build a set from any integers, reducing each mod 12 and dropping duplicates
    pub fn new<I>(pcs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let bits = pcs
            .into_iter()
            .fold(0u16, |bits, pc| bits | (1 << pitch_class(pc.into())));
        Self { bits }
    }

    /// Build a set from a raw mask (bit `n` set means pitch class `n` is present)
    pub fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    /// Raw 12-bit mask
    pub fn bits(self) -> u16 {
        self.bits
    }

    /// Cardinality
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Check membership of a pitch class (the argument is reduced mod 12)
    pub fn contains(self, pc: i64) -> bool {
        self.bits & (1 << pitch_class(pc)) != 0
    }

    /// Pitch classes in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..MODULUS).filter(move |&pc| self.bits & (1 << pc) != 0)
    }

    /// Pitch classes in ascending order, collected
    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }

    // Transformations -----------------------------------------------------

    /// Tn: add `n` to every pitch class
    pub fn transpose(self, n: i64) -> Self {
        let n = pitch_class(n) as u32;
        let bits = self.bits as u32;
        let rotated = (bits << n) | (bits >> (MODULUS as u32 - n));
        Self::from_bits(rotated as u16)
    }

    /// I: map every pitch class p to (12 - p) mod 12
    pub fn invert(self) -> Self {
        Self::new(self.iter().map(|pc| 12 - pc as i64))
    }

    /// TnI: inversion followed by transposition at `n`
    pub fn transpose_inverted(self, n: i64) -> Self {
        self.invert().transpose(n)
    }

    /// Ixy: the inversion that maps `x` onto `y` (and `y` onto `x`)
    pub fn invert_about(self, x: i64, y: i64) -> Self {
        self.transpose_inverted(x + y)
    }

    /// Pitch classes not in this set
    pub fn complement(self) -> Self {
        Self::from_bits(!self.bits)
    }

    /// All 24 Tn and TnI images of this set, paired with the operation
    pub fn images(self) -> impl Iterator<Item = (Operation, PitchClassSet)> {
        Operation::all().map(move |op| (op, op.apply(self)))
    }

    // Set algebra ---------------------------------------------------------

    pub fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Pitch classes in `self` but not in `other`
    pub fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    pub fn symmetric_difference(self, other: Self) -> Self {
        Self::from_bits(self.bits ^ other.bits)
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    pub fn is_proper_subset(self, other: Self) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn is_superset(self, other: Self) -> bool {
        other.is_subset(self)
    }

    pub fn is_proper_superset(self, other: Self) -> bool {
        other.is_proper_subset(self)
    }

    /// All proper literal subsets of cardinality `k`, ordered by their elements.
    ///
    /// Returns nothing when `k` is not smaller than the set itself.
    pub fn subsets(self, k: usize) -> Vec<PitchClassSet> {
        if k >= self.len() {
            return Vec::new();
        }
        self.combinations(k)
    }

    /// Every choice of `k` pitch classes from this set, ordered by their elements
    pub fn combinations(self, k: usize) -> Vec<PitchClassSet> {
        if k > self.len() {
            return Vec::new();
        }

        let mut subsets = Vec::new();
        let mut sub = self.bits;
        loop {
            if sub.count_ones() as usize == k {
                subsets.push(Self::from_bits(sub));
            }
            if sub == 0 {
                break;
            }
            sub = (sub - 1) & self.bits;
        }

        subsets.sort_by_key(|s| s.to_vec());
        subsets
    }

    // Invariance and symmetry ---------------------------------------------

    /// Common tones held under Tn
    pub fn transpositional_invariants(self, n: i64) -> Self {
        self.intersection(self.transpose(n))
    }

    /// Common tones held under TnI
    pub fn inversional_invariants(self, n: i64) -> Self {
        self.intersection(self.transpose_inverted(n))
    }

    /// Transposition levels that map the set onto itself. Always includes 0.
    pub fn transpositional_symmetry(self) -> Vec<u8> {
        (0..MODULUS)
            .filter(|&n| self.transpose(n as i64) == self)
            .collect()
    }

    /// Index numbers n for which TnI maps the set onto itself
    pub fn inversional_symmetry(self) -> Vec<u8> {
        (0..MODULUS)
            .filter(|&n| self.transpose_inverted(n as i64) == self)
            .collect()
    }
}

impl fmt::Debug for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PitchClassSet({})", self)
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pcs: Vec<String> = self.iter().map(|pc| pc.to_string()).collect();
        write!(f, "{{{}}}", pcs.join(", "))
    }
}

impl<T: Into<i64>> FromIterator<T> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<i64>> for PitchClassSet {
    fn from(pcs: Vec<i64>) -> Self {
        Self::new(pcs)
    }
}

impl From<PitchClassSet> for Vec<u8> {
    fn from(set: PitchClassSet) -> Self {
        set.to_vec()
    }
}

/// A transposition or inversion operator of the T/I group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    /// Tn
    Transpose(u8),
    /// TnI
    TransposeInverted(u8),
}

impl Operation {
    /// The 24 operators: T0..T11 then T0I..T11I
    pub fn all() -> impl Iterator<Item = Operation> {
        (0..MODULUS)
            .map(Operation::Transpose)
            .chain((0..MODULUS).map(Operation::TransposeInverted))
    }

    /// Apply the operator to a set
    pub fn apply(self, set: PitchClassSet) -> PitchClassSet {
        match self {
            Operation::Transpose(n) => set.transpose(n as i64),
            Operation::TransposeInverted(n) => set.transpose_inverted(n as i64),
        }
    }

    /// Transposition level or index number
    pub fn level(self) -> u8 {
        match self {
            Operation::Transpose(n) | Operation::TransposeInverted(n) => n,
        }
    }

    pub fn is_inversion(self) -> bool {
        matches!(self, Operation::TransposeInverted(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Transpose(n) => write!(f, "T{}", n),
            Operation::TransposeInverted(n) => write!(f, "T{}I", n),
        }
    }
}
