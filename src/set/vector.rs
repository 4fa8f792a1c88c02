// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval-class and index vectors.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::{PitchClassSet, MODULUS};

/// Interval class (0-6) between two pitch classes
pub fn interval_class(a: u8, b: u8) -> u8 {
    let d = (a as i16 - b as i16).rem_euclid(MODULUS as i16) as u8;
    d.min(MODULUS - d)
}

/// Counts of unordered pairs per interval class 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalClassVector([u32; 6]);

impl IntervalClassVector {
    /// Wrap raw entries (entry 0 counts interval class 1)
    pub fn new(entries: [u32; 6]) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[u32; 6] {
        &self.0
    }

    /// Count for interval class `ic` (1-6); zero for anything else
    pub fn get(&self, ic: u8) -> u32 {
        match ic {
            1..=6 => self.0[ic as usize - 1],
            _ => 0,
        }
    }

    /// Total number of pairs counted
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<usize> for IntervalClassVector {
    type Output = u32;

    /// Zero-based access: index 0 is interval class 1
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl fmt::Display for IntervalClassVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "<{}>", digits.join(","))
    }
}

/// Interval-class vector of a set
pub fn interval_class_vector(set: PitchClassSet) -> IntervalClassVector {
    let pcs = set.to_vec();
    let mut counts = [0u32; 6];
    for (i, &a) in pcs.iter().enumerate() {
        for &b in &pcs[i + 1..] {
            counts[interval_class(a, b) as usize - 1] += 1;
        }
    }
    IntervalClassVector(counts)
}

/// Index vector: for each sum n, the number of ordered pairs (a, b) with a + b = n mod 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexVector([u32; 12]);

impl IndexVector {
    pub fn entries(&self) -> &[u32; 12] {
        &self.0
    }

    /// Count for index number `n` (reduced mod 12)
    pub fn get(&self, n: i64) -> u32 {
        self.0[super::pitch_class(n) as usize]
    }
}

/// Index vector of a set (pairs include each element with itself)
pub fn index_vector(set: PitchClassSet) -> IndexVector {
    let mut counts = [0u32; 12];
    for a in set.iter() {
        for b in set.iter() {
            counts[((a + b) % MODULUS) as usize] += 1;
        }
    }
    IndexVector(counts)
}

impl PitchClassSet {
    /// Interval-class vector of this set
    pub fn interval_class_vector(self) -> IntervalClassVector {
        interval_class_vector(self)
    }

    /// Index vector of this set
    pub fn index_vector(self) -> IndexVector {
        index_vector(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(values: &[i64]) -> PitchClassSet {
        PitchClassSet::new(values.iter().copied())
    }

    #[test]
    fn test_interval_class() {
        assert_eq!(interval_class(0, 7), 5);
        assert_eq!(interval_class(7, 0), 5);
        assert_eq!(interval_class(0, 6), 6);
        assert_eq!(interval_class(11, 1), 2);
        assert_eq!(interval_class(4, 4), 0);
    }

    #[test]
    fn test_interval_class_vector() {
        assert_eq!(interval_class_vector(pcs(&[0, 1, 2, 6, 8])).entries(), &[2, 2, 0, 2, 2, 2]);
        assert_eq!(interval_class_vector(pcs(&[0, 4, 8])).entries(), &[0, 0, 0, 3, 0, 0]);
        assert_eq!(interval_class_vector(pcs(&[0, 3, 7])).entries(), &[0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_interval_class_vector_boundaries() {
        assert_eq!(interval_class_vector(PitchClassSet::EMPTY).entries(), &[0; 6]);
        assert_eq!(interval_class_vector(pcs(&[5])).entries(), &[0; 6]);
        assert_eq!(interval_class_vector(PitchClassSet::AGGREGATE).entries(), &[12, 12, 12, 12, 12, 6]);
    }

    #[test]
    fn test_vector_accessors() {
        let vector = interval_class_vector(pcs(&[0, 4, 8]));
        assert_eq!(vector.get(4), 3);
        assert_eq!(vector.get(0), 0);
        assert_eq!(vector.get(7), 0);
        assert_eq!(vector[3], 3);
        assert_eq!(vector.total(), 3);
        assert_eq!(vector.to_string(), "<0,0,0,3,0,0>");
    }

    #[test]
    fn test_index_vector() {
        let vector = index_vector(pcs(&[0, 1, 4, 8]));
        assert_eq!(vector.entries(), &[3, 2, 1, 0, 3, 2, 0, 0, 3, 2, 0, 0]);
        assert_eq!(vector.get(13), 2);
        assert_eq!(index_vector(pcs(&[0, 1, 4, 8])).entries().iter().sum::<u32>(), 16);
    }
}
