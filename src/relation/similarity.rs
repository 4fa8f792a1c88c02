// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Similarity measures between set classes.
//!
//! Vector-based measures compare interval-class vectors entry by entry;
//! the subset-based Rp compares the classes of the (n - 1)-element subsets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{require_equal, Result};
use crate::registry::SetClass;
use crate::set::{IntervalClassVector, PrimeForm};

/// ICVSIM between 6-35 and 8-28, the largest value any pair reaches
pub const MAX_ICVSIM: f64 = 3.5784850922639815;

/// Entrywise difference `right - left` of two interval-class vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifferenceVector([i32; 6]);

impl DifferenceVector {
    pub fn between(left: IntervalClassVector, right: IntervalClassVector) -> Self {
        let mut diff = [0i32; 6];
        for (i, d) in diff.iter_mut().enumerate() {
            *d = right[i] as i32 - left[i] as i32;
        }
        Self(diff)
    }

    /// Wrap raw entries (entry 0 is interval class 1)
    pub fn new(entries: [i32; 6]) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[i32; 6] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// Sum of absolute differences
    pub fn magnitude(&self) -> u32 {
        self.0.iter().map(|d| d.unsigned_abs()).sum()
    }

    /// Classify the shape of the difference
    pub fn pattern(&self) -> VectorPattern {
        let differing: Vec<(u8, i32)> = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, &d)| d != 0)
            .map(|(i, &d)| (i as u8 + 1, d))
            .collect();

        match differing.as_slice() {
            [] => VectorPattern::Identical,
            [(ic, delta)] if delta.abs() == 1 => VectorPattern::Rp1 {
                interval_class: *ic,
                delta: *delta,
            },
            [(ic_a, d_a), (ic_b, d_b)] if *d_a == -*d_b => {
                let (raised, lowered) = if *d_a > 0 { (*ic_a, *ic_b) } else { (*ic_b, *ic_a) };
                VectorPattern::Rp2 {
                    raised,
                    lowered,
                    amount: d_a.unsigned_abs(),
                }
            }
            _ => VectorPattern::Other,
        }
    }
}

/// Shape of a difference vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum VectorPattern {
    /// No entry differs
    Identical,
    /// Exactly one entry differs, by one
    Rp1 { interval_class: u8, delta: i32 },
    /// Exactly two entries differ, one up by `amount` and the other down by `amount`
    Rp2 { raised: u8, lowered: u8, amount: u32 },
    /// Any other difference
    Other,
}

/// Forte's interval-class similarity relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IcRelation {
    /// Minimum similarity: no entry corresponds
    R0,
    /// Maximum similarity: four entries correspond and the other two are interchanged
    R1,
    /// Maximum similarity: four entries correspond, the other two are not interchanged
    R2,
}

pub(crate) fn difference(left: &SetClass, right: &SetClass) -> DifferenceVector {
    DifferenceVector::between(left.vector(), right.vector())
}

/// Entrywise difference of two set classes' vectors (equal cardinality)
pub fn difference_vector(left: &SetClass, right: &SetClass) -> Result<DifferenceVector> {
    require_equal(left.cardinality(), right.cardinality())?;
    Ok(difference(left, right))
}

/// Interval-vector similarity score: sum of absolute entry differences.
///
/// Zero exactly when the vectors are identical.
pub fn icv_similarity(left: &SetClass, right: &SetClass) -> Result<u32> {
    Ok(difference_vector(left, right)?.magnitude())
}

/// Rp1/Rp2 pattern of two set classes' vectors
pub fn vector_pattern(left: &SetClass, right: &SetClass) -> Result<VectorPattern> {
    Ok(difference_vector(left, right)?.pattern())
}

/// R0, R1 or R2, if one holds
pub fn interval_class_relation(left: &SetClass, right: &SetClass) -> Result<Option<IcRelation>> {
    require_equal(left.cardinality(), right.cardinality())?;
    let (a, b) = (left.vector(), right.vector());
    let differing: Vec<usize> = (0..6).filter(|&i| a[i] != b[i]).collect();

    let relation = match differing.as_slice() {
        [i, j] if a[*i] == b[*j] && a[*j] == b[*i] => Some(IcRelation::R1),
        [_, _] => Some(IcRelation::R2),
        d if d.len() == 6 => Some(IcRelation::R0),
        _ => None,
    };
    Ok(relation)
}

pub(crate) fn maximal_subset_shared(left: &SetClass, right: &SetClass) -> bool {
    let n = left.cardinality();
    if n == 0 || n != right.cardinality() {
        return false;
    }
    let classes = |class: &SetClass| -> HashSet<PrimeForm> {
        class
            .representative()
            .subsets(n - 1)
            .into_iter()
            .map(PrimeForm::of)
            .collect()
    };
    !classes(left).is_disjoint(&classes(right))
}

/// Forte's Rp: the classes share a subset class of cardinality n - 1
pub fn shares_maximal_subset(left: &SetClass, right: &SetClass) -> Result<bool> {
    require_equal(left.cardinality(), right.cardinality())?;
    Ok(maximal_subset_shared(left, right))
}

/// Isaacson's ICVSIM: standard deviation of the interval-difference vector.
///
/// 0 means identical interval content; defined for any two cardinalities.
pub fn isaacson_icvsim(left: &SetClass, right: &SetClass) -> f64 {
    let diff = difference(left, right);
    let entries = diff.entries().map(f64::from);
    let mean = entries.iter().sum::<f64>() / 6.0;
    let variance = entries.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / 6.0;
    variance.sqrt()
}

/// ICVSIM flipped and scaled to 0..=1, where 1 means identical interval content
pub fn normalized_icvsim(left: &SetClass, right: &SetClass) -> f64 {
    (MAX_ICVSIM - isaacson_icvsim(left, right)) / MAX_ICVSIM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::set::PitchClassSet;

    fn class(values: &[i64]) -> SetClass {
        SetClass::from_set(PitchClassSet::new(values.iter().copied()))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_difference_pattern_identical() {
        assert_eq!(DifferenceVector::default().pattern(), VectorPattern::Identical);
        assert!(DifferenceVector::default().is_zero());
    }

    #[test]
    fn test_difference_pattern_rp1() {
        let diff = DifferenceVector::new([0, 0, -1, 0, 0, 0]);
        assert_eq!(diff.pattern(), VectorPattern::Rp1 { interval_class: 3, delta: -1 });
        assert_eq!(DifferenceVector::new([0, 2, 0, 0, 0, 0]).pattern(), VectorPattern::Other);
    }

    #[test]
    fn test_difference_pattern_rp2() {
        let diff = DifferenceVector::new([0, -2, 0, 0, 2, 0]);
        assert_eq!(diff.pattern(), VectorPattern::Rp2 { raised: 5, lowered: 2, amount: 2 });
        assert_eq!(diff.magnitude(), 4);
        assert_eq!(DifferenceVector::new([1, 1, 0, 0, 0, 0]).pattern(), VectorPattern::Other);
        assert_eq!(DifferenceVector::new([1, -1, 1, -1, 0, 0]).pattern(), VectorPattern::Other);
    }

    #[test]
    fn test_vector_pattern_between_classes() {
        let a = class(&[3, 4, 5, 7, 9]);
        let b = class(&[11, 1, 3, 5, 6]);
        assert_eq!(difference_vector(&a, &b).unwrap().entries(), &[-1, 0, 0, 0, 1, 0]);
        assert_eq!(
            vector_pattern(&a, &b).unwrap(),
            VectorPattern::Rp2 { raised: 5, lowered: 1, amount: 1 }
        );
        assert_eq!(icv_similarity(&a, &b).unwrap(), 2);
    }

    #[test]
    fn test_icv_similarity() {
        let z17 = class(&[0, 1, 2, 4, 7, 8]);
        let z43 = class(&[0, 1, 2, 5, 6, 8]);
        assert_eq!(icv_similarity(&z17, &z43).unwrap(), 0);

        let chromatic = class(&[0, 1, 2]);
        let augmented = class(&[0, 4, 8]);
        assert_eq!(icv_similarity(&chromatic, &augmented).unwrap(), 6);
    }

    #[test]
    fn test_equal_cardinality_required() {
        let triad = class(&[0, 4, 7]);
        let tetrad = class(&[0, 4, 7, 10]);
        let expected = AnalysisError::IncompatibleCardinality { left: 3, right: 4 };
        assert_eq!(icv_similarity(&triad, &tetrad), Err(expected));
        assert_eq!(vector_pattern(&triad, &tetrad), Err(expected));
        assert_eq!(interval_class_relation(&triad, &tetrad), Err(expected));
        assert_eq!(shares_maximal_subset(&triad, &tetrad), Err(expected));
    }

    #[test]
    fn test_interval_class_relation() {
        let r1 = interval_class_relation(&class(&[3, 4, 5, 7, 9]), &class(&[11, 1, 3, 5, 6]));
        assert_eq!(r1.unwrap(), Some(IcRelation::R1));

        let r2 = interval_class_relation(&class(&[10, 0, 1, 3, 4]), &class(&[9, 10, 0, 2, 3]));
        assert_eq!(r2.unwrap(), Some(IcRelation::R2));

        let r0 = interval_class_relation(&class(&[3, 4, 5, 7]), &class(&[8, 11, 1, 2]));
        assert_eq!(r0.unwrap(), Some(IcRelation::R0));

        let none = interval_class_relation(&class(&[0, 1, 2]), &class(&[0, 1, 2]));
        assert_eq!(none.unwrap(), None);
    }

    #[test]
    fn test_shares_maximal_subset() {
        assert!(shares_maximal_subset(&class(&[10, 0, 1, 3, 4]), &class(&[9, 10, 0, 2, 3])).unwrap());
        assert!(shares_maximal_subset(&class(&[0, 1, 2, 3]), &class(&[0, 1, 2, 4])).unwrap());
        assert!(!shares_maximal_subset(&class(&[0, 1, 2]), &class(&[0, 4, 8])).unwrap());
        assert!(!shares_maximal_subset(&class(&[]), &class(&[])).unwrap());
    }

    #[test]
    fn test_isaacson_icvsim() {
        let chromatic = class(&[0, 1, 2]);
        assert!(close(isaacson_icvsim(&chromatic, &class(&[0, 1, 2, 3, 6])), 0.3726779962499649));
        assert!(close(isaacson_icvsim(&chromatic, &class(&[0, 1, 2, 5, 6, 7])), 1.0));
        assert!(close(isaacson_icvsim(&chromatic, &class(&[0, 1, 4, 6, 9])), 1.343709624716425));
        assert!(close(isaacson_icvsim(&chromatic, &class(&[0, 3, 6, 9])), 1.9790570145063195));

        let whole_tone = class(&[0, 2, 4, 6, 8, 10]);
        let octatonic = class(&[0, 1, 3, 4, 6, 7, 9, 10]);
        assert!(close(isaacson_icvsim(&whole_tone, &octatonic), MAX_ICVSIM));
        assert!(close(normalized_icvsim(&whole_tone, &octatonic), 0.0));

        let z17 = class(&[0, 1, 3, 4, 8]);
        let z37 = class(&[0, 3, 4, 5, 8]);
        assert!(close(normalized_icvsim(&z17, &z37), 1.0));
    }
}
