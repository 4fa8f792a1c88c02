// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Relation engine
//!
//! Pure functions comparing two set classes (or two literal sets):
//! Z-relation, vector similarity, Forte's Rp, embedding, and the
//! transformational and inclusion relations between literal sets.
//! [`classify`] folds the pairwise measures into one tagged result.

pub mod inclusion;
pub mod similarity;
pub mod transform;

pub use inclusion::{
    complement_relation, complementations, inclusion_count, inclusions, is_embedded,
    set_complex_relation, subset_relation, superset_relation, ComplementRelation, Inclusion,
    SetComplex,
};
pub use similarity::{
    difference_vector, icv_similarity, interval_class_relation, isaacson_icvsim,
    normalized_icvsim, shares_maximal_subset, vector_pattern, DifferenceVector, IcRelation,
    VectorPattern, MAX_ICVSIM,
};
pub use transform::{cover_paths, embed_paths, same_paths, tn_level, tni_level, TransformPaths};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_equal, Result};
use crate::registry::SetClass;

/// Which operand of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// The strongest relation found between two set classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Relation {
    /// Same prime form
    Equivalent,
    /// Same interval-class vector, different prime forms
    ZRelated,
    /// Vectors differ in two compensating entries
    Rp2 { raised: u8, lowered: u8, amount: u32 },
    /// Vectors differ in one entry by one
    Rp1 { interval_class: u8, delta: i32 },
    /// The classes share a subset class of cardinality n - 1
    Rp,
    /// The smaller class is an abstract subset of the larger
    Embedded { contained: Side },
    Unrelated,
}

impl Relation {
    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::Equivalent => RelationKind::Equivalent,
            Relation::ZRelated => RelationKind::ZRelated,
            Relation::Rp2 { .. } => RelationKind::Rp2,
            Relation::Rp1 { .. } => RelationKind::Rp1,
            Relation::Rp => RelationKind::Rp,
            Relation::Embedded { .. } => RelationKind::Embedded,
            Relation::Unrelated => RelationKind::Unrelated,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Rp2 { raised, lowered, amount } => {
                write!(f, "Rp2 (ic{} +{}, ic{} -{})", raised, amount, lowered, amount)
            }
            Relation::Rp1 { interval_class, delta } => {
                write!(f, "Rp1 (ic{} {:+})", interval_class, delta)
            }
            Relation::Embedded { contained: Side::Left } => write!(f, "embedded (left in right)"),
            Relation::Embedded { contained: Side::Right } => write!(f, "embedded (right in left)"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Payload-free relation tag, for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Equivalent,
    ZRelated,
    Rp2,
    Rp1,
    Rp,
    Embedded,
    Unrelated,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Equivalent => "equivalent",
            RelationKind::ZRelated => "Z-related",
            RelationKind::Rp2 => "Rp2",
            RelationKind::Rp1 => "Rp1",
            RelationKind::Rp => "Rp",
            RelationKind::Embedded => "embedded",
            RelationKind::Unrelated => "unrelated",
        };
        f.write_str(name)
    }
}

/// Outcome of comparing two set classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationResult {
    pub left: SetClass,
    pub right: SetClass,
    pub relation: Relation,
    /// Interval-vector similarity score, for equal cardinalities only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl fmt::Display for RelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}: {}", self.left.label(), self.right.label(), self.relation)?;
        if let Some(score) = self.score {
            write!(f, " (score {})", score)?;
        }
        Ok(())
    }
}

/// Identical vectors, distinct prime forms
pub fn z_related(left: &SetClass, right: &SetClass) -> Result<bool> {
    require_equal(left.cardinality(), right.cardinality())?;
    Ok(left.vector() == right.vector() && left.prime_form() != right.prime_form())
}

/// Classify the relation between two set classes.
///
/// Equal cardinalities get the strongest of Equivalent, ZRelated, Rp2,
/// Rp1 and Rp, with the vector-similarity score. Unequal cardinalities
/// are either Embedded or Unrelated and carry no score.
pub fn classify(left: &SetClass, right: &SetClass) -> RelationResult {
    let (relation, score) = if left.cardinality() == right.cardinality() {
        let diff = similarity::difference(left, right);
        let relation = if left.prime_form() == right.prime_form() {
            Relation::Equivalent
        } else {
            match diff.pattern() {
                VectorPattern::Identical => Relation::ZRelated,
                VectorPattern::Rp2 { raised, lowered, amount } => Relation::Rp2 { raised, lowered, amount },
                VectorPattern::Rp1 { interval_class, delta } => Relation::Rp1 { interval_class, delta },
                VectorPattern::Other if similarity::maximal_subset_shared(left, right) => Relation::Rp,
                VectorPattern::Other => Relation::Unrelated,
            }
        };
        (relation, Some(diff.magnitude()))
    } else {
        let relation = if is_embedded(left, right) {
            Relation::Embedded { contained: Side::Left }
        } else if is_embedded(right, left) {
            Relation::Embedded { contained: Side::Right }
        } else {
            Relation::Unrelated
        };
        (relation, None)
    };

    RelationResult {
        left: left.clone(),
        right: right.clone(),
        relation,
        score,
    }
}
