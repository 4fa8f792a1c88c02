// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Transformational relations between literal sets.

use serde::{Deserialize, Serialize};

use crate::set::{PitchClassSet, MODULUS};

/// Levels n at which Tn and TnI carry one set to another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPaths {
    pub tn: Vec<u8>,
    pub tni: Vec<u8>,
}

impl TransformPaths {
    pub fn is_empty(&self) -> bool {
        self.tn.is_empty() && self.tni.is_empty()
    }

    fn collect(source: PitchClassSet, holds: impl Fn(PitchClassSet) -> bool) -> Self {
        let levels = |op: &dyn Fn(i64) -> PitchClassSet| -> Vec<u8> {
            (0..MODULUS).filter(|&n| holds(op(n as i64))).collect()
        };
        Self {
            tn: levels(&|n| source.transpose(n)),
            tni: levels(&|n| source.transpose_inverted(n)),
        }
    }
}

/// Smallest n with Tn(from) = to
pub fn tn_level(from: PitchClassSet, to: PitchClassSet) -> Option<u8> {
    if from.len() != to.len() {
        return None;
    }
    (0..MODULUS).find(|&n| from.transpose(n as i64) == to)
}

/// Smallest index n with TnI(from) = to
pub fn tni_level(from: PitchClassSet, to: PitchClassSet) -> Option<u8> {
    if from.len() != to.len() {
        return None;
    }
    (0..MODULUS).find(|&n| from.transpose_inverted(n as i64) == to)
}

/// Every Tn and TnI that maps `from` exactly onto `to`
pub fn same_paths(from: PitchClassSet, to: PitchClassSet) -> TransformPaths {
    if from.len() != to.len() {
        return TransformPaths::default();
    }
    TransformPaths::collect(from, |image| image == to)
}

/// Every Tn and TnI that makes `from` a proper literal subset of `within`
pub fn embed_paths(from: PitchClassSet, within: PitchClassSet) -> TransformPaths {
    if from.len() >= within.len() {
        return TransformPaths::default();
    }
    TransformPaths::collect(from, |image| image.is_proper_subset(within))
}

/// Every Tn and TnI that makes `from` a proper literal superset of `over`
pub fn cover_paths(from: PitchClassSet, over: PitchClassSet) -> TransformPaths {
    if from.len() <= over.len() {
        return TransformPaths::default();
    }
    TransformPaths::collect(from, |image| image.is_proper_superset(over))
}
