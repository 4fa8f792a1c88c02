// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for pcset
//!
//! These tests verify that the canonicalizer, vector builder, relation
//! engine and query layer work together through the public API.

use std::collections::HashSet;

use pcset::config::AnalysisFile;
use pcset::query::QueryEngine;
use pcset::relation::{classify, icv_similarity, z_related, Relation, Side};
use pcset::set::{normal_order, prime_form, PitchClassSet, PrimeForm};
use pcset::{AnalysisError, EmptyRegistry, SetClass, StaticRegistry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::tempdir;

fn pcs(values: &[i64]) -> PitchClassSet {
    PitchClassSet::new(values.iter().copied())
}

fn every_set() -> impl Iterator<Item = PitchClassSet> {
    (0..=PitchClassSet::AGGREGATE.bits()).map(PitchClassSet::from_bits)
}

/// Prime form is invariant under all 24 operations, for every subset
#[test]
fn test_prime_form_invariance() {
    for set in every_set() {
        let prime = prime_form(set);
        for (op, image) in set.images() {
            assert_eq!(prime_form(image), prime, "{} of {}", op, set);
        }
    }
}

/// Canonicalizing a prime form changes nothing
#[test]
fn test_prime_form_idempotent() {
    for set in every_set() {
        let prime = prime_form(set);
        assert_eq!(prime_form(prime.as_set()), prime);
        assert_eq!(prime.to_vec().first().copied().unwrap_or(0), 0);
    }
}

/// Normal order is a rotation of the sorted set and keeps every element
#[test]
fn test_normal_order_is_rotation() {
    for set in every_set() {
        let order = normal_order(set);
        let mut sorted = order.as_slice().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, set.to_vec());
    }
}

/// Vector entries sum to n(n-1)/2 and survive every operation
#[test]
fn test_vector_laws() {
    for set in every_set() {
        let n = set.len() as u32;
        let vector = set.interval_class_vector();
        assert_eq!(vector.total(), n * n.saturating_sub(1) / 2);
        assert_eq!(set.transpose(5).interval_class_vector(), vector);
        assert_eq!(set.invert().interval_class_vector(), vector);
    }
}

#[test]
fn test_set_class_counts() {
    let distinct: HashSet<PrimeForm> = every_set().map(prime_form).collect();
    assert_eq!(distinct.len(), 224);
}

#[test]
fn test_random_transforms() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let bits: u16 = rng.gen_range(0..=0x0FFF);
        let set = PitchClassSet::from_bits(bits);
        let n: i64 = rng.gen_range(-24..24);
        assert_eq!(prime_form(set.transpose(n)), prime_form(set));
        assert_eq!(prime_form(set.transpose_inverted(n)), prime_form(set));
        assert_eq!(set.transpose(n).transpose(-n), set);
        assert_eq!(set.invert().invert(), set);
    }
}

#[test]
fn test_scenario_major_triad() {
    let triad = pcs(&[0, 4, 7]);
    assert_eq!(normal_order(triad).as_slice(), &[0, 4, 7]);
    assert_eq!(prime_form(triad).to_vec(), vec![0, 3, 7]);
    assert_eq!(triad.interval_class_vector().entries(), &[0, 0, 1, 1, 1, 0]);
}

#[test]
fn test_scenario_reduction() {
    let set = pcs(&[12, 16, -5]);
    assert_eq!(set, pcs(&[0, 4, 7]));
}

#[test]
fn test_scenario_z_pair() {
    let z15 = SetClass::from_set(pcs(&[0, 1, 4, 6]));
    let z29 = SetClass::from_set(pcs(&[0, 1, 3, 7]));
    assert_eq!(z15.vector(), z29.vector());
    assert_eq!(z15.vector().entries(), &[1, 1, 1, 1, 1, 1]);
    assert!(z_related(&z15, &z29).unwrap());
    assert!(z_related(&z29, &z15).unwrap());
    assert_eq!(icv_similarity(&z15, &z29).unwrap(), 0);
    assert_eq!(classify(&z15, &z29).relation, Relation::ZRelated);
}

#[test]
fn test_scenario_embedding() {
    let augmented = SetClass::from_set(pcs(&[0, 4, 8]));
    let larger = SetClass::from_set(pcs(&[0, 4, 8, 2]));
    let result = classify(&augmented, &larger);
    assert_eq!(result.relation, Relation::Embedded { contained: Side::Left });
    assert_eq!(result.score, None);
}

#[test]
fn test_scenario_incompatible() {
    let triad = SetClass::from_set(pcs(&[0, 4, 7]));
    let seventh = SetClass::from_set(pcs(&[0, 4, 7, 10]));
    assert_eq!(
        icv_similarity(&triad, &seventh),
        Err(AnalysisError::IncompatibleCardinality { left: 3, right: 4 })
    );
}

#[test]
fn test_scenario_boundaries() {
    assert!(prime_form(PitchClassSet::EMPTY).to_vec().is_empty());
    assert_eq!(PitchClassSet::EMPTY.interval_class_vector().entries(), &[0; 6]);
    assert_eq!(prime_form(PitchClassSet::AGGREGATE).to_vec(), (0..12).collect::<Vec<u8>>());
    assert_eq!(
        PitchClassSet::AGGREGATE.interval_class_vector().entries(),
        &[12, 12, 12, 12, 12, 6]
    );
}

#[test]
fn test_z_related_never_equal() {
    let engine = QueryEngine::new(EmptyRegistry);
    for class in engine.all_set_classes() {
        assert!(!z_related(class, class).unwrap());
    }
}

#[test]
fn test_every_class_named() {
    let engine = QueryEngine::new(StaticRegistry::forte());
    let unnamed: Vec<&SetClass> = engine
        .all_set_classes()
        .iter()
        .filter(|c| c.name().is_none())
        .collect();
    assert_eq!(unnamed.len(), 1);
    assert!(unnamed[0].prime_form().is_empty());
}

#[test]
fn test_z_pairs_named() {
    let engine = QueryEngine::new(StaticRegistry::forte());
    let pairs = engine.z_pairs(6).unwrap();
    assert_eq!(pairs.len(), 15);
    for pair in &pairs {
        let left = pair.left.name().unwrap();
        let right = pair.right.name().unwrap();
        assert!(left.contains('Z') && right.contains('Z'), "{} / {}", left, right);
    }
}

#[test]
fn test_z_correspondents_are_symmetric() {
    let engine = QueryEngine::new(StaticRegistry::forte());
    for class in engine.all_set_classes() {
        if let Some(mate) = engine.z_correspondent(class) {
            assert_eq!(engine.z_correspondent(mate).map(|c| c.prime_form()), Some(class.prime_form()));
        }
    }
}

#[test]
fn test_complement_vectors() {
    // Hexachords and their complements share a vector
    let engine = QueryEngine::new(EmptyRegistry);
    for class in engine.set_classes(6).unwrap() {
        assert_eq!(class.complement_class().vector(), class.vector());
    }
}

#[test]
fn test_config_drives_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("analysis.yaml");
    std::fs::write(
        &path,
        r#"
query:
  parallel: false
registry:
  forte_names: false
  custom:
    - name: "Tristan chord"
      pcs: [5, 11, 3, 8]
"#,
    )
    .unwrap();

    let config = AnalysisFile::load(&path).unwrap();
    let engine = QueryEngine::with_options(
        StaticRegistry::from(&config.registry),
        (&config.query).into(),
    );
    assert!(!engine.options().parallel);

    let tristan = engine.lookup(pcs(&[0, 3, 6, 10]));
    assert_eq!(tristan.name(), Some("Tristan chord"));
    assert_eq!(engine.lookup(pcs(&[0, 1, 2])).name(), None);
}
