// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Set classes: a prime form with its derived descriptors.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::SetClassRegistry;
use crate::set::{interval_class_vector, IntervalClassVector, PitchClassSet, PrimeForm};

/// A set class with its interval-class vector and optional catalogue name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetClass {
    prime_form: PrimeForm,
    vector: IntervalClassVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl SetClass {
    /// Set class of any representative set
    pub fn from_set(set: PitchClassSet) -> Self {
        let prime_form = PrimeForm::of(set);
        Self {
            prime_form,
            vector: interval_class_vector(prime_form.as_set()),
            name: None,
        }
    }

    /// Set class of any representative set, named from a registry
    pub fn named(set: PitchClassSet, registry: &impl SetClassRegistry) -> Self {
        Self::from_set(set).with_registry_name(registry)
    }

    /// Attach the registry's name for this class, if it has one
    pub fn with_registry_name(mut self, registry: &impl SetClassRegistry) -> Self {
        self.name = registry.lookup(&self.prime_form).map(|entry| entry.name);
        self
    }

    pub fn prime_form(&self) -> PrimeForm {
        self.prime_form
    }

    pub fn vector(&self) -> IntervalClassVector {
        self.vector
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn cardinality(&self) -> usize {
        self.prime_form.cardinality()
    }

    /// The prime form as a representative pitch-class set
    pub fn representative(&self) -> PitchClassSet {
        self.prime_form.as_set()
    }

    /// Set class of the complement (unnamed)
    pub fn complement_class(&self) -> SetClass {
        SetClass::from_set(self.representative().complement())
    }

    /// Name if known, prime form otherwise
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.prime_form.to_string(),
        }
    }
}

impl From<PitchClassSet> for SetClass {
    fn from(set: PitchClassSet) -> Self {
        SetClass::from_set(set)
    }
}

impl Ord for SetClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prime_form
            .cmp(&other.prime_form)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for SetClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {} {}", name, self.prime_form, self.vector),
            None => write!(f, "{} {}", self.prime_form, self.vector),
        }
    }
}
