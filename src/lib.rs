// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class set analysis.
//!
//! - [`set`]: the mod-12 set primitive, canonical forms and vectors
//! - [`relation`]: similarity, embedding and Z-relations between set classes
//! - [`registry`]: set-class values, catalogue names and the set-class table
//! - [`query`]: batch operations over the table
//! - [`config`]: YAML analysis configuration

pub mod config;
pub mod error;
pub mod query;
pub mod registry;
pub mod relation;
pub mod set;

pub use error::{AnalysisError, Result};
pub use query::{QueryEngine, QueryOptions, SetClassProfile};
pub use registry::{EmptyRegistry, SetClass, SetClassRegistry, SetClassTable, StaticRegistry};
pub use relation::{classify, z_related, Relation, RelationKind, RelationResult};
pub use set::{interval_class_vector, normal_order, prime_form, IntervalClassVector, PitchClassSet, PrimeForm};
