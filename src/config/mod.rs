// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for pcset.
//!
//! An analysis file selects how batch queries run, the log level, and
//! which set-class names the registry carries.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::query::QueryOptions;
use crate::registry::StaticRegistry;
use crate::set::PitchClassSet;

/// Root analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisFile {
    /// Batch query settings
    #[serde(default)]
    pub query: QueryConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Set-class naming
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AnalysisFile {
    /// Load an analysis configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse an analysis configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}

/// Batch query configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Run pairwise scans on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Worker threads (rayon's default when unset)
    #[serde(default)]
    pub threads: Option<usize>,
    /// Sort batch results by prime form
    #[serde(default = "default_true")]
    pub deterministic_order: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            deterministic_order: true,
        }
    }
}

impl From<&QueryConfig> for QueryOptions {
    fn from(config: &QueryConfig) -> Self {
        QueryOptions {
            parallel: config.parallel,
            deterministic_order: config.deterministic_order,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed maximum level
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.level))
    }
}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryConfig {
    /// Preload Forte's catalogue names
    #[serde(default = "default_true")]
    pub forte_names: bool,
    /// Extra names, applied over the catalogue
    #[serde(default)]
    pub custom: Vec<CustomSetClassName>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            forte_names: true,
            custom: Vec::new(),
        }
    }
}

/// A user-supplied name for the class of a set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomSetClassName {
    pub name: String,
    /// Any member of the class
    pub pcs: Vec<i64>,
}

impl From<&RegistryConfig> for StaticRegistry {
    fn from(config: &RegistryConfig) -> Self {
        let mut registry = if config.forte_names {
            StaticRegistry::forte()
        } else {
            StaticRegistry::new()
        };
        for custom in &config.custom {
            registry.register(custom.name.clone(), PitchClassSet::new(custom.pcs.iter().copied()));
        }
        registry
    }
}

/// Check an analysis file for values serde accepts but the analysis cannot use
pub fn validate(config: &AnalysisFile) -> Result<()> {
    if config.query.threads == Some(0) {
        bail!("query.threads must be at least 1");
    }
    config.logging.level()?;
    for custom in &config.registry.custom {
        if custom.name.trim().is_empty() {
            bail!("Custom set-class name for {:?} is empty", custom.pcs);
        }
    }
    Ok(())
}
