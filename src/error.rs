// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for set-class analysis.
//!
//! Canonicalization and vector derivation are total and never fail.
//! Errors only arise when a caller asks for something the 12-tone
//! universe cannot provide, or compares set classes with a measure
//! that needs equal cardinalities.

use thiserror::Error;

/// Precondition violations reported by the relation engine and query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A cardinality outside 0..=12 was requested
    #[error("invalid cardinality {0}: must be between 0 and 12")]
    InvalidCardinality(usize),

    /// An equal-cardinality measure was given set classes of different sizes
    #[error("incompatible cardinalities: {left} and {right}")]
    IncompatibleCardinality { left: usize, right: usize },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Fail with `IncompatibleCardinality` unless both sizes match
pub(crate) fn require_equal(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(AnalysisError::IncompatibleCardinality { left, right })
    }
}

/// Fail with `InvalidCardinality` unless the size fits the universe
pub(crate) fn require_cardinality(cardinality: usize) -> Result<()> {
    if cardinality <= crate::set::MODULUS as usize {
        Ok(())
    } else {
        Err(AnalysisError::InvalidCardinality(cardinality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_equal() {
        assert!(require_equal(4, 4).is_ok());
        assert_eq!(
            require_equal(3, 4),
            Err(AnalysisError::IncompatibleCardinality { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_require_cardinality() {
        assert!(require_cardinality(0).is_ok());
        assert!(require_cardinality(12).is_ok());
        assert_eq!(require_cardinality(13), Err(AnalysisError::InvalidCardinality(13)));
    }

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::IncompatibleCardinality { left: 3, right: 5 };
        assert_eq!(err.to_string(), "incompatible cardinalities: 3 and 5");
        assert_eq!(
            AnalysisError::InvalidCardinality(14).to_string(),
            "invalid cardinality 14: must be between 0 and 12"
        );
    }
}
