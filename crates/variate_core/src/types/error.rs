//! Error types for variate generation.
//!
//! This module provides:
//! - `VariateError`: Errors raised while validating generation requests
//! - `Result`: Crate-wide result alias

use thiserror::Error;

/// Variate generation errors.
///
/// Every variant is raised synchronously, before any uniform draw is
/// consumed, so a failed call never advances the uniform source.
///
/// # Variants
/// - `InvalidParameter`: A distribution parameter or the variate count is
///   outside its domain
/// - `InvalidBins`: Histogram bin count of zero
/// - `EmptySample`: Histogram requested over an empty sequence
///
/// # Examples
/// ```
/// use variate_core::types::VariateError;
///
/// let err = VariateError::invalid_parameter("p", 1.5, "must lie in [0, 1]");
/// assert_eq!(format!("{}", err), "Invalid parameter 'p' = 1.5: must lie in [0, 1]");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VariateError {
    /// A parameter violates its validity domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter role (e.g. `rate`, `shape`, `count`)
        name: &'static str,
        /// The rejected value
        value: f64,
        /// The violated constraint
        reason: String,
    },

    /// Histogram bin count must be at least one.
    #[error("Invalid bin count {bins}: must be at least 1")]
    InvalidBins {
        /// The rejected bin count
        bins: usize,
    },

    /// A histogram needs at least one value.
    #[error("Cannot build a histogram from an empty sample")]
    EmptySample,
}

impl VariateError {
    /// Builds an [`VariateError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Returns `true` for parameter-domain violations.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VariateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display_names_constraint() {
        let err = VariateError::invalid_parameter("rate", -2.0, "must be strictly greater than zero");
        let msg = err.to_string();
        assert!(msg.contains("rate"));
        assert!(msg.contains("-2"));
        assert!(msg.contains("strictly greater than zero"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_histogram_errors_are_not_parameter_errors() {
        assert!(!VariateError::InvalidBins { bins: 0 }.is_invalid_parameter());
        assert!(!VariateError::EmptySample.is_invalid_parameter());
        assert!(VariateError::InvalidBins { bins: 0 }
            .to_string()
            .contains("at least 1"));
    }
}
