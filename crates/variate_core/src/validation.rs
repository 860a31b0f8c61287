//! Parameter validation.
//!
//! Pure predicates that either hand back the validated value or fail with
//! [`VariateError::InvalidParameter`] naming the violated constraint. Every
//! distribution constructor runs these before a sampler exists, so invalid
//! parameters never reach a sampling routine and a failed request never
//! consumes a uniform draw.
//!
//! Non-finite inputs are rejected by every check: NaN fails all
//! comparisons, and infinite rates, scales and bounds have no meaningful
//! variate.

use crate::types::{Result, VariateError};

/// Requires `value > 0` (and finite).
///
/// # Examples
///
/// ```rust
/// use variate_core::validation::require_strictly_positive;
///
/// assert_eq!(require_strictly_positive("rate", 2.0), Ok(2.0));
/// assert!(require_strictly_positive("rate", 0.0).is_err());
/// ```
pub fn require_strictly_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(VariateError::invalid_parameter(
            name,
            value,
            "must be finite and strictly greater than zero",
        ))
    }
}

/// Requires `0 <= value <= 1`.
///
/// # Examples
///
/// ```rust
/// use variate_core::validation::require_probability;
///
/// assert_eq!(require_probability("p", 1.0), Ok(1.0));
/// assert!(require_probability("p", 1.5).is_err());
/// ```
pub fn require_probability(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(VariateError::invalid_parameter(
            name,
            value,
            "must be greater than or equal to zero and less than or equal to one",
        ))
    }
}

/// Requires `0 < value < 1`.
pub fn require_open_probability(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(VariateError::invalid_parameter(
            name,
            value,
            "must be greater than zero and less than one",
        ))
    }
}

/// Requires a finite value (location parameters such as a mean).
pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VariateError::invalid_parameter(name, value, "must be finite"))
    }
}

/// Requires finite bounds with `lower < upper` and a finite `upper − lower`.
///
/// The error names the upper parameter when the ordering or the width fails.
pub fn require_ordered(
    lower_name: &'static str,
    lower: f64,
    upper_name: &'static str,
    upper: f64,
) -> Result<()> {
    require_finite(lower_name, lower)?;
    require_finite(upper_name, upper)?;
    if lower >= upper {
        return Err(VariateError::invalid_parameter(
            upper_name,
            upper,
            format!("must be strictly greater than {} ({})", lower_name, lower),
        ));
    }
    if !(upper - lower).is_finite() {
        return Err(VariateError::invalid_parameter(
            upper_name,
            upper,
            format!("is too far from {} ({}) for a finite width", lower_name, lower),
        ));
    }
    Ok(())
}

/// Requires an integral count of at least one, given as an untyped number.
///
/// Used where the count arrives as text or a float (command line,
/// configuration), so `2.5` and `0` are both rejected.
///
/// # Examples
///
/// ```rust
/// use variate_core::validation::require_count;
///
/// assert_eq!(require_count(3.0), Ok(3));
/// assert!(require_count(2.5).is_err());
/// assert!(require_count(0.0).is_err());
/// ```
pub fn require_count(n: f64) -> Result<usize> {
    if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n <= usize::MAX as f64 {
        Ok(n as usize)
    } else {
        Err(count_error(n))
    }
}

/// Requires a typed count of at least one.
pub fn require_positive_count(n: usize) -> Result<usize> {
    if n >= 1 {
        Ok(n)
    } else {
        Err(count_error(n as f64))
    }
}

fn count_error(n: f64) -> VariateError {
    VariateError::invalid_parameter(
        "count",
        n,
        "number of variates to generate must be an integer greater than or equal to 1",
    )
}
