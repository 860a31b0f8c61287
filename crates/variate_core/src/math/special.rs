//! Special functions.
//!
//! Only what the closed-form moments need: the Gamma function for the
//! Weibull mean and variance.

use std::f64::consts::PI;

/// Lanczos coefficients (g = 7, n = 9).
#[allow(clippy::excessive_precision)]
const LANCZOS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural logarithm of the Gamma function for `x > 0`.
///
/// Lanczos approximation for `x >= 0.5`, reflection formula below it.
/// Relative error is below 1e-10 on the positive axis.
///
/// # Examples
///
/// ```rust
/// use variate_core::math::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.5 {
        // Γ(x)·Γ(1−x) = π/sin(πx)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut sum = LANCZOS[0];
    for (i, &c) in LANCZOS.iter().enumerate().skip(1) {
        sum += c / (z + i as f64);
    }

    let t = z + 7.5;
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + sum.ln()
}

/// The Gamma function Γ(x) for `x > 0`.
#[inline]
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}
