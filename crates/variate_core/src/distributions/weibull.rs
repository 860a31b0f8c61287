//! Weibull distribution.

use super::Sampler;
use crate::math::special::gamma;
use crate::rng::{positive_uniform, UniformSource};
use crate::types::Result;
use crate::validation::require_strictly_positive;

/// Weibull distribution with scale `λ > 0` and shape `β > 0`.
///
/// `λ` acts as an inverse scale: variates are `(1/λ)·(−ln u)^(1/β)`, so
/// the mean is `Γ(1 + 1/β)/λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    scale: f64,
    shape: f64,
}

impl Weibull {
    /// Creates a Weibull distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless both parameters are strictly positive.
    pub fn new(scale: f64, shape: f64) -> Result<Self> {
        Ok(Self {
            scale: require_strictly_positive("scale", scale)?,
            shape: require_strictly_positive("shape", shape)?,
        })
    }

    /// Scale parameter λ.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape parameter β.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Sampler for Weibull {
    type Output = f64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        (1.0 / self.scale) * (-positive_uniform(source).ln()).powf(1.0 / self.shape)
    }

    fn mean(&self) -> f64 {
        gamma(1.0 + 1.0 / self.shape) / self.scale
    }

    fn variance(&self) -> f64 {
        let g1 = gamma(1.0 + 1.0 / self.shape);
        let g2 = gamma(1.0 + 2.0 / self.shape);
        (g2 - g1 * g1) / (self.scale * self.scale)
    }
}
