//! Exponential distribution.

use super::Sampler;
use crate::rng::{positive_uniform, UniformSource};
use crate::types::Result;
use crate::validation::require_strictly_positive;

/// Exponential distribution with rate `λ > 0`: `−(1/λ)·ln(u)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `rate > 0`.
    pub fn new(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: require_strictly_positive("rate", rate)?,
        })
    }

    /// Rate parameter λ.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Sampler for Exponential {
    type Output = f64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        -(1.0 / self.rate) * positive_uniform(source).ln()
    }

    fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }
}
