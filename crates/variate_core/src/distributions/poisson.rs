//! Poisson distribution via the product-of-uniforms method.

use super::Sampler;
use crate::rng::{positive_uniform, UniformSource};
use crate::types::Result;
use crate::validation::require_strictly_positive;

/// Poisson distribution with rate `λ > 0`.
///
/// Knuth's product method: multiply fresh uniform draws into a running
/// product until it falls to `e^(−λ)` or below, counting the extra draws.
/// The expected number of draws per variate is `λ + 1`.
///
/// The product is tracked as a sum of logarithms and compared with `−λ`,
/// so neither side underflows for large rates.
///
/// # Limitations
///
/// Cost grows linearly with `λ` and the loop has no iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    rate: f64,
}

impl Poisson {
    /// Creates a Poisson distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `rate > 0`.
    pub fn new(rate: f64) -> Result<Self> {
        let rate = require_strictly_positive("rate", rate)?;
        Ok(Self { rate })
    }

    /// Rate parameter λ.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Sampler for Poisson {
    type Output = u64;

    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> u64 {
        let threshold = -self.rate;
        let mut count = 0;
        let mut log_product = positive_uniform(source).ln();
        while log_product > threshold {
            count += 1;
            log_product += positive_uniform(source).ln();
        }
        count
    }

    fn mean(&self) -> f64 {
        self.rate
    }

    fn variance(&self) -> f64 {
        self.rate
    }
}
