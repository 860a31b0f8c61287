//! Geometric distribution (number of trials up to and including the first success).

use super::Sampler;
use crate::rng::{positive_uniform, UniformSource};
use crate::types::Result;
use crate::validation::require_open_probability;

/// Geometric distribution on {1, 2, ...} with success probability `p ∈ (0, 1)`.
///
/// Inversion: `⌈ln(u) / ln(1 − p)⌉`. The denominator is computed once at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
    /// ln(1 − p), strictly negative.
    ln_failure: f64,
}

impl Geometric {
    /// Creates a geometric distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `0 < p < 1`.
    pub fn new(p: f64) -> Result<Self> {
        let p = require_open_probability("p", p)?;
        Ok(Self {
            p,
            ln_failure: (-p).ln_1p(),
        })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Sampler for Geometric {
    type Output = u64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> u64 {
        let u = positive_uniform(source);
        // Saturating float-to-int cast for astronomically small p.
        (u.ln() / self.ln_failure).ceil() as u64
    }

    fn mean(&self) -> f64 {
        1.0 / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}
