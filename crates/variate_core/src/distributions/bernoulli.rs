//! Bernoulli trial (binomial with a single trial).

use super::Sampler;
use crate::rng::UniformSource;
use crate::types::Result;
use crate::validation::require_probability;

/// Bernoulli distribution with success probability `p ∈ [0, 1]`.
///
/// Yields `1` when the draw `u` satisfies `u <= p`, else `0`. The endpoints
/// are deterministic: `p = 0` always yields `0` (even for a zero draw) and
/// `p = 1` always yields `1`. One draw is consumed either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `p` is outside [0, 1].
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self {
            p: require_probability("p", p)?,
        })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Sampler for Bernoulli {
    type Output = u64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> u64 {
        let u = source.next_uniform();
        u64::from(self.p > 0.0 && u <= self.p)
    }

    fn mean(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}
