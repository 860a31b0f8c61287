//! Normal distribution via the Box–Muller transform.

use std::f64::consts::PI;

use super::Sampler;
use crate::rng::{positive_uniform, UniformSource};
use crate::types::Result;
use crate::validation::{require_finite, require_strictly_positive};

/// Normal distribution with mean `m` and variance `σ² > 0`.
///
/// Each variate consumes exactly two draws `u, v` and returns
/// `m + σ·√(−2 ln u)·cos(2πv)`. The sine companion variate is discarded,
/// so draw counts stay fixed per call.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{Normal, Sampler};
/// use variate_core::rng::FixedSource;
///
/// let normal = Normal::new(1.0, 4.0).unwrap();
/// let mut source = FixedSource::new(0.5);
/// let x = normal.sample(&mut source);
/// assert!((x - (1.0 - 2.0 * (2.0 * 2.0_f64.ln()).sqrt())).abs() < 1e-12);
/// assert_eq!(source.draws(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    variance: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a normal distribution from its mean and variance.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the mean is not finite or the variance is not
    /// strictly positive.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        let mean = require_finite("mean", mean)?;
        let variance = require_strictly_positive("variance", variance)?;
        Ok(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
            std_dev: 1.0,
        }
    }

    /// Standard deviation σ.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Sampler for Normal {
    type Output = f64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        let u = positive_uniform(source);
        let v = source.next_uniform();
        self.mean + self.std_dev * ((-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos())
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
