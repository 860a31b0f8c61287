//! Triangular distribution.

use super::Sampler;
use crate::rng::UniformSource;
use crate::types::Result;
use crate::validation::require_ordered;

/// Triangular distribution with `low < mode < high`.
///
/// Inversion with the split point `c = (mode − low)/(high − low)`:
/// draws below `c` use the rising edge `low + w·√(u·c)`, draws at or above
/// `c` the falling edge `high − w·√((1 − u)(1 − c))`, with `w = high − low`.
/// Both formulas agree at `u = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    low: f64,
    mode: f64,
    high: f64,
    /// CDF value at the mode.
    split: f64,
}

impl Triangular {
    /// Creates a triangular distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless all three values are finite,
    /// `low < mode < high` and `high − low` is finite.
    pub fn new(low: f64, mode: f64, high: f64) -> Result<Self> {
        require_ordered("low", low, "mode", mode)?;
        require_ordered("mode", mode, "high", high)?;
        require_ordered("low", low, "high", high)?;
        Ok(Self {
            low,
            mode,
            high,
            split: (mode - low) / (high - low),
        })
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Peak of the density.
    #[inline]
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Sampler for Triangular {
    type Output = f64;

    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        let u = source.next_uniform();
        let width = self.high - self.low;
        if u < self.split {
            self.low + width * (u * self.split).sqrt()
        } else {
            self.high - width * ((1.0 - u) * (1.0 - self.split)).sqrt()
        }
    }

    fn mean(&self) -> f64 {
        (self.low + self.mode + self.high) / 3.0
    }

    fn variance(&self) -> f64 {
        let (a, c, b) = (self.low, self.mode, self.high);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }
}
