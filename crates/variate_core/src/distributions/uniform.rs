//! Continuous uniform distribution on [a, b).

use super::Sampler;
use crate::rng::UniformSource;
use crate::types::Result;
use crate::validation::require_ordered;

/// Uniform distribution with bounds `a < b`: `a + u·(b − a)`.
///
/// `Uniform::new(0.0, 1.0)` passes source draws through unchanged, so its
/// variates lie in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    /// Creates a uniform distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless both bounds are finite, `low < high` and
    /// `high − low` is finite.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        require_ordered("a", low, "b", high)?;
        Ok(Self { low, high })
    }

    /// The standard uniform distribution on [0, 1).
    pub fn standard() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Sampler for Uniform {
    type Output = f64;

    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        self.low + source.next_uniform() * (self.high - self.low)
    }

    fn mean(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    fn variance(&self) -> f64 {
        let width = self.high - self.low;
        width * width / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSource;

    #[test]
    fn test_affine_transform() {
        let uniform = Uniform::new(2.0, 6.0).unwrap();
        assert_eq!(uniform.sample(&mut FixedSource::new(0.25)), 3.0);
        assert_eq!(uniform.sample(&mut FixedSource::new(0.0)), 2.0);
    }

    #[test]
    fn test_standard_passes_draws_through() {
        let standard = Uniform::standard();
        assert_eq!(standard, Uniform::new(0.0, 1.0).unwrap());
        assert_eq!(standard.sample(&mut FixedSource::new(0.375)), 0.375);
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        assert!(Uniform::new(1.0, 1.0).unwrap_err().is_invalid_parameter());
        assert!(Uniform::new(3.0, -3.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_overflowing_width() {
        let err = Uniform::new(-1e308, 1e308).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("finite width"));

        let wide = Uniform::new(-1e307, 1e307).unwrap();
        assert_eq!(wide.sample(&mut FixedSource::new(0.5)), 0.0);
        assert_eq!(wide.sample(&mut FixedSource::new(0.0)), -1e307);
    }

    #[test]
    fn test_moments() {
        let uniform = Uniform::new(-1.0, 5.0).unwrap();
        assert_eq!(uniform.mean(), 2.0);
        assert_eq!(uniform.variance(), 3.0);
    }
}
