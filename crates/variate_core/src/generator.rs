//! The variate generator: a uniform source plus the last generated sample.
//!
//! Generation itself is pure (see [`crate::sequence::sample_n`]); this type
//! adds the convenience API per family and remembers the most recent
//! multi-variate sequence so a rendering collaborator can pick it up.

use tracing::debug;

use crate::distributions::{DistributionSpec, GenerationRequest};
use crate::rng::{UniformSource, VariateRng};
use crate::sequence::Variates;
use crate::types::Result;

/// Generates variates from an owned uniform source.
///
/// Only successful requests with `n > 1` replace the current sequence.
/// A failed request leaves it untouched and consumes no draws.
///
/// # Examples
///
/// ```rust
/// use variate_core::VariateGenerator;
///
/// let mut generator = VariateGenerator::from_seed(42);
/// let sample = generator.exponential(2.0, 1_000).unwrap();
/// assert_eq!(sample.len(), 1_000);
/// assert_eq!(generator.current(), Some(&sample));
///
/// assert!(generator.exponential(-1.0, 10).is_err());
/// assert_eq!(generator.current(), Some(&sample));
/// ```
#[derive(Debug, Clone)]
pub struct VariateGenerator<S: UniformSource = VariateRng> {
    source: S,
    current: Option<Variates>,
}

impl VariateGenerator<VariateRng> {
    /// Creates a generator over a seeded [`VariateRng`].
    pub fn from_seed(seed: u64) -> Self {
        Self::new(VariateRng::from_seed(seed))
    }

    /// Creates a generator over an entropy-seeded [`VariateRng`].
    pub fn from_entropy() -> Self {
        Self::new(VariateRng::from_entropy())
    }

    /// Seed of the underlying source.
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: UniformSource> VariateGenerator<S> {
    /// Creates a generator over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The most recently generated multi-variate sequence, if any.
    pub fn current(&self) -> Option<&Variates> {
        self.current.as_ref()
    }

    /// Runs a validated request.
    ///
    /// # Errors
    ///
    /// None in practice: the request's count is already validated.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Variates> {
        debug!(
            family = %request.family(),
            count = request.count(),
            "generating variates"
        );
        let variates = request
            .distribution()
            .sample_n(request.count(), &mut self.source)?;
        if request.count() > 1 {
            self.current = Some(variates.clone());
        }
        Ok(variates)
    }

    /// Validates `spec` and `n`, then generates.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a zero `n` or any out-of-domain parameter.
    pub fn generate_spec(&mut self, spec: DistributionSpec, n: usize) -> Result<Variates> {
        let request = GenerationRequest::new(spec, n).inspect_err(|err| {
            debug!(family = %spec.family(), error = %err, "rejected generation request");
        })?;
        self.generate(&request)
    }

    /// Bernoulli trials (binomial with one trial) with probability `p ∈ [0, 1]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for `p` outside [0, 1] or `n == 0`.
    pub fn binomial(&mut self, p: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Binomial { p }, n)
    }

    /// Geometric variates with `p ∈ (0, 1)`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for `p` outside (0, 1) or `n == 0`.
    pub fn geometric(&mut self, p: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Geometric { p }, n)
    }

    /// Poisson variates with rate `λ > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive rate or `n == 0`.
    pub fn poisson(&mut self, rate: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Poisson { rate }, n)
    }

    /// Uniform variates on [a, b).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `a < b`, or for `n == 0`.
    pub fn uniform(&mut self, a: f64, b: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Uniform { a, b }, n)
    }

    /// Exponential variates with rate `λ > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive rate or `n == 0`.
    pub fn exponential(&mut self, rate: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Exponential { rate }, n)
    }

    /// Normal variates with the given mean and variance.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive variance or `n == 0`.
    pub fn normal(&mut self, mean: f64, variance: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Normal { mean, variance }, n)
    }

    /// Triangular variates with `low < mode < high`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for misordered bounds or `n == 0`.
    pub fn triangular(&mut self, low: f64, mode: f64, high: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Triangular { low, mode, high }, n)
    }

    /// Weibull variates with scale `λ > 0` and shape `β > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive parameter or `n == 0`.
    pub fn weibull(&mut self, scale: f64, shape: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Weibull { scale, shape }, n)
    }

    /// Gamma variates with shape `α > 0` and rate `β > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive parameter or `n == 0`.
    pub fn gamma(&mut self, shape: f64, rate: f64, n: usize) -> Result<Variates> {
        self.generate_spec(DistributionSpec::Gamma { shape, rate }, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSource;

    #[test]
    fn test_single_variate_does_not_replace_current() {
        let mut generator = VariateGenerator::from_seed(1);
        let batch = generator.normal(0.0, 1.0, 5).unwrap();
        let single = generator.normal(0.0, 1.0, 1).unwrap();

        assert_eq!(single.len(), 1);
        assert_eq!(generator.current(), Some(&batch));
    }

    #[test]
    fn test_failed_request_keeps_state_and_draws() {
        let mut generator = VariateGenerator::new(FixedSource::new(0.5));
        let batch = generator.uniform(0.0, 4.0, 3).unwrap();
        assert_eq!(generator.source().draws(), 3);

        assert!(generator.binomial(1.5, 3).unwrap_err().is_invalid_parameter());
        assert!(generator.geometric(1.0, 3).is_err());
        assert!(generator.gamma(2.0, 1.0, 0).is_err());
        assert!(generator.triangular(0.0, 2.0, 1.0, 4).is_err());

        assert_eq!(generator.current(), Some(&batch));
        assert_eq!(generator.into_source().draws(), 3);
    }

    #[test]
    fn test_each_family_produces_requested_length() {
        let mut generator = VariateGenerator::from_seed(99);
        let n = 17;
        let outputs = [
            generator.binomial(0.3, n).unwrap(),
            generator.geometric(0.3, n).unwrap(),
            generator.poisson(2.0, n).unwrap(),
            generator.uniform(-1.0, 1.0, n).unwrap(),
            generator.exponential(1.5, n).unwrap(),
            generator.normal(2.0, 0.5, n).unwrap(),
            generator.triangular(0.0, 1.0, 4.0, n).unwrap(),
            generator.weibull(1.0, 2.0, n).unwrap(),
            generator.gamma(0.5, 1.0, n).unwrap(),
        ];
        for output in &outputs {
            assert_eq!(output.len(), n);
        }
        assert!(outputs[..3].iter().all(Variates::is_discrete));
        assert!(!outputs[3..].iter().any(Variates::is_discrete));
        assert_eq!(generator.current(), Some(&outputs[8]));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = VariateGenerator::from_seed(2024);
        let mut b = VariateGenerator::from_seed(2024);
        assert_eq!(a.seed(), 2024);
        assert_eq!(a.gamma(2.5, 1.0, 50).unwrap(), b.gamma(2.5, 1.0, 50).unwrap());
    }
}
