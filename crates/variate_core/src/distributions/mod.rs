//! # Distribution Samplers
//!
//! Each family is a small `Copy` value built by a validating constructor.
//! Once constructed, it can only hold parameters inside their domain, so
//! sampling itself is infallible.
//!
//! ## Methods
//!
//! | Family | Method | Draws per variate |
//! |---|---|---|
//! | [`Bernoulli`] | inversion | 1 |
//! | [`Geometric`] | inversion | 1 |
//! | [`Uniform`] | inversion | 1 |
//! | [`Exponential`] | inversion | 1 |
//! | [`Weibull`] | inversion | 1 |
//! | [`Triangular`] | inversion | 1 |
//! | [`Normal`] | Box–Muller transform | 2 |
//! | [`Poisson`] | product of uniforms | λ + 1 on average |
//! | [`Gamma`] | two-regime rejection | unbounded, geometric retries |
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::distributions::{Exponential, Sampler};
//! use variate_core::rng::VariateRng;
//!
//! let exponential = Exponential::new(2.0).unwrap();
//! let mut rng = VariateRng::from_seed(42);
//! let x = exponential.sample(&mut rng);
//! assert!(x >= 0.0);
//! ```

mod bernoulli;
mod exponential;
mod gamma;
mod geometric;
mod normal;
mod poisson;
mod request;
mod triangular;
mod uniform;
mod weibull;

pub use bernoulli::Bernoulli;
pub use exponential::Exponential;
pub use gamma::{Gamma, GammaRegime};
pub use geometric::Geometric;
pub use normal::Normal;
pub use poisson::Poisson;
pub use request::{DistributionSpec, Family, GenerationRequest, ValidatedDistribution};
pub use triangular::Triangular;
pub use uniform::Uniform;
pub use weibull::Weibull;

use crate::rng::UniformSource;

/// A validated distribution that turns uniform draws into one variate.
///
/// Implementations consume draws only from the given source and carry no
/// mutable state, so one sampler may be reused for any number of variates.
pub trait Sampler {
    /// The variate type: `u64` for discrete families, `f64` otherwise.
    type Output: Copy;

    /// Draws a single variate.
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> Self::Output;

    /// Theoretical mean of the distribution.
    fn mean(&self) -> f64;

    /// Theoretical variance of the distribution.
    fn variance(&self) -> f64;
}
