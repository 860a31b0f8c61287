//! Generation requests: a distribution tag with raw parameters and a count.
//!
//! A [`DistributionSpec`] is untrusted input. Validation turns it into a
//! [`ValidatedDistribution`] holding one of the sampler types, and a
//! [`GenerationRequest`] pairs that with a validated count. Both are
//! immutable once built.

use std::fmt;
use std::str::FromStr;

use super::{
    Bernoulli, Exponential, Gamma, Geometric, Normal, Poisson, Sampler, Triangular, Uniform,
    Weibull,
};
use crate::rng::UniformSource;
use crate::sequence::{sample_n, Variates};
use crate::types::Result;
use crate::validation::{require_count, require_positive_count};

/// Distribution families supported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    /// Bernoulli trial (binomial, one trial)
    Binomial,
    /// Geometric, trials to first success
    Geometric,
    /// Poisson counts
    Poisson,
    /// Continuous uniform
    Uniform,
    /// Exponential
    Exponential,
    /// Normal
    Normal,
    /// Triangular
    Triangular,
    /// Weibull
    Weibull,
    /// Gamma
    Gamma,
}

impl Family {
    /// All families, in declaration order.
    pub const ALL: [Family; 9] = [
        Family::Binomial,
        Family::Geometric,
        Family::Poisson,
        Family::Uniform,
        Family::Exponential,
        Family::Normal,
        Family::Triangular,
        Family::Weibull,
        Family::Gamma,
    ];

    /// Lower-case family name.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Binomial => "binomial",
            Family::Geometric => "geometric",
            Family::Poisson => "poisson",
            Family::Uniform => "uniform",
            Family::Exponential => "exponential",
            Family::Normal => "normal",
            Family::Triangular => "triangular",
            Family::Weibull => "weibull",
            Family::Gamma => "gamma",
        }
    }

    /// Parameter names, in the order the family's constructor takes them.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Family::Binomial | Family::Geometric => &["p"],
            Family::Poisson | Family::Exponential => &["rate"],
            Family::Uniform => &["a", "b"],
            Family::Normal => &["mean", "variance"],
            Family::Triangular => &["low", "mode", "high"],
            Family::Weibull => &["scale", "shape"],
            Family::Gamma => &["shape", "rate"],
        }
    }

    /// Returns `true` for integer-valued families.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Family::Binomial | Family::Geometric | Family::Poisson)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binomial" | "bernoulli" => Ok(Family::Binomial),
            "geometric" | "geom" => Ok(Family::Geometric),
            "poisson" => Ok(Family::Poisson),
            "uniform" => Ok(Family::Uniform),
            "exponential" | "exp" => Ok(Family::Exponential),
            "normal" | "gaussian" => Ok(Family::Normal),
            "triangular" | "triang" => Ok(Family::Triangular),
            "weibull" => Ok(Family::Weibull),
            "gamma" => Ok(Family::Gamma),
            _ => Err(format!(
                "Unknown distribution family: {}. Supported: {}",
                s,
                Family::ALL
                    .iter()
                    .map(Family::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// A distribution tag with its raw, not yet validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "family", rename_all = "snake_case"))]
pub enum DistributionSpec {
    /// Bernoulli trial with success probability `p`.
    Binomial {
        /// Success probability
        p: f64,
    },
    /// Geometric with success probability `p`.
    Geometric {
        /// Success probability
        p: f64,
    },
    /// Poisson with rate `rate`.
    Poisson {
        /// Rate λ
        rate: f64,
    },
    /// Uniform on [a, b).
    Uniform {
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },
    /// Exponential with rate `rate`.
    Exponential {
        /// Rate λ
        rate: f64,
    },
    /// Normal with mean and variance.
    Normal {
        /// Mean
        mean: f64,
        /// Variance σ²
        variance: f64,
    },
    /// Triangular on [low, high] peaking at `mode`.
    Triangular {
        /// Lower bound
        low: f64,
        /// Peak
        mode: f64,
        /// Upper bound
        high: f64,
    },
    /// Weibull with inverse scale `scale` and shape `shape`.
    Weibull {
        /// Scale λ
        scale: f64,
        /// Shape β
        shape: f64,
    },
    /// Gamma with shape and rate.
    Gamma {
        /// Shape α
        shape: f64,
        /// Rate β
        rate: f64,
    },
}

impl DistributionSpec {
    /// The family tag.
    pub fn family(&self) -> Family {
        match self {
            DistributionSpec::Binomial { .. } => Family::Binomial,
            DistributionSpec::Geometric { .. } => Family::Geometric,
            DistributionSpec::Poisson { .. } => Family::Poisson,
            DistributionSpec::Uniform { .. } => Family::Uniform,
            DistributionSpec::Exponential { .. } => Family::Exponential,
            DistributionSpec::Normal { .. } => Family::Normal,
            DistributionSpec::Triangular { .. } => Family::Triangular,
            DistributionSpec::Weibull { .. } => Family::Weibull,
            DistributionSpec::Gamma { .. } => Family::Gamma,
        }
    }

    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first violated constraint.
    pub fn validate(&self) -> Result<ValidatedDistribution> {
        Ok(match *self {
            DistributionSpec::Binomial { p } => ValidatedDistribution::Binomial(Bernoulli::new(p)?),
            DistributionSpec::Geometric { p } => {
                ValidatedDistribution::Geometric(Geometric::new(p)?)
            }
            DistributionSpec::Poisson { rate } => {
                ValidatedDistribution::Poisson(Poisson::new(rate)?)
            }
            DistributionSpec::Uniform { a, b } => ValidatedDistribution::Uniform(Uniform::new(a, b)?),
            DistributionSpec::Exponential { rate } => {
                ValidatedDistribution::Exponential(Exponential::new(rate)?)
            }
            DistributionSpec::Normal { mean, variance } => {
                ValidatedDistribution::Normal(Normal::new(mean, variance)?)
            }
            DistributionSpec::Triangular { low, mode, high } => {
                ValidatedDistribution::Triangular(Triangular::new(low, mode, high)?)
            }
            DistributionSpec::Weibull { scale, shape } => {
                ValidatedDistribution::Weibull(Weibull::new(scale, shape)?)
            }
            DistributionSpec::Gamma { shape, rate } => {
                ValidatedDistribution::Gamma(Gamma::new(shape, rate)?)
            }
        })
    }
}

/// A distribution whose parameters passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedDistribution {
    /// Bernoulli trial
    Binomial(Bernoulli),
    /// Geometric
    Geometric(Geometric),
    /// Poisson
    Poisson(Poisson),
    /// Uniform
    Uniform(Uniform),
    /// Exponential
    Exponential(Exponential),
    /// Normal
    Normal(Normal),
    /// Triangular
    Triangular(Triangular),
    /// Weibull
    Weibull(Weibull),
    /// Gamma
    Gamma(Gamma),
}

impl ValidatedDistribution {
    /// The family tag.
    pub fn family(&self) -> Family {
        match self {
            ValidatedDistribution::Binomial(_) => Family::Binomial,
            ValidatedDistribution::Geometric(_) => Family::Geometric,
            ValidatedDistribution::Poisson(_) => Family::Poisson,
            ValidatedDistribution::Uniform(_) => Family::Uniform,
            ValidatedDistribution::Exponential(_) => Family::Exponential,
            ValidatedDistribution::Normal(_) => Family::Normal,
            ValidatedDistribution::Triangular(_) => Family::Triangular,
            ValidatedDistribution::Weibull(_) => Family::Weibull,
            ValidatedDistribution::Gamma(_) => Family::Gamma,
        }
    }

    /// Theoretical mean.
    pub fn mean(&self) -> f64 {
        match self {
            ValidatedDistribution::Binomial(d) => d.mean(),
            ValidatedDistribution::Geometric(d) => d.mean(),
            ValidatedDistribution::Poisson(d) => d.mean(),
            ValidatedDistribution::Uniform(d) => d.mean(),
            ValidatedDistribution::Exponential(d) => d.mean(),
            ValidatedDistribution::Normal(d) => d.mean(),
            ValidatedDistribution::Triangular(d) => d.mean(),
            ValidatedDistribution::Weibull(d) => d.mean(),
            ValidatedDistribution::Gamma(d) => d.mean(),
        }
    }

    /// Theoretical variance.
    pub fn variance(&self) -> f64 {
        match self {
            ValidatedDistribution::Binomial(d) => d.variance(),
            ValidatedDistribution::Geometric(d) => d.variance(),
            ValidatedDistribution::Poisson(d) => d.variance(),
            ValidatedDistribution::Uniform(d) => d.variance(),
            ValidatedDistribution::Exponential(d) => d.variance(),
            ValidatedDistribution::Normal(d) => d.variance(),
            ValidatedDistribution::Triangular(d) => d.variance(),
            ValidatedDistribution::Weibull(d) => d.variance(),
            ValidatedDistribution::Gamma(d) => d.variance(),
        }
    }

    /// Draws `count` independent variates.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `count` is zero; no draw is consumed then.
    pub fn sample_n<S: UniformSource + ?Sized>(
        &self,
        count: usize,
        source: &mut S,
    ) -> Result<Variates> {
        Ok(match self {
            ValidatedDistribution::Binomial(d) => Variates::Discrete(sample_n(d, count, source)?),
            ValidatedDistribution::Geometric(d) => Variates::Discrete(sample_n(d, count, source)?),
            ValidatedDistribution::Poisson(d) => Variates::Discrete(sample_n(d, count, source)?),
            ValidatedDistribution::Uniform(d) => Variates::Continuous(sample_n(d, count, source)?),
            ValidatedDistribution::Exponential(d) => {
                Variates::Continuous(sample_n(d, count, source)?)
            }
            ValidatedDistribution::Normal(d) => Variates::Continuous(sample_n(d, count, source)?),
            ValidatedDistribution::Triangular(d) => {
                Variates::Continuous(sample_n(d, count, source)?)
            }
            ValidatedDistribution::Weibull(d) => Variates::Continuous(sample_n(d, count, source)?),
            ValidatedDistribution::Gamma(d) => Variates::Continuous(sample_n(d, count, source)?),
        })
    }
}

/// A validated distribution together with the number of variates to draw.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{DistributionSpec, Family, GenerationRequest};
///
/// let request = GenerationRequest::new(DistributionSpec::Poisson { rate: 3.0 }, 10).unwrap();
/// assert_eq!(request.family(), Family::Poisson);
/// assert_eq!(request.count(), 10);
///
/// assert!(GenerationRequest::new(DistributionSpec::Poisson { rate: 3.0 }, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest {
    distribution: ValidatedDistribution,
    count: usize,
}

impl GenerationRequest {
    /// Validates the count, then the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a zero count or any out-of-domain parameter.
    pub fn new(spec: DistributionSpec, count: usize) -> Result<Self> {
        let count = require_positive_count(count)?;
        Ok(Self {
            distribution: spec.validate()?,
            count,
        })
    }

    /// Like [`GenerationRequest::new`] for a count that arrives untyped.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a fractional, non-finite or sub-one count, or
    /// any out-of-domain parameter.
    pub fn with_raw_count(spec: DistributionSpec, count: f64) -> Result<Self> {
        Self::new(spec, require_count(count)?)
    }

    /// The validated distribution.
    #[inline]
    pub fn distribution(&self) -> &ValidatedDistribution {
        &self.distribution
    }

    /// The family tag.
    #[inline]
    pub fn family(&self) -> Family {
        self.distribution.family()
    }

    /// Number of variates to draw.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
