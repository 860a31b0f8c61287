//! Variate sequences and the sequence driver.
//!
//! Generation always returns a sequence: a single draw is a sequence of
//! length one, unwrapped explicitly with [`VariateSequence::scalar`].

use num_traits::ToPrimitive;

use crate::distributions::Sampler;
use crate::rng::UniformSource;
use crate::types::Result;
use crate::validation::require_positive_count;

/// An ordered, immutable, non-empty sequence of variates in generation order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariateSequence<T> {
    values: Vec<T>,
}

impl<T: Copy> VariateSequence<T> {
    /// Number of variates.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; sequences hold at least one variate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The variates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates over the variates in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// The single variate of a length-one sequence, `None` otherwise.
    pub fn scalar(&self) -> Option<T> {
        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Consumes the sequence, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Copy + ToPrimitive> VariateSequence<T> {
    /// The variates converted to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.values.iter().filter_map(ToPrimitive::to_f64).sum();
        sum / self.values.len() as f64
    }

    /// Unbiased sample variance; zero for a single variate.
    pub fn variance(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self
            .values
            .iter()
            .filter_map(ToPrimitive::to_f64)
            .map(|x| (x - mean) * (x - mean))
            .sum();
        sum_sq / (n - 1) as f64
    }
}

impl<'a, T> IntoIterator for &'a VariateSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Draws `count` independent variates from `sampler`.
///
/// The count is validated before any draw is consumed. Each variate uses
/// fresh draws from `source`.
///
/// # Errors
///
/// `InvalidParameter` if `count` is zero.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::Uniform;
/// use variate_core::rng::VariateRng;
/// use variate_core::sequence::sample_n;
///
/// let mut rng = VariateRng::from_seed(1);
/// let seq = sample_n(&Uniform::standard(), 100, &mut rng).unwrap();
/// assert_eq!(seq.len(), 100);
/// assert!(seq.iter().all(|u| (0.0..1.0).contains(u)));
/// ```
pub fn sample_n<D, S>(
    sampler: &D,
    count: usize,
    source: &mut S,
) -> Result<VariateSequence<D::Output>>
where
    D: Sampler,
    S: UniformSource + ?Sized,
{
    let count = require_positive_count(count)?;
    let values = (0..count).map(|_| sampler.sample(source)).collect();
    Ok(VariateSequence { values })
}

/// The output of a generation request: integer or real variates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "values", rename_all = "snake_case")
)]
pub enum Variates {
    /// Bernoulli, geometric and Poisson variates
    Discrete(VariateSequence<u64>),
    /// Real-valued variates
    Continuous(VariateSequence<f64>),
}

impl Variates {
    /// Number of variates.
    pub fn len(&self) -> usize {
        match self {
            Variates::Discrete(seq) => seq.len(),
            Variates::Continuous(seq) => seq.len(),
        }
    }

    /// Always `false`; sequences hold at least one variate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for integer variates.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Variates::Discrete(_))
    }

    /// The variates converted to `f64`, for plotting and summaries.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Variates::Discrete(seq) => seq.to_f64_vec(),
            Variates::Continuous(seq) => seq.to_f64_vec(),
        }
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        match self {
            Variates::Discrete(seq) => seq.mean(),
            Variates::Continuous(seq) => seq.mean(),
        }
    }

    /// Unbiased sample variance.
    pub fn variance(&self) -> f64 {
        match self {
            Variates::Discrete(seq) => seq.variance(),
            Variates::Continuous(seq) => seq.variance(),
        }
    }

    /// The integer variates, if discrete.
    pub fn as_discrete(&self) -> Option<&VariateSequence<u64>> {
        match self {
            Variates::Discrete(seq) => Some(seq),
            Variates::Continuous(_) => None,
        }
    }

    /// The real variates, if continuous.
    pub fn as_continuous(&self) -> Option<&VariateSequence<f64>> {
        match self {
            Variates::Continuous(seq) => Some(seq),
            Variates::Discrete(_) => None,
        }
    }
}
