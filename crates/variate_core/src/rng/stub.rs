//! Deterministic uniform sources.
//!
//! These make every formula's output an exact, computable literal and let
//! tests count how many draws an operation consumed.

use super::UniformSource;

/// A source that returns the same value on every draw.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::{FixedSource, UniformSource};
///
/// let mut source = FixedSource::new(0.5);
/// assert_eq!(source.next_uniform(), 0.5);
/// assert_eq!(source.draws(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSource {
    value: f64,
    draws: usize,
}

impl FixedSource {
    /// Creates a source that always yields `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside [0, 1).
    pub fn new(value: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&value),
            "fixed draw {} is outside [0, 1)",
            value
        );
        Self { value, draws: 0 }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for FixedSource {
    fn next_uniform(&mut self) -> f64 {
        self.draws += 1;
        self.value
    }
}

/// A source that cycles through a fixed list of values.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::{SequenceSource, UniformSource};
///
/// let mut source = SequenceSource::new(vec![0.1, 0.9]);
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.next_uniform(), 0.9);
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    draws: usize,
}

impl SequenceSource {
    /// Creates a source cycling through `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or any value is outside [0, 1).
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence source needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "sequence source values must lie in [0, 1)"
        );
        Self { values, draws: 0 }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}
