//! Probability-normalised histograms of generated sequences.
//!
//! This is the data side of the rendering collaborator: it takes a finished
//! sequence as an explicit argument and never reads generator state. Each
//! bin carries its empirical probability (count / total), so the bin
//! probabilities sum to one.

use std::fmt::Write as _;

use crate::sequence::Variates;
use crate::types::{Result, VariateError};

/// One histogram bin covering `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Number of values in the bin
    pub count: usize,
    /// `count / total`
    pub probability: f64,
}

/// Equal-width histogram with empirical probabilities.
///
/// # Examples
///
/// ```rust
/// use variate_core::histogram::Histogram;
///
/// let histogram = Histogram::from_values(&[0.0, 0.5, 1.0, 1.5], 2).unwrap();
/// assert_eq!(histogram.bins().len(), 2);
/// assert_eq!(histogram.bins()[0].probability, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    total: usize,
}

impl Histogram {
    /// Bins the finite values into `bins` equal-width bins over `[min, max]`.
    ///
    /// Non-finite values are skipped. If every value is equal, a single
    /// bin holds the whole sample.
    ///
    /// # Errors
    ///
    /// - `InvalidBins` if `bins` is zero
    /// - `EmptySample` if there is no finite value
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        let (min, max) = finite_range(values, bins)?;
        Ok(Self::with_edges(values, bins, min, max))
    }

    /// Bins a generated sequence.
    ///
    /// Integer variates get unit-aligned bins when the value range is
    /// narrower than `bins`, so each integer has its own bar.
    ///
    /// # Errors
    ///
    /// As for [`Histogram::from_values`].
    pub fn for_variates(variates: &Variates, bins: usize) -> Result<Self> {
        let values = variates.to_f64_vec();
        let (min, max) = finite_range(&values, bins)?;
        if variates.is_discrete() {
            let span = (max - min) as usize + 1;
            if span <= bins {
                return Ok(Self::with_edges(&values, span, min - 0.5, max + 0.5));
            }
        }
        Ok(Self::with_edges(&values, bins, min, max))
    }

    fn with_edges(values: &[f64], bins: usize, min: f64, max: f64) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let total = finite.clone().count();

        if max <= min {
            return Self {
                bins: vec![Bin {
                    lower: min,
                    upper: max,
                    count: total,
                    probability: 1.0,
                }],
                total,
            };
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for value in finite {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count,
                probability: count as f64 / total as f64,
            })
            .collect();

        Self { bins, total }
    }

    /// The bins in ascending order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of values binned.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Renders a horizontal bar chart, one line per bin.
    ///
    /// Bars are scaled so the most probable bin spans `width` characters.
    pub fn render_text(&self, title: Option<&str>, width: usize) -> String {
        let mut out = String::new();
        if let Some(title) = title {
            let _ = writeln!(out, "{}", title);
        }
        let _ = writeln!(out, "{:>25} | Probability(x)", "x");

        let peak = self
            .bins
            .iter()
            .map(|bin| bin.probability)
            .fold(0.0_f64, f64::max);

        for bin in &self.bins {
            let length = if peak > 0.0 {
                ((bin.probability / peak) * width as f64).round() as usize
            } else {
                0
            };
            let _ = writeln!(
                out,
                "[{:>10.4}, {:>10.4}) | {:<bar$} {:.4}",
                bin.lower,
                bin.upper,
                "#".repeat(length),
                bin.probability,
                bar = width
            );
        }
        out
    }
}

fn finite_range(values: &[f64], bins: usize) -> Result<(f64, f64)> {
    if bins == 0 {
        return Err(VariateError::InvalidBins { bins });
    }
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
        .ok_or(VariateError::EmptySample)
}
