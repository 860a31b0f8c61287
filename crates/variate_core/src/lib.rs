//! # variate_core: Random Variate Generation
//!
//! Pseudo-random variates from common probability distributions, built
//! from a single primitive: independent draws uniform on [0, 1).
//!
//! ## Layout
//!
//! - [`rng`]: The [`rng::UniformSource`] trait, the seeded default source and
//!   deterministic test sources
//! - [`validation`]: Domain checks run before any draw is consumed
//! - [`distributions`]: One sampler per family (inversion, Box–Muller,
//!   product-of-uniforms, two-regime gamma rejection)
//! - [`sequence`]: The sequence driver and its output types
//! - [`generator`]: [`VariateGenerator`], which owns a source and remembers
//!   the last generated sample
//! - [`histogram`]: Probability-normalised histograms for rendering
//! - [`math`]: Special functions for theoretical moments
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::distributions::{Gamma, Sampler};
//! use variate_core::rng::VariateRng;
//! use variate_core::sequence::sample_n;
//!
//! let gamma = Gamma::new(0.5, 2.0).unwrap();
//! let mut rng = VariateRng::from_seed(7);
//! let sample = sample_n(&gamma, 1_000, &mut rng).unwrap();
//!
//! assert_eq!(sample.len(), 1_000);
//! assert!(sample.iter().all(|&x| x > 0.0));
//! assert_eq!(gamma.mean(), 0.25);
//! ```
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. Rejection and
//! product loops run to completion without a retry cap. A source must not
//! be shared between concurrent generation calls; give each call its own
//! seeded source.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for requests, sequences and histograms

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod generator;
pub mod histogram;
pub mod math;
pub mod rng;
pub mod sequence;
pub mod types;
pub mod validation;

pub use distributions::{DistributionSpec, Family, GenerationRequest, Sampler};
pub use generator::VariateGenerator;
pub use sequence::{sample_n, VariateSequence, Variates};
pub use types::{Result, VariateError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
