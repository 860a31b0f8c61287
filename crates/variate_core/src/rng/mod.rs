//! # Uniform Source
//!
//! Every variate in this crate is derived from draws on [0, 1) supplied by a
//! [`UniformSource`]. No other module touches randomness directly.
//!
//! ## Module Structure
//!
//! - [`source`]: The [`UniformSource`] trait and the `ln`-safe draw helper
//! - [`prng`]: [`VariateRng`], the seeded default source backed by `rand::StdRng`
//! - [`stub`]: Deterministic sources for exact, reproducible tests
//!
//! ## Reproducibility
//!
//! A source is seeded once, either explicitly or from entropy at the process
//! boundary, and the seed is kept for logging. Draws are strictly ordered: a
//! source must not be shared between concurrent generation calls without
//! external synchronisation. Parallel callers should give each call its own
//! independently seeded source.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::{UniformSource, VariateRng};
//!
//! let mut rng = VariateRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;
mod source;
mod stub;

pub use prng::VariateRng;
pub use source::{positive_uniform, UniformSource};
pub use stub::{FixedSource, SequenceSource};
