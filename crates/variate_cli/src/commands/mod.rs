//! CLI command implementations
//!
//! Each submodule implements one subcommand. The sampling commands share
//! [`SampleArgs`] and [`draw`]: parse the parameters, validate the request,
//! seed a generator and produce the variates.

use clap::Args;
use tracing::info;
use variate_core::{DistributionSpec, Family, GenerationRequest, VariateGenerator, Variates};

use crate::config::CliConfig;
use crate::params::build_spec;
use crate::Result;

pub mod check;
pub mod generate;
pub mod histogram;
pub mod summary;

/// Arguments shared by every sampling command.
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Distribution family (binomial, geometric, poisson, uniform,
    /// exponential, normal, triangular, weibull, gamma)
    pub family: Family,

    /// Family parameter as NAME=VALUE (repeatable)
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Number of variates to draw
    #[arg(short = 'n', long, default_value = "1", allow_negative_numbers = true)]
    pub count: f64,

    /// Seed for the uniform source (overrides the configuration file)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// A generated sample and how it was produced.
#[derive(Debug, Clone)]
pub struct Draw {
    pub spec: DistributionSpec,
    pub request: GenerationRequest,
    pub seed: u64,
    pub variates: Variates,
}

/// Validates the arguments and draws the requested variates.
pub fn draw(args: &SampleArgs, config: &CliConfig) -> Result<Draw> {
    let spec = build_spec(args.family, &args.params)?;
    let request = GenerationRequest::with_raw_count(spec, args.count)?;

    let mut generator = match args.seed.or(config.seed) {
        Some(seed) => VariateGenerator::from_seed(seed),
        None => VariateGenerator::from_entropy(),
    };
    let seed = generator.seed();

    info!(
        family = %request.family(),
        count = request.count(),
        seed,
        "Generating variates"
    );
    let variates = generator.generate(&request)?;

    Ok(Draw {
        spec,
        request,
        seed,
        variates,
    })
}

#[cfg(test)]
pub(crate) fn sample_args(family: Family, params: &[&str], count: f64, seed: u64) -> SampleArgs {
    SampleArgs {
        family,
        params: params.iter().map(|s| s.to_string()).collect(),
        count,
        seed: Some(seed),
    }
}
