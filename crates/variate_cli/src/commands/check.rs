//! Check command implementation
//!
//! Reports the effective configuration and runs a quick moment check of
//! every family against a fixed seed.

use std::fmt::Write;

use tracing::{info, warn};
use variate_core::{DistributionSpec, GenerationRequest, VariateGenerator};

use crate::config::CliConfig;
use crate::params::describe;
use crate::{CliError, Result};

const CHECK_SEED: u64 = 20_240_601;
const CHECK_COUNT: usize = 20_000;
/// Allowed distance of the sample mean, in standard errors.
const CHECK_TOLERANCE: f64 = 5.0;

/// One representative parameter set per family, both gamma regimes included.
pub fn reference_specs() -> Vec<DistributionSpec> {
    vec![
        DistributionSpec::Binomial { p: 0.3 },
        DistributionSpec::Geometric { p: 0.25 },
        DistributionSpec::Poisson { rate: 4.0 },
        DistributionSpec::Uniform { a: -1.0, b: 3.0 },
        DistributionSpec::Exponential { rate: 2.0 },
        DistributionSpec::Normal {
            mean: 1.0,
            variance: 4.0,
        },
        DistributionSpec::Triangular {
            low: 0.0,
            mode: 1.0,
            high: 3.0,
        },
        DistributionSpec::Weibull {
            scale: 2.0,
            shape: 1.5,
        },
        DistributionSpec::Gamma {
            shape: 0.5,
            rate: 2.0,
        },
        DistributionSpec::Gamma {
            shape: 3.0,
            rate: 1.0,
        },
    ]
}

/// Outcome of the moment check for one distribution.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub label: String,
    pub sample_mean: f64,
    pub expected_mean: f64,
    pub standard_errors: f64,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.standard_errors <= CHECK_TOLERANCE
    }
}

/// Draws from every reference distribution and compares means.
pub fn run_checks() -> Result<Vec<CheckResult>> {
    let mut generator = VariateGenerator::from_seed(CHECK_SEED);

    reference_specs()
        .into_iter()
        .map(|spec| -> Result<CheckResult> {
            let request = GenerationRequest::new(spec, CHECK_COUNT)?;
            let variates = generator.generate(&request)?;
            let distribution = request.distribution();

            let expected_mean = distribution.mean();
            let standard_error = (distribution.variance() / CHECK_COUNT as f64).sqrt();
            let sample_mean = variates.mean();

            Ok(CheckResult {
                label: describe(&spec),
                sample_mean,
                expected_mean,
                standard_errors: (sample_mean - expected_mean).abs() / standard_error,
            })
        })
        .collect()
}

/// Run the check command.
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    info!("Running system check");

    let results = run_checks()?;
    print!("{}", render(config, config_path, &results));

    verdict(&results)
}

/// Fails when any result strayed beyond the tolerance.
pub fn verdict(results: &[CheckResult]) -> Result<()> {
    let failures = results.iter().filter(|r| !r.passed()).count();
    if failures > 0 {
        warn!(failures, "Moment check failed");
        return Err(CliError::CheckFailed {
            failures,
            total: results.len(),
        });
    }
    Ok(())
}

/// Formats the configuration and check results.
pub fn render(config: &CliConfig, config_path: &str, results: &[CheckResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "variate {}", variate_core::VERSION);
    let _ = writeln!(out);
    let _ = writeln!(out, "Configuration ({}):", config_path);
    let _ = writeln!(
        out,
        "  seed:            {}",
        config
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string())
    );
    let _ = writeln!(out, "  bins:            {}", config.bins);
    let _ = writeln!(out, "  histogram_width: {}", config.histogram_width);
    let _ = writeln!(out, "  log_level:       {}", config.log_level);
    let _ = writeln!(out);
    let _ = writeln!(out, "Moment check (n = {}, seed = {}):", CHECK_COUNT, CHECK_SEED);

    for result in results {
        let _ = writeln!(
            out,
            "  [{}] {:<36} mean {:>10.4} vs {:>10.4} ({:.2} SE)",
            if result.passed() { "OK" } else { "FAIL" },
            result.label,
            result.sample_mean,
            result.expected_mean,
            result.standard_errors
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_specs_are_valid() {
        for spec in reference_specs() {
            assert!(spec.validate().is_ok(), "{:?}", spec);
        }
    }

    #[test]
    fn test_every_family_is_checked() {
        let results = run_checks().unwrap();
        assert_eq!(results.len(), reference_specs().len());
        for family in variate_core::Family::ALL {
            assert!(results.iter().any(|r| r.label.starts_with(family.name())));
        }
        assert!(results.iter().all(|r| r.standard_errors.is_finite()));
    }

    #[test]
    fn test_out_of_tolerance_mean_fails_the_check() {
        let result = |standard_errors| CheckResult {
            label: "exponential(rate=2)".to_string(),
            sample_mean: 0.5,
            expected_mean: 0.5,
            standard_errors,
        };

        assert!(verdict(&[result(0.3), result(4.9)]).is_ok());

        let err = verdict(&[result(0.3), result(7.5)]).unwrap_err();
        assert!(matches!(
            err,
            CliError::CheckFailed {
                failures: 1,
                total: 2
            }
        ));
        assert_eq!(
            err.to_string(),
            "Moment check failed for 1 of 2 distributions"
        );
    }

    #[test]
    fn test_render_lists_configuration() {
        let result = CheckResult {
            label: "poisson(rate=4)".to_string(),
            sample_mean: 4.01,
            expected_mean: 4.0,
            standard_errors: 0.7,
        };
        let out = render(&CliConfig::default(), "variate.toml", &[result]);

        assert!(out.contains("Configuration (variate.toml):"));
        assert!(out.contains("seed:            entropy"));
        assert!(out.contains("[OK] poisson(rate=4)"));
    }
}
