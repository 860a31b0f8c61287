//! Generate command implementation
//!
//! Prints the drawn variates, one per line or as a JSON document.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;
use variate_core::{DistributionSpec, Variates};

use super::{draw, Draw, SampleArgs};
use crate::config::CliConfig;
use crate::Result;

/// Output format for generated variates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Plain,
    /// JSON document with the request and the values
    Json,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    distribution: &'a DistributionSpec,
    count: usize,
    seed: u64,
    variates: &'a Variates,
}

/// Run the generate command.
pub fn run(args: &SampleArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let sample = draw(args, config)?;
    print!("{}", render(&sample, format)?);
    Ok(())
}

/// Formats a draw for output.
pub fn render(sample: &Draw, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(&sample.variates)),
        OutputFormat::Json => {
            let report = GenerateReport {
                distribution: &sample.spec,
                count: sample.request.count(),
                seed: sample.seed,
                variates: &sample.variates,
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_plain(variates: &Variates) -> String {
    let mut out = String::new();
    match variates {
        Variates::Discrete(values) => {
            for value in values {
                let _ = writeln!(out, "{}", value);
            }
        }
        Variates::Continuous(values) => {
            for value in values {
                let _ = writeln!(out, "{}", value);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sample_args;
    use variate_core::Family;

    #[test]
    fn test_plain_output_has_one_line_per_variate() {
        let args = sample_args(Family::Geometric, &["p=0.4"], 25.0, 5);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let out = render(&sample, OutputFormat::Plain).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.parse::<u64>().unwrap() >= 1));
    }

    #[test]
    fn test_plain_continuous_values_parse_back() {
        let args = sample_args(Family::Uniform, &["a=2", "b=3"], 10.0, 5);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let out = render(&sample, OutputFormat::Plain).unwrap();

        let parsed: Vec<f64> = out.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(parsed, sample.variates.to_f64_vec());
    }

    #[test]
    fn test_json_output() {
        let args = sample_args(Family::Gamma, &["shape=0.5", "rate=2"], 3.0, 11);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let out = render(&sample, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["distribution"]["family"], "gamma");
        assert_eq!(json["distribution"]["shape"], 0.5);
        assert_eq!(json["count"], 3);
        assert_eq!(json["seed"], 11);
        assert_eq!(json["variates"]["kind"], "continuous");
        assert_eq!(json["variates"]["values"].as_array().unwrap().len(), 3);
    }
}
