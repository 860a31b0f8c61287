//! Histogram command implementation
//!
//! Draws a sample and renders its probability-normalised histogram as text.

use variate_core::histogram::Histogram;

use super::{draw, Draw, SampleArgs};
use crate::config::CliConfig;
use crate::params::describe;
use crate::Result;

/// Run the histogram command.
pub fn run(
    args: &SampleArgs,
    bins: Option<usize>,
    title: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    let sample = draw(args, config)?;
    print!("{}", render(&sample, bins, title, config)?);
    Ok(())
}

/// Bins the draw and renders it, falling back to the configured bin count
/// and a title built from the distribution.
pub fn render(
    sample: &Draw,
    bins: Option<usize>,
    title: Option<&str>,
    config: &CliConfig,
) -> Result<String> {
    let histogram = Histogram::for_variates(&sample.variates, bins.unwrap_or(config.bins))?;
    let title = match title {
        Some(title) => title.to_string(),
        None => format!("{}, n = {}", describe(&sample.spec), sample.variates.len()),
    };
    Ok(histogram.render_text(Some(&title), config.histogram_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sample_args;
    use crate::CliError;
    use variate_core::{Family, VariateError};

    #[test]
    fn test_renders_requested_bins() {
        let args = sample_args(Family::Normal, &["mean=0", "variance=1"], 500.0, 8);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let out = render(&sample, Some(12), Some("Standard normal"), &CliConfig::default()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Standard normal");
        // title, header, one line per bin
        assert_eq!(lines.len(), 2 + 12);
    }

    #[test]
    fn test_default_title_and_configured_bins() {
        let args = sample_args(Family::Weibull, &["scale=1", "shape=2"], 100.0, 8);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let config = CliConfig {
            bins: 5,
            ..CliConfig::default()
        };
        let out = render(&sample, None, None, &config).unwrap();

        assert!(out.starts_with("weibull(scale=1, shape=2), n = 100\n"));
        assert_eq!(out.lines().count(), 2 + 5);
    }

    #[test]
    fn test_zero_bins_is_an_error() {
        let args = sample_args(Family::Uniform, &["a=0", "b=1"], 10.0, 8);
        let sample = draw(&args, &CliConfig::default()).unwrap();
        let err = render(&sample, Some(0), None, &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Variate(VariateError::InvalidBins { bins: 0 })));
    }
}
