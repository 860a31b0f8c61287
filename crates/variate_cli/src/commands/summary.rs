//! Summary command implementation
//!
//! Compares sample moments with the theoretical ones.

use std::fmt::Write;

use super::{draw, Draw, SampleArgs};
use crate::config::CliConfig;
use crate::params::describe;
use crate::Result;

/// Run the summary command.
pub fn run(args: &SampleArgs, config: &CliConfig) -> Result<()> {
    let sample = draw(args, config)?;
    print!("{}", render(&sample));
    Ok(())
}

/// Formats the moment table for a draw.
pub fn render(sample: &Draw) -> String {
    let distribution = sample.request.distribution();
    let values = sample.variates.to_f64_vec();
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let mut out = String::new();
    let _ = writeln!(out, "Distribution: {}", describe(&sample.spec));
    let _ = writeln!(out, "Count:        {}", sample.variates.len());
    let _ = writeln!(out, "Seed:         {}", sample.seed);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<10} {:>14} {:>14}", "", "Sample", "Theoretical");
    let _ = writeln!(
        out,
        "{:<10} {:>14.6} {:>14.6}",
        "Mean",
        sample.variates.mean(),
        distribution.mean()
    );
    let _ = writeln!(
        out,
        "{:<10} {:>14.6} {:>14.6}",
        "Variance",
        sample.variates.variance(),
        distribution.variance()
    );
    let _ = writeln!(out, "{:<10} {:>14.6}", "Min", min);
    let _ = writeln!(out, "{:<10} {:>14.6}", "Max", max);
    out
}
