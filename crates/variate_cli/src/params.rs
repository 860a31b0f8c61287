//! `NAME=VALUE` parameter parsing.
//!
//! Turns the repeated `--param` arguments into a [`DistributionSpec`] for a
//! chosen family. Range checks are left to the core crate; this module only
//! rejects malformed, unknown, duplicate or missing names.

use std::collections::HashMap;

use variate_core::{DistributionSpec, Family};

use crate::{CliError, Result};

/// Splits `name=value` into a lower-cased name and a number.
pub fn parse_assignment(raw: &str) -> Result<(String, f64)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("expected NAME=VALUE, got '{}'", raw))
    })?;

    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "missing parameter name in '{}'",
            raw
        )));
    }

    let value = value.trim().parse::<f64>().map_err(|_| {
        CliError::InvalidArgument(format!("parameter '{}' is not a number: '{}'", name, value))
    })?;

    Ok((name, value))
}

/// Builds the distribution spec for `family` from its `--param` arguments.
pub fn build_spec(family: Family, params: &[String]) -> Result<DistributionSpec> {
    let expected = family.parameter_names();
    let mut values: HashMap<String, f64> = HashMap::new();

    for raw in params {
        let (name, value) = parse_assignment(raw)?;
        if !expected.contains(&name.as_str()) {
            return Err(CliError::UnknownParameter {
                family,
                name,
                expected: expected.join(", "),
            });
        }
        if values.insert(name.clone(), value).is_some() {
            return Err(CliError::InvalidArgument(format!(
                "parameter '{}' given more than once",
                name
            )));
        }
    }

    let get = |name: &'static str| {
        values
            .get(name)
            .copied()
            .ok_or_else(|| CliError::MissingParameter {
                family,
                name,
                expected: expected.join(", "),
            })
    };

    Ok(match family {
        Family::Binomial => DistributionSpec::Binomial { p: get("p")? },
        Family::Geometric => DistributionSpec::Geometric { p: get("p")? },
        Family::Poisson => DistributionSpec::Poisson { rate: get("rate")? },
        Family::Uniform => DistributionSpec::Uniform {
            a: get("a")?,
            b: get("b")?,
        },
        Family::Exponential => DistributionSpec::Exponential { rate: get("rate")? },
        Family::Normal => DistributionSpec::Normal {
            mean: get("mean")?,
            variance: get("variance")?,
        },
        Family::Triangular => DistributionSpec::Triangular {
            low: get("low")?,
            mode: get("mode")?,
            high: get("high")?,
        },
        Family::Weibull => DistributionSpec::Weibull {
            scale: get("scale")?,
            shape: get("shape")?,
        },
        Family::Gamma => DistributionSpec::Gamma {
            shape: get("shape")?,
            rate: get("rate")?,
        },
    })
}

/// Parameter values in [`Family::parameter_names`] order.
pub fn spec_values(spec: &DistributionSpec) -> Vec<f64> {
    match *spec {
        DistributionSpec::Binomial { p } | DistributionSpec::Geometric { p } => vec![p],
        DistributionSpec::Poisson { rate } | DistributionSpec::Exponential { rate } => vec![rate],
        DistributionSpec::Uniform { a, b } => vec![a, b],
        DistributionSpec::Normal { mean, variance } => vec![mean, variance],
        DistributionSpec::Triangular { low, mode, high } => vec![low, mode, high],
        DistributionSpec::Weibull { scale, shape } => vec![scale, shape],
        DistributionSpec::Gamma { shape, rate } => vec![shape, rate],
    }
}

/// Short label such as `gamma(shape=0.5, rate=2)`.
pub fn describe(spec: &DistributionSpec) -> String {
    let family = spec.family();
    let params = family
        .parameter_names()
        .iter()
        .zip(spec_values(spec))
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", family, params)
}
