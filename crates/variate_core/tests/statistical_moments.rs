//! Statistical convergence tests.
//!
//! For every family, the empirical mean and variance of 100,000 seeded
//! variates must match the theoretical values: mean within 2%, variance
//! within 5% (relative). Parameters are chosen so both tolerances sit at
//! four or more standard errors.

use variate_core::distributions::{
    Bernoulli, Exponential, Gamma, Geometric, Normal, Poisson, Sampler, Triangular, Uniform,
    Weibull,
};
use variate_core::rng::VariateRng;
use variate_core::sequence::sample_n;

const SAMPLE_SIZE: usize = 100_000;
const MEAN_TOLERANCE: f64 = 0.02;
const VARIANCE_TOLERANCE: f64 = 0.05;

fn assert_moments<D>(name: &str, sampler: &D, seed: u64)
where
    D: Sampler,
    D::Output: num_traits::ToPrimitive,
{
    let mut rng = VariateRng::from_seed(seed);
    let sample = sample_n(sampler, SAMPLE_SIZE, &mut rng).unwrap();
    assert_eq!(sample.len(), SAMPLE_SIZE);

    let mean_error = (sample.mean() - sampler.mean()).abs() / sampler.mean().abs();
    assert!(
        mean_error < MEAN_TOLERANCE,
        "{}: sample mean {} vs theoretical {} (relative error {:.4})",
        name,
        sample.mean(),
        sampler.mean(),
        mean_error
    );

    let variance_error = (sample.variance() - sampler.variance()).abs() / sampler.variance();
    assert!(
        variance_error < VARIANCE_TOLERANCE,
        "{}: sample variance {} vs theoretical {} (relative error {:.4})",
        name,
        sample.variance(),
        sampler.variance(),
        variance_error
    );
}

#[test]
fn test_bernoulli_moments() {
    assert_moments("bernoulli", &Bernoulli::new(0.3).unwrap(), 11);
}

#[test]
fn test_geometric_moments() {
    assert_moments("geometric", &Geometric::new(0.3).unwrap(), 12);
}

#[test]
fn test_poisson_moments() {
    assert_moments("poisson", &Poisson::new(4.0).unwrap(), 13);
}

#[test]
fn test_uniform_moments() {
    assert_moments("uniform", &Uniform::new(2.0, 5.0).unwrap(), 14);
}

#[test]
fn test_exponential_moments() {
    assert_moments("exponential", &Exponential::new(2.0).unwrap(), 15);
}

#[test]
fn test_normal_moments() {
    assert_moments("normal", &Normal::new(5.0, 4.0).unwrap(), 16);
}

#[test]
fn test_triangular_moments() {
    assert_moments("triangular", &Triangular::new(1.0, 2.0, 6.0).unwrap(), 17);
}

#[test]
fn test_weibull_moments() {
    assert_moments("weibull", &Weibull::new(0.5, 2.0).unwrap(), 18);
}

#[test]
fn test_gamma_marsaglia_tsang_moments() {
    assert_moments("gamma(1, 2)", &Gamma::new(1.0, 2.0).unwrap(), 19);
    assert_moments("gamma(4.5, 0.5)", &Gamma::new(4.5, 0.5).unwrap(), 20);
}

#[test]
fn test_gamma_ahrens_dieter_moments() {
    assert_moments("gamma(0.5, 1)", &Gamma::new(0.5, 1.0).unwrap(), 21);
    assert_moments("gamma(0.999, 3)", &Gamma::new(0.999, 3.0).unwrap(), 22);
}

#[test]
fn test_standard_uniform_stays_in_unit_interval() {
    let mut rng = VariateRng::from_seed(23);
    let sample = sample_n(&Uniform::standard(), SAMPLE_SIZE, &mut rng).unwrap();
    assert!(sample.iter().all(|&u| (0.0..1.0).contains(&u)));
}

#[test]
fn test_supports() {
    let mut rng = VariateRng::from_seed(24);

    let geometric = sample_n(&Geometric::new(0.9).unwrap(), 10_000, &mut rng).unwrap();
    assert!(geometric.iter().all(|&k| k >= 1));

    let triangular = sample_n(&Triangular::new(-1.0, 0.0, 3.0).unwrap(), 10_000, &mut rng).unwrap();
    assert!(triangular.iter().all(|&x| (-1.0..=3.0).contains(&x)));

    let gamma = sample_n(&Gamma::new(0.2, 1.0).unwrap(), 10_000, &mut rng).unwrap();
    assert!(gamma.iter().all(|&x| x > 0.0 && x.is_finite()));
}
