//! Test the Gaussian noise sources.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;

use scalar_estimate::noise::{FixedSequence, GaussianSource, RngGaussian};

#[test]
fn test_fixed_sequence_scales_and_repeats() {
    let mut noise = FixedSequence::new(vec![1.0, -0.5, 2.0]);
    assert_eq!(noise.sample(10.), 10.);
    assert_eq!(noise.sample(10.), -5.);
    assert_eq!(noise.sample(1.), 2.);
    assert_eq!(noise.sample(3.), 3.);
}

#[test]
fn test_zeros() {
    let mut noise = FixedSequence::zeros();
    for _ in 0..5 {
        assert_eq!(noise.sample(100.), 0.);
    }
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let mut a = RngGaussian::<StdRng>::seed_from_u64(9u64);
    let mut b = RngGaussian::<StdRng>::seed_from_u64(9u64);
    for _ in 0..100 {
        assert_eq!(a.sample(10.), b.sample(10.));
    }
}

#[test]
fn test_rng_zero_std_dev() {
    let mut noise = RngGaussian::<StdRng>::seed_from_u64(2u64);
    for _ in 0..10 {
        assert_eq!(noise.sample(0.).abs(), 0.);
    }
}

#[test]
fn test_rng_moments() {
    let mut noise = RngGaussian::<StdRng>::seed_from_u64(4u64);
    let n = 20_000;
    let samples: Vec<f64> = (0..n).map(|_| noise.sample(10.)).collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / (n - 1) as f64;

    assert_abs_diff_eq!(mean, 0., epsilon = 0.5);
    assert_relative_eq!(var.sqrt(), 10., max_relative = 0.05);
}

fn draw<G: GaussianSource>(mut noise: G) -> f64 {
    noise.sample(1.)
}

#[test]
fn test_borrowed_source() {
    let mut noise = FixedSequence::new(vec![1.0, 2.0]);
    assert_eq!(draw(&mut noise), 1.);
    assert_eq!(noise.sample(1.), 2.);
}
