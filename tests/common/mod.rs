#![allow(dead_code)]

use approx::assert_relative_eq;
use eclipt::{CartesianState, PolarState};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform random vector with components in [-scale, scale]
pub fn random_vector(rng: &mut StdRng, scale: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
        rng.random_range(-scale..=scale),
    )
}

pub fn random_state(rng: &mut StdRng) -> CartesianState {
    CartesianState::new(random_vector(rng, 5.0), random_vector(rng, 0.05))
}

pub fn assert_polar_close(actual: &PolarState, expected: &PolarState, epsilon: f64) {
    assert_relative_eq!(actual.longitude, expected.longitude, epsilon = epsilon);
    assert_relative_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_relative_eq!(actual.radius, expected.radius, epsilon = epsilon);
    match (actual.rates, expected.rates) {
        (Some(a), Some(e)) => {
            assert_relative_eq!(a.longitude_rate, e.longitude_rate, epsilon = epsilon);
            assert_relative_eq!(a.latitude_rate, e.latitude_rate, epsilon = epsilon);
            assert_relative_eq!(a.radius_rate, e.radius_rate, epsilon = epsilon);
        }
        (None, None) => {}
        (a, e) => panic!("rates mismatch: {a:?} vs {e:?}"),
    }
}
