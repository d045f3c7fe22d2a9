mod common;

use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_relative_eq;
use eclipt::{
    cart_to_polar, cart_to_polar_with_speed, polar_to_cart_with_speed, CartesianState, EcliptError,
    PolarRates, PolarState,
};
use nalgebra::Vector3;
use rand::Rng;

use common::{assert_polar_close, init_logger, random_state, random_vector, seeded_rng};

#[test]
fn test_round_trip_random_positions() {
    let mut rng = seeded_rng(0xDEADBEEF);

    for _ in 0..1000 {
        let p = random_vector(&mut rng, 100.0);
        let back = cart_to_polar(&p).to_cartesian();

        // relative to the vector length so that small components are not over-constrained
        assert_relative_eq!(back, p, epsilon = 1e-9 * p.norm(), max_relative = 1e-9);
    }
}

#[test]
fn test_zero_vector_is_exact() {
    assert_eq!(
        cart_to_polar(&Vector3::new(0.0, 0.0, 0.0)),
        PolarState {
            longitude: 0.0,
            latitude: 0.0,
            radius: 0.0,
            rates: None
        }
    );
    // signed zeros too
    assert_eq!(cart_to_polar(&Vector3::new(-0.0, 0.0, -0.0)), PolarState::ZERO);
}

#[test]
fn test_polar_axis() {
    let up = cart_to_polar(&Vector3::new(0.0, 0.0, 5.0));
    assert_eq!(up.latitude, FRAC_PI_2);
    assert_eq!(up.radius, 5.0);

    let down = cart_to_polar(&Vector3::new(0.0, 0.0, -5.0));
    assert_eq!(down.latitude, -FRAC_PI_2);
    assert_eq!(down.radius, 5.0);
}

#[test]
fn test_longitude_range_all_quadrants() {
    let mut rng = seeded_rng(0xBADF00D);

    let mut quadrants = [0usize; 4];
    for _ in 0..1000 {
        let x: f64 = rng.random_range(-10.0..10.0);
        let y: f64 = rng.random_range(-10.0..10.0);
        if x == 0.0 && y == 0.0 {
            continue;
        }

        let lon = cart_to_polar(&Vector3::new(x, y, rng.random_range(-1.0..1.0))).longitude;
        assert!((0.0..TAU).contains(&lon), "longitude {lon} out of range for ({x}, {y})");

        quadrants[((lon / FRAC_PI_2) as usize).min(3)] += 1;
    }
    assert!(quadrants.iter().all(|&n| n > 0));
}

#[test]
fn test_latitude_range() {
    let mut rng = seeded_rng(0xFEEDFACE);
    for _ in 0..1000 {
        let lat = cart_to_polar(&random_vector(&mut rng, 1.0)).latitude;
        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&lat));
    }
}

#[test]
fn test_zero_position_speed_branch() {
    init_logger();

    let state = CartesianState::new(Vector3::zeros(), Vector3::new(3.0, 4.0, 0.0));
    let polar = cart_to_polar_with_speed(&state).unwrap();
    let direction = cart_to_polar(&Vector3::new(3.0, 4.0, 0.0));

    assert_eq!(polar.velocity_z(), Some(5.0));
    assert_eq!(polar.velocity_x(), Some(0.0));
    assert_eq!(polar.velocity_y(), Some(0.0));
    assert_eq!(polar.radius, 0.0);
    assert_eq!(polar.longitude, direction.longitude);
    assert_eq!(polar.latitude, direction.latitude);
}

#[test]
fn test_zero_velocity_branch() {
    init_logger();

    let p = Vector3::new(1.0, 2.0, 2.0);
    let polar = cart_to_polar_with_speed(&CartesianState::new(p, Vector3::zeros())).unwrap();
    let expected = cart_to_polar(&p);

    assert_eq!(
        polar.rates,
        Some(PolarRates {
            longitude_rate: 0.0,
            latitude_rate: 0.0,
            radius_rate: 0.0
        })
    );
    assert_eq!(polar.longitude, expected.longitude);
    assert_eq!(polar.latitude, expected.latitude);
    assert_eq!(polar.radius, expected.radius);
    assert_relative_eq!(polar.radius, 3.0, epsilon = 1e-15);
}

#[test]
fn test_position_part_matches_cart_to_polar() {
    let mut rng = seeded_rng(0x5EED);
    for _ in 0..200 {
        let state = random_state(&mut rng);
        let with_speed = cart_to_polar_with_speed(&state).unwrap();
        let position_only = cart_to_polar(&state.position);

        assert_eq!(with_speed.longitude, position_only.longitude);
        assert_eq!(with_speed.latitude, position_only.latitude);
        assert_eq!(with_speed.radius, position_only.radius);
    }
}

#[test]
fn test_speed_round_trip_random_states() {
    let mut rng = seeded_rng(0xC0FFEE);
    for _ in 0..500 {
        let state = random_state(&mut rng);
        let polar = cart_to_polar_with_speed(&state).unwrap();
        let back = polar_to_cart_with_speed(&polar).unwrap();

        let v = state.velocity.unwrap();
        assert_relative_eq!(back.position, state.position, epsilon = 1e-12);
        assert_relative_eq!(back.velocity.unwrap(), v, epsilon = 1e-12);

        // and back again through the polar representation
        let again = cart_to_polar_with_speed(&back).unwrap();
        assert_polar_close(&again, &polar, 1e-9);
    }
}

#[test]
fn test_polar_axis_with_speed_has_no_nan() {
    init_logger();

    let state = CartesianState::new(Vector3::new(0.0, 0.0, -3.0), Vector3::new(0.1, -0.2, 0.3));
    let polar = cart_to_polar_with_speed(&state).unwrap();
    let rates = polar.rates.unwrap();

    assert_eq!(polar.latitude, -FRAC_PI_2);
    assert!(rates.longitude_rate.is_finite());
    assert!(rates.latitude_rate.is_finite());
    assert!(rates.radius_rate.is_finite());
    assert_relative_eq!(rates.radius_rate, -0.3, epsilon = 1e-15);
}

#[test]
fn test_extreme_magnitudes_stay_finite() {
    let mut rng = seeded_rng(0x1E200);
    for scale in [1e-250, 1e-160, 1e160, 1e250] {
        for _ in 0..100 {
            let p = random_vector(&mut rng, 1.0) * scale;
            let v = random_vector(&mut rng, 1.0);
            let polar = cart_to_polar_with_speed(&CartesianState::new(p, v)).unwrap();
            let rates = polar.rates.unwrap();

            assert!(polar.radius > 0.0 && polar.radius.is_finite());
            assert_relative_eq!(polar.radius / scale, (p / scale).norm(), max_relative = 1e-12);
            assert!(rates.longitude_rate.is_finite());
            assert!(rates.latitude_rate.is_finite());
            assert!(rates.radius_rate.is_finite());

            let direction = polar.direction();
            assert_relative_eq!(direction, (p / scale).normalize(), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_position_only_state_is_rejected() {
    let state = CartesianState::position_only(Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(
        cart_to_polar_with_speed(&state).unwrap_err(),
        EcliptError::MissingVelocity("cart_to_polar_with_speed")
    );
}
