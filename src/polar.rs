//! # Cartesian → polar conversions
//!
//! Conversion of a cartesian position (and optionally velocity) to
//! longitude, latitude, radius and their time derivatives.
//!
//! ## Position
//!
//! [`cart_to_polar`] computes
//!
//! ```text
//! rxy      = √(x² + y²)
//! r        = √(rxy² + z²)
//! lon      = atn2_360(y, x)            ∈ [0, 2π)
//! lat      = atn2_90(z, rxy)           ∈ [−π/2, π/2]   (±π/2 when rxy = 0)
//! ```
//!
//! and maps the zero vector to `(0, 0, 0)` without evaluating any arctangent.
//! Both radii are evaluated with `f64::hypot`, so positions whose squared
//! components would underflow or overflow still get their true radius.
//!
//! ## Position and velocity
//!
//! [`cart_to_polar_with_speed`] rotates the velocity into the local frame of the
//! position: first by the longitude about z (the new x-axis is the projection of
//! the position on the x-y plane), then by the latitude about the new y-axis.
//! In that frame
//!
//! ```text
//! dlon/dt = v_east / rxy
//! dlat/dt = v_north / r
//! dr/dt   = v_radial
//! ```
//!
//! Degenerate states are handled explicitly, in this order:
//!
//! 1. **zero position**: the result carries the *direction of motion* (longitude and
//!    latitude of the velocity vector), radius 0, `dr/dt = |v|`, angular rates 0;
//! 2. **zero velocity**: all rates are 0, positions as [`cart_to_polar`];
//! 3. **polar axis** (`x = y = 0`, `z ≠ 0`): the longitude is undefined, so the
//!    local frame is taken at the longitude [`cart_to_polar`] reports (0 for a
//!    positive zero `x`) and `dlon/dt` is set to 0. The latitude and radius rates
//!    are exact; the velocity component along the longitude direction is not
//!    represented.
//!
//! No branch produces NaN for finite inputs.

use nalgebra::Vector3;

use crate::{
    angle_math::{atn2_with_360_check, atn2_with_90_check},
    eclipt_errors::EcliptError,
    state::{CartesianState, PolarRates, PolarState},
};

fn is_zero(v: &Vector3<f64>) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

/// Projection radius on the x-y plane and full radius, without overflow or underflow
/// of the intermediate squares.
fn magnitudes(x: f64, y: f64, z: f64) -> (f64, f64) {
    let rxy = x.hypot(y);
    (rxy, rxy.hypot(z))
}

/// Convert a cartesian position to polar coordinates.
///
/// Arguments
/// ---------
/// * `position`: cartesian vector, any length unit.
///
/// Return
/// ----------
/// * [`PolarState`] with `longitude ∈ [0, 2π)`, `latitude ∈ [−π/2, π/2]`, `radius ≥ 0`
///   and no rates. The zero vector gives exactly [`PolarState::ZERO`].
///
/// See also
/// ------------
/// * [`PolarState::to_cartesian`] – the inverse mapping.
/// * [`cart_to_polar_with_speed`] – the same conversion including velocities.
pub fn cart_to_polar(position: &Vector3<f64>) -> PolarState {
    if is_zero(position) {
        log::trace!("cart_to_polar: zero vector");
        return PolarState::ZERO;
    }

    let (x, y, z) = (position.x, position.y, position.z);

    let (rxy, r) = magnitudes(x, y, z);
    let longitude = atn2_with_360_check(y, x);

    PolarState::new(longitude, atn2_with_90_check(z, rxy), r)
}

/// Convert a cartesian position and velocity to polar coordinates and rates.
///
/// Arguments
/// ---------
/// * `state`: cartesian state; its velocity must be present.
///
/// Return
/// ----------
/// * [`PolarState`] with rates attached: `longitude_rate` (d-longitude/dt),
///   `latitude_rate` (d-latitude/dt), `radius_rate` (d-radius/dt).
/// * [`EcliptError::MissingVelocity`] if `state` is position-only.
///
/// See the [module documentation](self) for the degenerate branches.
pub fn cart_to_polar_with_speed(state: &CartesianState) -> Result<PolarState, EcliptError> {
    let v = state.require_velocity("cart_to_polar_with_speed")?;
    let p = state.position;

    if is_zero(&p) {
        log::trace!("cart_to_polar_with_speed: zero position, returning direction of motion");
        let motion = cart_to_polar(&v);
        return Ok(PolarState {
            longitude: motion.longitude,
            latitude: motion.latitude,
            radius: 0.0,
            rates: Some(PolarRates {
                longitude_rate: 0.0,
                latitude_rate: 0.0,
                radius_rate: motion.radius,
            }),
        });
    }

    if is_zero(&v) {
        log::trace!("cart_to_polar_with_speed: zero velocity");
        return Ok(cart_to_polar(&p).with_rates(PolarRates::default()));
    }

    let (x, y, z) = (p.x, p.y, p.z);

    let (rxy, r) = magnitudes(x, y, z);
    let longitude = atn2_with_360_check(y, x);
    let lat = atn2_with_90_check(z, rxy);

    let (coslon, sinlon) = if rxy == 0.0 {
        log::debug!("cart_to_polar_with_speed: position on the polar axis, longitude rate set to 0");
        let (s, c) = longitude.sin_cos();
        (c, s)
    } else {
        (x / rxy, y / rxy)
    };
    let coslat = rxy / r;
    let sinlat = z / r;

    // rotation by the longitude about z
    let xx3 = v.x * coslon + v.y * sinlon;
    let xx4 = -v.x * sinlon + v.y * coslon;
    let longitude_rate = if rxy == 0.0 { 0.0 } else { xx4 / rxy };

    // rotation by the latitude about the new y-axis
    let xx4 = -sinlat * xx3 + coslat * v.z;
    let xx5 = coslat * xx3 + sinlat * v.z;

    Ok(PolarState {
        longitude,
        latitude: lat,
        radius: r,
        rates: Some(PolarRates {
            longitude_rate,
            latitude_rate: xx4 / r,
            radius_rate: xx5,
        }),
    })
}

/// Convert polar coordinates and rates back to a cartesian position and velocity.
///
/// ```text
/// v = dr/dt · û_r + r·cos(lat)·dlon/dt · û_lon + r·dlat/dt · û_lat
/// ```
///
/// Inverse of [`cart_to_polar_with_speed`] in the general branch. For the
/// zero-position branch it rebuilds the velocity from the direction of motion;
/// for the polar-axis branch the velocity component along the longitude
/// direction is lost.
///
/// Return
/// ----------
/// * The cartesian state, or [`EcliptError::MissingVelocity`] if `polar` has no rates.
pub fn polar_to_cart_with_speed(polar: &PolarState) -> Result<CartesianState, EcliptError> {
    let rates = polar
        .rates
        .ok_or(EcliptError::MissingVelocity("polar_to_cart_with_speed"))?;

    let (sin_lon, cos_lon) = polar.longitude.sin_cos();
    let (sin_lat, cos_lat) = polar.latitude.sin_cos();

    let radial = polar.direction();
    let east = Vector3::new(-sin_lon, cos_lon, 0.0);
    let north = Vector3::new(-cos_lon * sin_lat, -sin_lon * sin_lat, cos_lat);

    let velocity = rates.radius_rate * radial
        + polar.radius * cos_lat * rates.longitude_rate * east
        + polar.radius * rates.latitude_rate * north;

    Ok(CartesianState::new(polar.radius * radial, velocity))
}
