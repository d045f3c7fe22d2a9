//! # Equatorial ↔ ecliptical frame rotation
//!
//! The ecliptical frame shares its x-axis (the equinox direction) with the
//! equatorial frame and is tilted by the obliquity ε about that axis. Going from
//! one frame to the other is a single rotation about x:
//!
//! ```text
//! x'  = x                       vx' = vx
//! y'  = y·cos ε + z·sin ε       vy' = vy·cos ε + vz·sin ε
//! z'  = −y·sin ε + z·cos ε      vz' = −vy·sin ε + vz·cos ε
//! ```
//!
//! The same matrix applied with −ε is the inverse transform.
//!
//! ## Variants
//!
//! | Function | Obliquity source |
//! |----------|------------------|
//! | [`equ_to_ecl`] | [`find_eps`] (IAU 2006) |
//! | [`equ_to_ecl_experimental`] | [`LinearJ2000`] |
//! | [`equ_to_ecl_with`] | any [`ObliquityProvider`] |
//!
//! The caller picks the variant; there is no automatic selection.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::Radian,
    eclipt_errors::EcliptError,
    obliquity::{find_eps, LinearJ2000, ObliquityProvider},
    state::CartesianState,
    time::TimeOffset,
};

/// Rotation matrix from the equatorial to the ecliptical frame for an obliquity `eps`.
///
/// This is a change of basis (passive rotation) about the x-axis:
///
/// ```text
/// | 1     0       0    |
/// | 0   cos ε   sin ε  |
/// | 0  −sin ε   cos ε  |
/// ```
///
/// The first row and column are exact, so the x components go through unchanged.
/// Its transpose, or the same function called with `-eps`, maps back to the equator.
pub fn equatorial_to_ecliptic_rotation(eps: Radian) -> Rotation3<f64> {
    let (sin_eps, cos_eps) = eps.sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, cos_eps, sin_eps,
        0.0, -sin_eps, cos_eps,
    );

    Rotation3::from_matrix_unchecked(m)
}

/// Rotate a position and velocity by `rot`.
///
/// The velocity is required: a position-only state is rejected with
/// [`EcliptError::MissingVelocity`] tagged with `operation`.
fn rotate_state(
    rot: &Rotation3<f64>,
    state: &CartesianState,
    operation: &'static str,
) -> Result<CartesianState, EcliptError> {
    let velocity = state.require_velocity(operation)?;
    Ok(CartesianState::new(rot * state.position, rot * velocity))
}

/// Rotate a position vector only, from the equatorial to the ecliptical frame.
pub fn rotate_position(position: &Vector3<f64>, eps: Radian) -> Vector3<f64> {
    equatorial_to_ecliptic_rotation(eps) * position
}

/// Convert an equatorial cartesian state (position and velocity) to the ecliptical frame.
///
/// The obliquity comes from the standard model, [`find_eps`].
///
/// Arguments
/// ---------
/// * `equ`: equatorial state; its velocity must be present.
/// * `t`: time of the state, seconds since J2000.0.
///
/// Return
/// ----------
/// * A new ecliptical state, or [`EcliptError::MissingVelocity`].
pub fn equ_to_ecl(equ: &CartesianState, t: TimeOffset) -> Result<CartesianState, EcliptError> {
    let eps = find_eps(t);
    rotate_state(&equatorial_to_ecliptic_rotation(eps), equ, "equ_to_ecl")
}

/// Same as [`equ_to_ecl`], with the obliquity taken from the linear model [`LinearJ2000`].
pub fn equ_to_ecl_experimental(
    equ: &CartesianState,
    t: TimeOffset,
) -> Result<CartesianState, EcliptError> {
    let eps = LinearJ2000.obliquity(t);
    rotate_state(
        &equatorial_to_ecliptic_rotation(eps),
        equ,
        "equ_to_ecl_experimental",
    )
}

/// Same as [`equ_to_ecl`], with the obliquity taken from `provider`.
pub fn equ_to_ecl_with<P: ObliquityProvider>(
    provider: &P,
    equ: &CartesianState,
    t: TimeOffset,
) -> Result<CartesianState, EcliptError> {
    let eps = provider.obliquity(t);
    rotate_state(&equatorial_to_ecliptic_rotation(eps), equ, "equ_to_ecl_with")
}

/// Convert an ecliptical cartesian state back to the equatorial frame (standard obliquity).
pub fn ecl_to_equ(ecl: &CartesianState, t: TimeOffset) -> Result<CartesianState, EcliptError> {
    let eps = find_eps(t);
    rotate_state(&equatorial_to_ecliptic_rotation(-eps), ecl, "ecl_to_equ")
}

/// Inverse of [`equ_to_ecl_with`]: rotation by −ε with ε taken from `provider`.
pub fn ecl_to_equ_with<P: ObliquityProvider>(
    provider: &P,
    ecl: &CartesianState,
    t: TimeOffset,
) -> Result<CartesianState, EcliptError> {
    let eps = provider.obliquity(t);
    rotate_state(&equatorial_to_ecliptic_rotation(-eps), ecl, "ecl_to_equ_with")
}
