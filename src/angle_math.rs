//! # Quadrant-aware arctangents
//!
//! Two-argument arctangent helpers constrained to the ranges used by polar coordinates:
//!
//! - [`atn2_with_360_check`] for longitudes, in `[0, 2π)`,
//! - [`atn2_with_90_check`] for latitudes, in `[−π/2, π/2]`.
//!
//! A bare `f64::atan2` returns values in `(−π, π]`, which is the wrong range for
//! both quantities; every longitude and latitude produced by this crate goes
//! through one of these two functions.

use crate::constants::{Radian, DPI, HALF_PI, PI};

/// Reduce an angle to its principal value in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    let a = a.rem_euclid(DPI);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if a >= DPI {
        0.0
    } else {
        a
    }
}

/// Arctangent of `y / x` resolved over the full circle.
///
/// Arguments
/// ---------
/// * `y`: ordinate (sine component).
/// * `x`: abscissa (cosine component).
///
/// Return
/// ----------
/// * The angle in radians, in `[0, 2π)`. `(0, 0)` maps to `0`.
pub fn atn2_with_360_check(y: f64, x: f64) -> Radian {
    let a = y.atan2(x);
    if a < 0.0 {
        principal_angle(a + DPI)
    } else {
        // `+ 0.0` turns a signed zero from atan2(-0.0, x) into +0.0
        a + 0.0
    }
}

/// Arctangent of `z / rxy` restricted to the half circle `[−π/2, π/2]`.
///
/// `rxy` is the projection radius on the fundamental plane and is expected to be
/// non-negative. A negative `rxy` is folded back as if its magnitude had been given.
/// When `rxy` is exactly zero the result is `+π/2` for `z ≥ 0` and `−π/2` otherwise.
pub fn atn2_with_90_check(z: f64, rxy: f64) -> Radian {
    if rxy == 0.0 {
        return if z >= 0.0 { HALF_PI } else { -HALF_PI };
    }

    let a = z.atan2(rxy);
    if a > HALF_PI {
        PI - a
    } else if a < -HALF_PI {
        -PI - a
    } else {
        a
    }
}
