//! # State vectors
//!
//! Value types exchanged by the conversions:
//!
//! - [`CartesianState`]: position `(x, y, z)` with an optional velocity, in any
//!   consistent length and time units.
//! - [`PolarState`]: `(longitude, latitude, radius)` with optional [`PolarRates`].
//!
//! Position-only and position+velocity states are distinct shapes: routines that
//! need a velocity return [`EcliptError::MissingVelocity`] instead of treating
//! a missing one as zero.
//!
//! All types are `Copy` and every conversion returns a new value; nothing is
//! updated in place.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{constants::Radian, eclipt_errors::EcliptError};

/// Cartesian position and optional velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianState {
    pub position: Vector3<f64>,
    pub velocity: Option<Vector3<f64>>,
}

impl CartesianState {
    /// Position and velocity.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        CartesianState {
            position,
            velocity: Some(velocity),
        }
    }

    /// Position only; routines requiring a velocity will reject this state.
    pub fn position_only(position: Vector3<f64>) -> Self {
        CartesianState {
            position,
            velocity: None,
        }
    }

    /// Validating constructor: every component must be finite.
    ///
    /// Return
    /// ----------
    /// * The state, or [`EcliptError::NonFiniteComponent`] naming the first offending field.
    pub fn try_new(
        position: Vector3<f64>,
        velocity: Option<Vector3<f64>>,
    ) -> Result<Self, EcliptError> {
        check_finite(&position, ["x", "y", "z"])?;
        if let Some(v) = &velocity {
            check_finite(v, ["velocity_x", "velocity_y", "velocity_z"])?;
        }
        Ok(CartesianState { position, velocity })
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Velocity of the state, or [`EcliptError::MissingVelocity`] tagged with `operation`.
    pub fn require_velocity(&self, operation: &'static str) -> Result<Vector3<f64>, EcliptError> {
        self.velocity.ok_or(EcliptError::MissingVelocity(operation))
    }
}

fn check_finite(v: &Vector3<f64>, names: [&'static str; 3]) -> Result<(), EcliptError> {
    for (value, field) in v.iter().zip(names) {
        if !value.is_finite() {
            return Err(EcliptError::NonFiniteComponent {
                field,
                value: *value,
            });
        }
    }
    Ok(())
}

/// Time derivatives of the polar coordinates.
///
/// In the flat record layout these occupy the `velocity_x`, `velocity_y` and
/// `velocity_z` slots, hence the accessors of the same names on [`PolarState`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarRates {
    /// d(longitude)/dt, radians per unit time
    pub longitude_rate: f64,
    /// d(latitude)/dt, radians per unit time
    pub latitude_rate: f64,
    /// d(radius)/dt, length per unit time
    pub radius_rate: f64,
}

/// Polar (spherical) coordinates with optional rates.
///
/// * `longitude` in `[0, 2π)`
/// * `latitude` in `[−π/2, π/2]`
/// * `radius` ≥ 0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarState {
    pub longitude: Radian,
    pub latitude: Radian,
    pub radius: f64,
    pub rates: Option<PolarRates>,
}

impl PolarState {
    /// The origin: every coordinate is zero and no rates are attached.
    pub const ZERO: PolarState = PolarState {
        longitude: 0.0,
        latitude: 0.0,
        radius: 0.0,
        rates: None,
    };

    pub fn new(longitude: Radian, latitude: Radian, radius: f64) -> Self {
        PolarState {
            longitude,
            latitude,
            radius,
            rates: None,
        }
    }

    pub fn with_rates(self, rates: PolarRates) -> Self {
        PolarState {
            rates: Some(rates),
            ..self
        }
    }

    /// d(longitude)/dt, if rates are attached.
    pub fn velocity_x(&self) -> Option<f64> {
        self.rates.map(|r| r.longitude_rate)
    }

    /// d(latitude)/dt, if rates are attached.
    pub fn velocity_y(&self) -> Option<f64> {
        self.rates.map(|r| r.latitude_rate)
    }

    /// d(radius)/dt, if rates are attached.
    pub fn velocity_z(&self) -> Option<f64> {
        self.rates.map(|r| r.radius_rate)
    }

    /// Unit vector pointing to `(longitude, latitude)`.
    pub fn direction(&self) -> Vector3<f64> {
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Cartesian position described by these polar coordinates.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        self.radius * self.direction()
    }
}
