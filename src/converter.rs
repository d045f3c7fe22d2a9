//! # Configured conversion pipeline
//!
//! [`EclipticConverter`] bundles an [`ObliquityModel`] with the conversion chain
//!
//! ```text
//! equatorial cartesian ──equ_to_ecl──► ecliptical cartesian ──cart_to_polar_with_speed──► ecliptical polar
//! ```
//!
//! so an application can select the obliquity model once, from configuration,
//! and run every conversion through it.
//!
//! ```rust
//! use eclipt::converter::EclipticConverter;
//! use eclipt::state::CartesianState;
//! use eclipt::time::TimeOffset;
//! use nalgebra::Vector3;
//!
//! let converter = EclipticConverter::from_model_name("iau2006").unwrap();
//! let equ = CartesianState::new(Vector3::new(1.0, 0.5, 0.2), Vector3::new(0.0, 0.01, 0.0));
//! let polar = converter.equ_to_ecl_polar(&equ, TimeOffset::J2000).unwrap();
//! assert!(polar.radius > 0.0);
//! ```

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    eclipt_errors::EcliptError,
    obliquity::{ObliquityModel, ObliquityProvider},
    polar::{cart_to_polar, cart_to_polar_with_speed},
    ref_system::equatorial_to_ecliptic_rotation,
    state::{CartesianState, PolarState},
    time::TimeOffset,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ObliquityModel", into = "ObliquityModel")]
pub struct EclipticConverter {
    model: ObliquityModel,
}

impl EclipticConverter {
    pub fn new(model: ObliquityModel) -> Self {
        EclipticConverter { model }
    }

    /// Build a converter from a model name (`"iau2006"`, `"iau1976"`, `"linear"`, ...).
    pub fn from_model_name(name: &str) -> Result<Self, EcliptError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn model(&self) -> ObliquityModel {
        self.model
    }

    /// Rotation from the equatorial to the ecliptical frame at `t`.
    pub fn rotation(&self, t: TimeOffset) -> Rotation3<f64> {
        equatorial_to_ecliptic_rotation(self.model.obliquity(t))
    }

    /// Equatorial → ecliptical cartesian state (position and velocity).
    pub fn equ_to_ecl(
        &self,
        equ: &CartesianState,
        t: TimeOffset,
    ) -> Result<CartesianState, EcliptError> {
        let velocity = equ.require_velocity("EclipticConverter::equ_to_ecl")?;
        let rot = self.rotation(t);
        Ok(CartesianState::new(rot * equ.position, rot * velocity))
    }

    /// Equatorial → ecliptical cartesian position.
    pub fn equ_to_ecl_position(&self, position: &Vector3<f64>, t: TimeOffset) -> Vector3<f64> {
        self.rotation(t) * position
    }

    /// Equatorial → ecliptical polar coordinates with rates.
    pub fn equ_to_ecl_polar(
        &self,
        equ: &CartesianState,
        t: TimeOffset,
    ) -> Result<PolarState, EcliptError> {
        cart_to_polar_with_speed(&self.equ_to_ecl(equ, t)?)
    }

    /// Ecliptic longitude, latitude and distance of an equatorial position.
    pub fn equ_position_to_ecl_polar(&self, position: &Vector3<f64>, t: TimeOffset) -> PolarState {
        cart_to_polar(&self.equ_to_ecl_position(position, t))
    }
}

impl From<ObliquityModel> for EclipticConverter {
    fn from(model: ObliquityModel) -> Self {
        EclipticConverter::new(model)
    }
}

impl From<EclipticConverter> for ObliquityModel {
    fn from(converter: EclipticConverter) -> Self {
        converter.model
    }
}
