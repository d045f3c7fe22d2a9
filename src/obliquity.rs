//! # Obliquity of the ecliptic
//!
//! The obliquity ε is the angle between the Earth's equator and the ecliptic plane.
//! It is the single angle needed to rotate an equatorial state into the ecliptical
//! frame (see [`crate::ref_system`]).
//!
//! Models are exposed as strategies behind the [`ObliquityProvider`] trait:
//!
//! | Provider | Model | ε at J2000.0 |
//! |----------|-------|--------------|
//! | [`Iau2006`] | IAU 2006 mean obliquity, 5th order polynomial | 84381.406″ |
//! | [`Iau1976`] | IAU 1976 mean obliquity, 3rd order polynomial | 84381.448″ |
//! | [`LinearJ2000`] | linear approximation around J2000 | 84381.406″ |
//!
//! [`ObliquityModel`] is the runtime selector over the three providers; it parses
//! from and serializes to a short name so a host configuration can carry it.
//!
//! All providers are stateless and pure: the same [`TimeOffset`] always yields
//! the same angle, and they can be shared freely between threads.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    constants::{ArcSec, Radian, EPS_J2000_LINEAR, EPS_RATE_LINEAR, RADSEC},
    eclipt_errors::EcliptError,
    time::TimeOffset,
};

/// Source of the obliquity of the ecliptic at a given time.
pub trait ObliquityProvider: Send + Sync {
    /// Obliquity of the ecliptic, in radians, at `t`.
    fn obliquity(&self, t: TimeOffset) -> Radian;
}

impl<P: ObliquityProvider + ?Sized> ObliquityProvider for &P {
    fn obliquity(&self, t: TimeOffset) -> Radian {
        (**self).obliquity(t)
    }
}

/// Mean obliquity of the ecliptic, IAU 2006 precession model.
///
/// Polynomial in Julian centuries `T` since J2000.0 (Capitaine et al. 2003):
///
/// ```text
/// ε = 84381.406 − 46.836769·T − 0.0001831·T² + 0.00200340·T³
///     − 0.000000576·T⁴ − 0.0000000434·T⁵   (arcseconds)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iau2006;

impl ObliquityProvider for Iau2006 {
    fn obliquity(&self, t: TimeOffset) -> Radian {
        let t = t.julian_centuries();

        let eps: ArcSec = 84381.406
            + (-46.836769
                + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
                * t;

        eps * RADSEC
    }
}

/// Mean obliquity of the ecliptic, IAU 1976 model.
///
/// Cubic polynomial in Julian centuries since J2000, evaluated with Horner's method:
///
/// ```text
/// ε = ((ob3 * t + ob2) * t + ob1) * t + ob0;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iau1976;

impl ObliquityProvider for Iau1976 {
    fn obliquity(&self, t: TimeOffset) -> Radian {
        // Obliquity coefficients
        let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
        let ob1 = -46.815 * RADSEC;
        let ob2 = -0.0006 * RADSEC;
        let ob3 = 0.00181 * RADSEC;

        let t = t.julian_centuries();

        ((ob3 * t + ob2) * t + ob1) * t + ob0
    }
}

/// Linear approximation of the obliquity around J2000.0.
///
/// `ε = ε₀ + t · ε̇` with `t` in seconds since J2000, ε₀ = 84381.406″ and ε̇ ≈ −46.83″ per
/// Julian century. Matches [`Iau2006`] at J2000; the gap is about 1.3e-8 rad after one century.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearJ2000;

impl ObliquityProvider for LinearJ2000 {
    fn obliquity(&self, t: TimeOffset) -> Radian {
        EPS_J2000_LINEAR + t.seconds() * EPS_RATE_LINEAR
    }
}

/// Obliquity of the ecliptic from the standard model ([`Iau2006`]).
pub fn find_eps(t: TimeOffset) -> Radian {
    Iau2006.obliquity(t)
}

/// Runtime selection of an obliquity model.
///
/// Parses (case-insensitively) from:
/// * `"iau2006"` → [`ObliquityModel::Iau2006`]
/// * `"iau1976"` → [`ObliquityModel::Iau1976`]
/// * `"linear"` or `"experimental"` → [`ObliquityModel::LinearJ2000`]
///
/// and (de)serializes through the same names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub enum ObliquityModel {
    #[default]
    Iau2006,
    Iau1976,
    LinearJ2000,
}

impl ObliquityProvider for ObliquityModel {
    fn obliquity(&self, t: TimeOffset) -> Radian {
        match self {
            ObliquityModel::Iau2006 => Iau2006.obliquity(t),
            ObliquityModel::Iau1976 => Iau1976.obliquity(t),
            ObliquityModel::LinearJ2000 => LinearJ2000.obliquity(t),
        }
    }
}

impl fmt::Display for ObliquityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObliquityModel::Iau2006 => "iau2006",
            ObliquityModel::Iau1976 => "iau1976",
            ObliquityModel::LinearJ2000 => "linear",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ObliquityModel {
    type Err = EcliptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iau2006" => Ok(ObliquityModel::Iau2006),
            "iau1976" => Ok(ObliquityModel::Iau1976),
            "linear" | "experimental" => Ok(ObliquityModel::LinearJ2000),
            _ => Err(EcliptError::UnknownObliquityModel(s.to_string())),
        }
    }
}
