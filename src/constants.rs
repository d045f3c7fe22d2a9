//! # Constants and type definitions for eclipt
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **unit type aliases** used by the frame and polar conversions.
//!
//! ## Overview
//!
//! - Angular constants (π, 2π, π/2)
//! - Unit conversions (arcseconds → radians, days ↔ seconds)
//! - Epoch of reference J2000.0
//! - Coefficients of the linear obliquity approximation around J2000

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// π
pub const PI: f64 = std::f64::consts::PI;

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// π/2, the latitude of the north ecliptic pole
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Number of seconds in a Julian century
pub const SECONDS_PER_JULIAN_CENTURY: f64 = DAYS_PER_JULIAN_CENTURY * SECONDS_PER_DAY;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

// -------------------------------------------------------------------------------------------------
// Linear obliquity model
// -------------------------------------------------------------------------------------------------

/// Obliquity of the ecliptic at J2000.0 used by the linear model (radians, 84381.406″)
pub const EPS_J2000_LINEAR: f64 = 0.409_092_600_600_582_556_591_4;

/// Rate of change of the obliquity used by the linear model (radians per second)
pub const EPS_RATE_LINEAR: f64 = -0.000_000_000_000_071_947_550_4;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Time span in seconds
pub type Second = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
