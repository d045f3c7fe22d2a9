//! # eclipt
//!
//! Coordinate-frame conversions of positional astronomy:
//!
//! - equatorial → ecliptical cartesian rotation of a position and velocity
//!   ([`equ_to_ecl`], [`equ_to_ecl_experimental`]),
//! - cartesian → polar conversion of a position ([`cart_to_polar`]),
//! - cartesian → polar conversion of a position and velocity, with explicit
//!   handling of the degenerate states ([`cart_to_polar_with_speed`]),
//! - the obliquity of the ecliptic they depend on ([`obliquity`]).
//!
//! Every function is pure: inputs are borrowed, outputs are new values, and
//! nothing is cached or shared between calls.
//!
//! ```rust
//! use eclipt::{cart_to_polar_with_speed, equ_to_ecl, CartesianState, TimeOffset};
//! use nalgebra::Vector3;
//!
//! let equ = CartesianState::new(Vector3::new(0.2, -0.9, -0.4), Vector3::new(0.017, 0.003, 0.001));
//! let ecl = equ_to_ecl(&equ, TimeOffset::from_mjd_tt(60000.0))?;
//! let polar = cart_to_polar_with_speed(&ecl)?;
//! assert!((0.0..std::f64::consts::TAU).contains(&polar.longitude));
//! # Ok::<(), eclipt::EcliptError>(())
//! ```

pub mod angle_math;
pub mod constants;
pub mod converter;
pub mod eclipt_errors;
pub mod obliquity;
pub mod polar;
pub mod ref_system;
pub mod state;
pub mod time;

pub use angle_math::{atn2_with_360_check, atn2_with_90_check};
pub use converter::EclipticConverter;
pub use eclipt_errors::EcliptError;
pub use obliquity::{find_eps, Iau1976, Iau2006, LinearJ2000, ObliquityModel, ObliquityProvider};
pub use polar::{cart_to_polar, cart_to_polar_with_speed, polar_to_cart_with_speed};
pub use ref_system::{ecl_to_equ, ecl_to_equ_with, equ_to_ecl, equ_to_ecl_experimental, equ_to_ecl_with};
pub use state::{CartesianState, PolarRates, PolarState};
pub use time::TimeOffset;
