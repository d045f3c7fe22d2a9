use hifitime::{Epoch, TimeScale};
use serde::{Deserialize, Serialize};

use crate::constants::{Second, MJD, SECONDS_PER_DAY, SECONDS_PER_JULIAN_CENTURY, T2000};

/// Elapsed time since J2000.0 (2000-01-01 12:00:00 TT), in seconds.
///
/// This is the only time argument of the obliquity models. It is a plain
/// newtype over `f64` so it can be built cheaply from whatever time
/// representation the caller already holds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOffset(pub Second);

impl TimeOffset {
    /// The reference epoch itself.
    pub const J2000: TimeOffset = TimeOffset(0.0);

    pub fn from_seconds(seconds: Second) -> Self {
        TimeOffset(seconds)
    }

    /// Build an offset from a Modified Julian Date expressed in the TT scale.
    pub fn from_mjd_tt(mjd: MJD) -> Self {
        TimeOffset((mjd - T2000) * SECONDS_PER_DAY)
    }

    /// Build an offset from a [`hifitime::Epoch`], whatever its time scale.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        Self::from_mjd_tt(epoch.to_mjd_tt_days())
    }

    pub fn seconds(&self) -> Second {
        self.0
    }

    /// Modified Julian Date (TT) of this offset.
    pub fn to_mjd_tt(&self) -> MJD {
        T2000 + self.0 / SECONDS_PER_DAY
    }

    /// Julian centuries elapsed since J2000.0, the time argument of the IAU polynomials.
    pub fn julian_centuries(&self) -> f64 {
        self.0 / SECONDS_PER_JULIAN_CENTURY
    }

    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_mjd_in_time_scale(self.to_mjd_tt(), TimeScale::TT)
    }
}

impl From<Second> for TimeOffset {
    fn from(seconds: Second) -> Self {
        TimeOffset(seconds)
    }
}

impl From<Epoch> for TimeOffset {
    fn from(epoch: Epoch) -> Self {
        TimeOffset::from_epoch(&epoch)
    }
}
