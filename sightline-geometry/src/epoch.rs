//! Ephemeris-time epochs.
//!
//! An [`Epoch`] is an opaque instant on the continuous ephemeris (TDB-like)
//! time scale, stored as seconds past J2000.0. It carries no calendar
//! structure; its only job is to select which ephemeris vectors and which
//! frame rotation apply. Conversion from mission clock strings is the
//! business of a [`TimeConverter`](crate::TimeConverter) implementation.

use std::fmt;

/// An instant in continuous ephemeris time, as seconds past J2000.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch(f64);

impl Epoch {
    /// Creates an epoch from seconds past J2000.0 on the ephemeris scale.
    pub fn from_et_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Returns the J2000.0 reference epoch.
    pub fn j2000() -> Self {
        Self(0.0)
    }

    /// Returns seconds past J2000.0.
    pub fn et_seconds(&self) -> f64 {
        self.0
    }

    /// Returns a new epoch offset by the given number of seconds.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0 + seconds)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ET {:.3} s past J2000", self.0)
    }
}
