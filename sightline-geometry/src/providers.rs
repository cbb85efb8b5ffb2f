//! External capability traits.
//!
//! The geometry itself is pure; everything time-dependent or data-driven
//! comes in through these traits. Implementations wrap whatever ephemeris
//! toolkit the mission uses (SPK kernels, Horizons queries, fixtures in
//! tests) and are constructed once at startup, then passed by reference into
//! [`MissionGeometry`](crate::MissionGeometry). Nothing in this crate reads
//! ambient global state.
//!
//! Bodies and frames are identified by name (`"Pluto"`, `"J2000"`,
//! `"IAU_PLUTO"`); the interpretation of those names is up to the provider.

use crate::epoch::Epoch;
use crate::errors::GeometryResult;
use sightline_core::{RotationMatrix3, Vector3};

/// Supplies position vectors from a planetary/spacecraft ephemeris.
pub trait EphemerisProvider {
    /// Returns the position of `target` relative to `observer` at `epoch`,
    /// expressed in the named inertial `frame`, together with the one-way
    /// light time in seconds.
    fn position(
        &self,
        target: &str,
        observer: &str,
        frame: &str,
        epoch: Epoch,
    ) -> GeometryResult<(Vector3, f64)>;
}

/// Supplies rotation matrices between named reference frames.
pub trait FrameRotationProvider {
    /// Returns the matrix transforming vectors from `from_frame` to
    /// `to_frame` at `epoch`.
    ///
    /// The result is expected to be orthonormal with determinant +1; the
    /// geometry trusts it and does not re-verify.
    fn rotation(&self, from_frame: &str, to_frame: &str, epoch: Epoch)
        -> GeometryResult<RotationMatrix3>;
}

/// Converts mission-specific spacecraft clock strings into ephemeris time.
///
/// The clock string format (e.g. `"3/299195097.000"`) is spacecraft
/// telemetry convention and stays opaque to this crate.
pub trait TimeConverter {
    fn spacecraft_clock_to_epoch(&self, clock: &str) -> GeometryResult<Epoch>;
}
