//! Spacecraft sight-line geometry.
//!
//! Given an ephemeris and a frame-rotation source, this crate answers two
//! mission questions:
//!
//! - Where does a body appear in the sky as seen from the spacecraft
//!   (apparent RA/Dec and range)?
//! - Where does a spacecraft-to-star sight line pass closest to a target
//!   body, expressed as latitude/longitude in the body's rotating frame?
//!
//! The second is the tangent-point problem: project the observer-to-target
//! vector onto the sight-line direction, take the offset from the target
//! center to that closest-approach point, rotate it into the body-fixed
//! frame, and reduce it to spherical coordinates.
//!
//! Ephemeris data, frame kinematics, and spacecraft clock conversion are not
//! implemented here. They enter through the [`EphemerisProvider`],
//! [`FrameRotationProvider`], and [`TimeConverter`] traits, constructed once
//! at startup and passed in explicitly; there is no global kernel state.

pub mod epoch;
pub mod errors;
pub mod mission;
pub mod providers;
pub mod spherical;
pub mod tangent;

pub use epoch::Epoch;
pub use errors::{GeometryError, GeometryResult};
pub use mission::MissionGeometry;
pub use providers::{EphemerisProvider, FrameRotationProvider, TimeConverter};
pub use spherical::SphericalCoordinate;
pub use tangent::TangentPointProjector;

pub use sightline_core::{RotationMatrix3, Vector3};
