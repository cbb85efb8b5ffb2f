//! Math primitives for spacecraft sight-line geometry.
//!
//! This crate holds the value types everything else is built on: 3D Cartesian
//! vectors in an inertial reference frame and 3x3 rotation matrices for
//! transforming between frames. Both are plain `Copy` types with no interior
//! state; all the mission-level operations live in `sightline-geometry`.

pub mod constants;
pub mod matrix;

pub use matrix::{RotationMatrix3, Vector3};
