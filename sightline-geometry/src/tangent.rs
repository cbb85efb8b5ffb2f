//! Closest-approach (tangent-point) projection.
//!
//! For a ray leaving the observer along a unit direction `u`, the point on
//! the ray nearest to a target body's center is found by projecting the
//! observer-to-target vector `t` onto the ray:
//!
//! ```text
//! s = t . u                  (scalar projection length)
//! point_on_ray = s * u       (observer-relative)
//! tangent = s * u - t        (target-center-relative)
//! ```
//!
//! "Tangent point" here means closest approach of the line to the body
//! center, not an optical tangent to the body's surface. The tangent vector
//! is then rotated into the body-fixed frame and reduced to spherical
//! coordinates, giving the sub-latitude/longitude of the point in the body's
//! rotating frame.

use crate::errors::{GeometryError, GeometryResult};
use crate::spherical::SphericalCoordinate;
use sightline_core::{RotationMatrix3, Vector3};

/// Tolerance on the direction vector's magnitude. Callers are responsible
/// for normalizing; anything further than this from unit length is rejected
/// rather than producing silently wrong geometry.
pub const DIRECTION_UNIT_TOLERANCE: f64 = 1e-6;

/// Computes the closest-approach point of a sight line relative to a target
/// body and expresses it in the body's rotating frame.
///
/// Stateless and pure; a single instance can serve any number of concurrent
/// callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TangentPointProjector;

impl TangentPointProjector {
    /// Projects the sight line and returns the tangent point in spherical
    /// body-frame coordinates.
    ///
    /// Inputs must all refer to the same inertial frame and epoch:
    /// - `observer_to_target`: position of the target body relative to the
    ///   observer
    /// - `direction`: unit vector along the sight line, from the observer
    /// - `body_rotation`: inertial-to-body-frame rotation at the epoch,
    ///   assumed orthonormal (supplied by a trusted frame provider, not
    ///   re-verified here)
    ///
    /// The returned radius equals the inertial tangent-vector magnitude to
    /// within floating-point rounding, since rotation preserves norm.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidInput`] if `direction` is not unit length
    ///   within [`DIRECTION_UNIT_TOLERANCE`], or if `observer_to_target` is
    ///   the zero vector (observer co-located with the target).
    /// - [`GeometryError::DegenerateGeometry`] if the ray passes through the
    ///   target center, leaving longitude and latitude undefined.
    ///
    /// ```
    /// use sightline_core::{RotationMatrix3, Vector3};
    /// use sightline_geometry::TangentPointProjector;
    ///
    /// let projector = TangentPointProjector;
    /// let sph = projector
    ///     .project(
    ///         Vector3::new(3.0, 0.0, 4.0),
    ///         Vector3::z_axis(),
    ///         RotationMatrix3::identity(),
    ///     )
    ///     .unwrap();
    ///
    /// // s = 4, tangent = (0,0,4) - (3,0,4) = (-3, 0, 0)
    /// assert!((sph.radius() - 3.0).abs() < 1e-15);
    /// assert_eq!(sph.longitude(), std::f64::consts::PI);
    /// assert_eq!(sph.latitude(), 0.0);
    /// ```
    pub fn project(
        &self,
        observer_to_target: Vector3,
        direction: Vector3,
        body_rotation: RotationMatrix3,
    ) -> GeometryResult<SphericalCoordinate> {
        let target_magnitude = observer_to_target.magnitude();
        if target_magnitude == 0.0 {
            return Err(GeometryError::invalid_input(
                "observer-to-target vector is zero (observer co-located with target)",
            ));
        }

        let direction_magnitude = direction.magnitude();
        if (direction_magnitude - 1.0).abs() > DIRECTION_UNIT_TOLERANCE {
            return Err(GeometryError::invalid_input(format!(
                "direction vector magnitude {:.9} is not unit length",
                direction_magnitude
            )));
        }

        let s = observer_to_target.dot(&direction);
        let tangent_inertial = direction * s - observer_to_target;

        // Scale the zero test by the input magnitude so kilometer-scale and
        // AU-scale inputs degenerate at comparable relative offsets
        if tangent_inertial.magnitude() <= f64::EPSILON * target_magnitude {
            return Err(GeometryError::degenerate(
                "sight line passes through the target center; latitude/longitude undefined",
            ));
        }

        let tangent_body = body_rotation.apply(tangent_inertial);
        Ok(SphericalCoordinate::from_vector(tangent_body))
    }
}
