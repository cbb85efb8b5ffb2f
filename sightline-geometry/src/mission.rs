//! Mission-level sight-line operations.
//!
//! [`MissionGeometry`] bundles the two externally supplied capabilities an
//! operation needs (ephemeris positions and frame rotations) and exposes the
//! computations the mission actually asks for. Providers are owned by the
//! struct and injected at construction; there is no process-global kernel
//! pool to load or unload.

use crate::epoch::Epoch;
use crate::errors::{GeometryError, GeometryResult};
use crate::providers::{EphemerisProvider, FrameRotationProvider};
use crate::spherical::SphericalCoordinate;
use crate::tangent::TangentPointProjector;
use sightline_core::Vector3;

/// Sight-line computations against a pair of providers.
///
/// Construct once at startup with concrete providers and share by reference;
/// every operation is pure with respect to the struct.
pub struct MissionGeometry<E, F> {
    ephemeris: E,
    frames: F,
    projector: TangentPointProjector,
}

impl<E: EphemerisProvider, F: FrameRotationProvider> MissionGeometry<E, F> {
    pub fn new(ephemeris: E, frames: F) -> Self {
        Self {
            ephemeris,
            frames,
            projector: TangentPointProjector,
        }
    }

    /// Apparent direction of a body as seen from the observer.
    ///
    /// Fetches the observer-to-target position in the named inertial frame
    /// and reduces it to spherical form: longitude reads as right ascension,
    /// latitude as declination, radius as range. Light time is evaluated by
    /// the provider but not applied here; the position is reported as the
    /// provider supplies it.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateGeometry`] if the provider reports a zero
    /// position vector, plus anything the provider itself raises.
    pub fn apparent_direction(
        &self,
        target: &str,
        observer: &str,
        frame: &str,
        epoch: Epoch,
    ) -> GeometryResult<SphericalCoordinate> {
        let (position, _light_time) = self.ephemeris.position(target, observer, frame, epoch)?;

        if position.magnitude() == 0.0 {
            return Err(GeometryError::degenerate(format!(
                "{} and {} coincide at {}; apparent direction undefined",
                target, observer, epoch
            )));
        }

        Ok(SphericalCoordinate::from_vector(position))
    }

    /// Sub-latitude/longitude on a target body of a star sight line's
    /// closest-approach point.
    ///
    /// The sight line leaves the observer toward the inertial RA/Dec pair
    /// (radians). The observer-to-target vector and the sight line are
    /// combined by the tangent-point projection, and the result is rotated
    /// from `inertial_frame` into `body_frame` before spherical reduction,
    /// so longitude and latitude read as body-surface coordinates.
    ///
    /// # Errors
    ///
    /// Everything [`TangentPointProjector::project`] raises, plus provider
    /// failures from the ephemeris or frame lookup.
    pub fn tangent_sub_point(
        &self,
        target: &str,
        observer: &str,
        inertial_frame: &str,
        body_frame: &str,
        ra: f64,
        dec: f64,
        epoch: Epoch,
    ) -> GeometryResult<SphericalCoordinate> {
        let (observer_to_target, _light_time) =
            self.ephemeris
                .position(target, observer, inertial_frame, epoch)?;
        let sight_line = Vector3::from_ra_dec(ra, dec);
        let rotation = self.frames.rotation(inertial_frame, body_frame, epoch)?;

        self.projector
            .project(observer_to_target, sight_line, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightline_core::constants::{HALF_PI, PI};
    use sightline_core::RotationMatrix3;

    /// Single-body ephemeris with a fixed position vector.
    struct FixedEphemeris {
        target: &'static str,
        position: Vector3,
    }

    impl EphemerisProvider for FixedEphemeris {
        fn position(
            &self,
            target: &str,
            _observer: &str,
            _frame: &str,
            _epoch: Epoch,
        ) -> GeometryResult<(Vector3, f64)> {
            if target != self.target {
                return Err(GeometryError::provider(format!(
                    "no ephemeris coverage for {}",
                    target
                )));
            }
            Ok((self.position, self.position.magnitude() / 299_792.458))
        }
    }

    /// Frame provider with a single fixed inertial-to-body rotation.
    struct FixedFrames {
        rotation: RotationMatrix3,
    }

    impl FrameRotationProvider for FixedFrames {
        fn rotation(
            &self,
            from_frame: &str,
            to_frame: &str,
            _epoch: Epoch,
        ) -> GeometryResult<RotationMatrix3> {
            if from_frame == to_frame {
                return Ok(RotationMatrix3::identity());
            }
            Ok(self.rotation)
        }
    }

    fn geometry(position: Vector3, rotation: RotationMatrix3) -> MissionGeometry<FixedEphemeris, FixedFrames> {
        MissionGeometry::new(
            FixedEphemeris {
                target: "Pluto",
                position,
            },
            FixedFrames { rotation },
        )
    }

    #[test]
    fn test_apparent_direction() {
        let geo = geometry(Vector3::new(1.0, 1.0, 0.0), RotationMatrix3::identity());
        let sph = geo
            .apparent_direction("Pluto", "Spacecraft", "J2000", Epoch::j2000())
            .unwrap();

        assert!((sph.longitude() - PI / 4.0).abs() < 1e-15);
        assert!(sph.latitude().abs() < 1e-15);
        assert!((sph.radius() - libm::sqrt(2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_apparent_direction_unknown_body() {
        let geo = geometry(Vector3::x_axis(), RotationMatrix3::identity());
        let result = geo.apparent_direction("Charon", "Spacecraft", "J2000", Epoch::j2000());
        assert!(matches!(result, Err(GeometryError::Provider { .. })));
    }

    #[test]
    fn test_apparent_direction_coincident_bodies() {
        let geo = geometry(Vector3::zeros(), RotationMatrix3::identity());
        let result = geo.apparent_direction("Pluto", "Spacecraft", "J2000", Epoch::j2000());
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_tangent_sub_point_identity_body_frame() {
        // Pluto at (3,0,4), star at the pole: tangent = (-3, 0, 0)
        let geo = geometry(Vector3::new(3.0, 0.0, 4.0), RotationMatrix3::identity());
        let sph = geo
            .tangent_sub_point(
                "Pluto",
                "Spacecraft",
                "J2000",
                "J2000",
                0.0,
                HALF_PI,
                Epoch::j2000(),
            )
            .unwrap();

        assert!((sph.radius() - 3.0).abs() < 1e-9);
        assert!((sph.longitude() - PI).abs() < 1e-9 || (sph.longitude() + PI).abs() < 1e-9);
        assert!(sph.latitude().abs() < 1e-9);
    }

    #[test]
    fn test_tangent_sub_point_rotating_body() {
        // Same geometry, body frame quarter-turned about the pole:
        // (-3,0,0) maps to (0,3,0), longitude +90 degrees
        let mut rotation = RotationMatrix3::identity();
        rotation.rotate_z(HALF_PI);

        let geo = geometry(Vector3::new(3.0, 0.0, 4.0), rotation);
        let sph = geo
            .tangent_sub_point(
                "Pluto",
                "Spacecraft",
                "J2000",
                "IAU_PLUTO",
                0.0,
                HALF_PI,
                Epoch::j2000(),
            )
            .unwrap();

        assert!((sph.radius() - 3.0).abs() < 1e-9);
        assert!((sph.longitude() - HALF_PI).abs() < 1e-9);
        assert!(sph.latitude().abs() < 1e-9);
    }

    #[test]
    fn test_tangent_sub_point_through_center_fails() {
        let geo = geometry(Vector3::new(0.0, 0.0, 5.0), RotationMatrix3::identity());
        let result = geo.tangent_sub_point(
            "Pluto",
            "Spacecraft",
            "J2000",
            "IAU_PLUTO",
            0.0,
            HALF_PI,
            Epoch::j2000(),
        );
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }
}
