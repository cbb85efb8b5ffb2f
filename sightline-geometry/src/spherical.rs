//! Spherical decomposition of Cartesian vectors.
//!
//! The final step of every sight-line computation: reduce a vector to
//! (radius, longitude, latitude). In an inertial frame the angles read as
//! right ascension and declination; in a body-fixed frame they read as
//! surface longitude and latitude.

use sightline_core::constants::{PI, RAD_TO_DEG, TWOPI};
use sightline_core::Vector3;
use std::fmt;

/// A vector expressed in spherical form.
///
/// - `radius`: vector magnitude, >= 0, in the caller's length unit
/// - `longitude`: azimuthal angle in radians, in `(-pi, pi]`
/// - `latitude`: elevation from the XY plane in radians, in `[-pi/2, pi/2]`
///
/// Immutable value type; construct with [`from_vector`](Self::from_vector).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoordinate {
    radius: f64,
    longitude: f64,
    latitude: f64,
}

impl SphericalCoordinate {
    /// Decomposes a Cartesian vector into spherical coordinates.
    ///
    /// The zero vector maps to all-zero coordinates; callers that must treat
    /// it as an error (the tangent-point projector does) check the magnitude
    /// before converting.
    ///
    /// ```
    /// use sightline_core::Vector3;
    /// use sightline_geometry::SphericalCoordinate;
    ///
    /// let sph = SphericalCoordinate::from_vector(Vector3::new(-3.0, 0.0, 0.0));
    /// assert_eq!(sph.radius(), 3.0);
    /// assert_eq!(sph.longitude(), std::f64::consts::PI);
    /// assert_eq!(sph.latitude(), 0.0);
    /// ```
    pub fn from_vector(v: Vector3) -> Self {
        let radius = v.magnitude();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                longitude: 0.0,
                latitude: 0.0,
            };
        }

        let planar = libm::sqrt(v.x * v.x + v.y * v.y);
        let mut longitude = if planar == 0.0 {
            0.0
        } else {
            libm::atan2(v.y, v.x)
        };
        // atan2 can return exactly -pi for a negative-zero y; fold it onto
        // the (-pi, pi] branch
        if longitude <= -PI {
            longitude += TWOPI;
        }

        // atan2 form is stable near the poles, unlike asin(z / radius)
        let latitude = libm::atan2(v.z, planar);

        Self {
            radius,
            longitude,
            latitude,
        }
    }

    /// Vector magnitude, in the caller's length unit.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Azimuthal angle in radians, `(-pi, pi]`.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation angle in radians, `[-pi/2, pi/2]`.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, for reporting.
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude * RAD_TO_DEG
    }

    /// Latitude in degrees, for reporting.
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude * RAD_TO_DEG
    }
}

impl fmt::Display for SphericalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r={:.3} lon={:.6} deg lat={:.6} deg",
            self.radius,
            self.longitude_degrees(),
            self.latitude_degrees()
        )
    }
}
