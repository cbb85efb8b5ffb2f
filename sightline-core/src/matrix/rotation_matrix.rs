//! 3x3 rotation matrices for reference-frame transformations.
//!
//! A rotation matrix here always maps vectors from one named frame to another
//! at a specific epoch; a frame-rotation provider evaluates the matrix, this
//! type only applies it. Rotations are proper (orthogonal, determinant +1)
//! and preserve vector magnitude, which the tangent-point geometry relies on.
//!
//! # Conventions
//!
//! Elements are stored row-major. `rotate_x/y/z` follow the ERFA convention:
//! positive angles rotate the coordinate frame counterclockwise when looking
//! from the positive axis toward the origin, so `Rz(+90 deg)` takes the
//! vector `[1, 0, 0]` to `[0, -1, 0]`.
//!
//! ```
//! use sightline_core::{RotationMatrix3, Vector3};
//!
//! let mut body = RotationMatrix3::identity();
//! body.rotate_z(0.5);
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! let rotated = body * v;
//!
//! // Rotation preserves length
//! assert!((rotated.magnitude() - v.magnitude()).abs() < 1e-14);
//! ```

use super::Vector3;
use std::fmt;

/// A 3x3 rotation matrix mapping vectors between reference frames.
///
/// Construct with [`identity`](Self::identity) plus the `rotate_*` methods,
/// or [`from_array`](Self::from_array) when the elements come from an
/// external source. `from_array` does not validate orthonormality; use
/// [`is_rotation_matrix`](Self::is_rotation_matrix) when that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// Creates the identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a row-major 3x3 element array.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Returns the element at the given row and column (0-based).
    ///
    /// Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying row-major array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Applies a rotation about the X axis to this matrix in place.
    ///
    /// `self` becomes `Rx(phi) * self` with `phi` in radians (ERFA sign
    /// convention).
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);

        let a10 = c * self.elements[1][0] + s * self.elements[2][0];
        let a11 = c * self.elements[1][1] + s * self.elements[2][1];
        let a12 = c * self.elements[1][2] + s * self.elements[2][2];
        let a20 = -s * self.elements[1][0] + c * self.elements[2][0];
        let a21 = -s * self.elements[1][1] + c * self.elements[2][1];
        let a22 = -s * self.elements[1][2] + c * self.elements[2][2];

        self.elements[1] = [a10, a11, a12];
        self.elements[2] = [a20, a21, a22];
    }

    /// Applies a rotation about the Y axis to this matrix in place.
    ///
    /// `self` becomes `Ry(theta) * self` with `theta` in radians (ERFA sign
    /// convention).
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);

        let a00 = c * self.elements[0][0] - s * self.elements[2][0];
        let a01 = c * self.elements[0][1] - s * self.elements[2][1];
        let a02 = c * self.elements[0][2] - s * self.elements[2][2];
        let a20 = s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[2] = [a20, a21, a22];
    }

    /// Applies a rotation about the Z axis to this matrix in place.
    ///
    /// `self` becomes `Rz(psi) * self` with `psi` in radians (ERFA sign
    /// convention). Z rotations are the common case for body-fixed frames:
    /// a body spinning about its pole is an accumulating Rz.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    /// Multiplies this matrix by another, returning the product `self * other`.
    ///
    /// `other` acts first on a vector, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this rotation to a vector (standard matrix-vector product).
    pub fn apply(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.elements[0][0] * v.x + self.elements[0][1] * v.y + self.elements[0][2] * v.z,
            self.elements[1][0] * v.x + self.elements[1][1] * v.y + self.elements[1][2] * v.z,
            self.elements[2][0] * v.x + self.elements[2][1] * v.y + self.elements[2][2] * v.z,
        )
    }

    /// Returns the transpose.
    ///
    /// For a proper rotation the transpose equals the inverse, so this is the
    /// cheap and numerically stable way to get the reverse frame mapping.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Computes the determinant.
    ///
    /// A proper rotation has determinant +1; -1 indicates a reflection.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Checks whether this matrix is a proper rotation within a tolerance.
    ///
    /// Verifies determinant +1 and orthogonality (`M * M^T = I`), both to the
    /// given tolerance.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        let identity = Self::identity();

        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(v)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(v)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_identity() {
        let m = RotationMatrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);

        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m.apply(v), v);
    }

    #[test]
    fn test_rotate_z() {
        // ERFA convention: Rz(+90 deg) takes [1,0,0] to [0,-1,0]
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let v = m.apply(Vector3::x_axis());
        assert!(v.x.abs() < 1e-15);
        assert!((v.y + 1.0).abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_rotate_x() {
        // Rx(+90 deg) takes [0,1,0] to [0,0,-1]
        let mut m = RotationMatrix3::identity();
        m.rotate_x(HALF_PI);
        let v = m.apply(Vector3::y_axis());
        assert!(v.x.abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert!((v.z + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y() {
        // Ry(+90 deg) takes [0,0,1] to [-1,0,0]
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let v = m.apply(Vector3::z_axis());
        assert!((v.x + 1.0).abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.7);
        m.rotate_x(0.3);
        m.rotate_y(-1.1);

        let v = Vector3::new(-3.0, 5.0, 2.0);
        let rotated = m.apply(v);
        assert!((rotated.magnitude() - v.magnitude()).abs() < 1e-13);
    }

    #[test]
    fn test_transpose_is_inverse() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        m.rotate_x(0.3);

        let v = Vector3::new(1.0, 2.0, 3.0);
        let restored = m.transpose().apply(m.apply(v));

        assert!((restored.x - v.x).abs() < 1e-14);
        assert!((restored.y - v.y).abs() < 1e-14);
        assert!((restored.z - v.z).abs() < 1e-14);
    }

    #[test]
    fn test_is_rotation_matrix() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        m.rotate_x(0.3);
        assert!(m.is_rotation_matrix(1e-14));

        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-14));

        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_determinant_of_rotation_is_one() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(1.2);
        m.rotate_z(-0.4);
        assert!((m.determinant() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_mul_operators() {
        let mut a = RotationMatrix3::identity();
        a.rotate_x(0.1);
        let mut b = RotationMatrix3::identity();
        b.rotate_y(0.2);

        let by_method = a.multiply(&b);
        let by_value = a * b;
        let by_ref = &a * &b;
        assert_eq!(by_method, by_value);
        assert_eq!(by_method, by_ref);

        let v = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(a * v, a.apply(v));
        assert_eq!(&a * v, a.apply(v));
    }

    #[test]
    fn test_composition_order() {
        // (rz * rx) applies rx first, then rz
        let mut rx = RotationMatrix3::identity();
        rx.rotate_x(HALF_PI);
        let mut rz = RotationMatrix3::identity();
        rz.rotate_z(HALF_PI);

        let v = Vector3::y_axis();
        let composed = (rz * rx).apply(v);
        let stepwise = rz.apply(rx.apply(v));

        assert!((composed.x - stepwise.x).abs() < 1e-15);
        assert!((composed.y - stepwise.y).abs() < 1e-15);
        assert!((composed.z - stepwise.z).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let m = RotationMatrix3::identity();
        let s = format!("{}", m);
        assert!(s.contains("RotationMatrix3:"));
        assert!(s.contains("["));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        // JSON float parsing can be off by an ULP; compare elementwise
        // within a tolerance instead of exact equality
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.25);
        let json = serde_json::to_string(&m).unwrap();
        let back: RotationMatrix3 = serde_json::from_str(&json).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let diff = (back.get(i, j) - m.get(i, j)).abs();
                assert!(diff < 1e-15, "element ({}, {}) diff: {:.2e}", i, j, diff);
            }
        }
    }
}
