//! Builders for 3x3 rotation matrices.
//!
//! All rotations are right-handed: a positive angle turns counterclockwise
//! when viewed looking down the axis toward the origin.

use crate::{Angle, GeometryError, Matrix, Vec3, row_matrix};

/// Returns the matrix for a rotation about the X axis.
pub fn rotation_x(angle: Angle) -> Matrix {
    let (s, c) = (angle.sin(), angle.cos());
    row_matrix![[1, 0, 0], [0, c, -s], [0, s, c]]
}

/// Returns the matrix for a rotation about the Y axis.
pub fn rotation_y(angle: Angle) -> Matrix {
    let (s, c) = (angle.sin(), angle.cos());
    row_matrix![[c, 0, s], [0, 1, 0], [-s, 0, c]]
}

/// Returns the matrix for a rotation about the Z axis.
pub fn rotation_z(angle: Angle) -> Matrix {
    let (s, c) = (angle.sin(), angle.cos());
    row_matrix![[c, -s, 0], [s, c, 0], [0, 0, 1]]
}

/// Returns the matrix for a rotation about an arbitrary axis through the
/// origin, using the Rodrigues rotation formula:
///
/// ```text
/// R = I cos θ + [k]× sin θ + (1 - cos θ) k kᵀ
/// ```
///
/// `axis` is normalized first. Returns [`GeometryError::ZeroVector`] if it is
/// zero.
pub fn rotation_about_axis(axis: Vec3, angle: Angle) -> Result<Matrix, GeometryError> {
    let k = axis.normalize().ok_or(GeometryError::ZeroVector)?;
    Ok(rotation_about_unit_axis(k, angle))
}

/// Same as [`rotation_about_axis()`], but skips normalization. `k` must be
/// a unit vector.
pub fn rotation_about_unit_axis(k: Vec3, angle: Angle) -> Matrix {
    let (s, c) = (angle.sin(), angle.cos());
    let t = 1.0 - c;
    Matrix::from_fn(3, 3, |i, j| {
        let (ki, kj) = (k.get(i as u8), k.get(j as u8));
        let identity_term = if i == j { c } else { 0.0 };
        // entries of the cross-product matrix [k]×
        let cross_term = match (i, j) {
            (0, 1) => -k.z,
            (0, 2) => k.y,
            (1, 0) => k.z,
            (1, 2) => -k.x,
            (2, 0) => -k.y,
            (2, 1) => k.x,
            _ => 0.0,
        };
        identity_term + s * cross_term + t * ki * kj
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::*;

    #[test]
    fn test_elementary_rotations() {
        let q = Angle::QUARTER_TURN;
        assert_approx_eq!(rotation_x(q).apply_to(Vec3::Y), Vec3::Z);
        assert_approx_eq!(rotation_y(q).apply_to(Vec3::Z), Vec3::X);
        assert_approx_eq!(rotation_z(q).apply_to(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_rodrigues_matches_elementary() {
        let angle = Angle::from_degrees(37.0);
        assert_approx_eq!(rotation_about_axis(Vec3::X, angle).unwrap(), rotation_x(angle));
        assert_approx_eq!(rotation_about_axis(Vec3::Y, angle).unwrap(), rotation_y(angle));
        assert_approx_eq!(rotation_about_axis(Vec3::Z * 4.0, angle).unwrap(), rotation_z(angle));
        assert_eq!(
            rotation_about_axis(Vec3::ZERO, angle),
            Err(GeometryError::ZeroVector),
        );
    }

    proptest! {
        #[test]
        fn proptest_rotation_is_orthonormal(
            x in -5.0..5.0_f64,
            y in -5.0..5.0_f64,
            z in -5.0..5.0_f64,
            degrees in -360.0..360.0_f64,
        ) {
            let axis = vec3![x, y, z];
            prop_assume!(axis.mag() > 0.1);
            let r = rotation_about_axis(axis, Angle::from_degrees(degrees)).unwrap();
            let r_rt = r.try_mul(&r.transpose()).unwrap();
            prop_assert!(approx::abs_diff_eq!(r_rt, Matrix::ident(3), epsilon = 1e-9));
            prop_assert!(approx::abs_diff_eq!(r.determinant().unwrap(), 1.0, epsilon = 1e-9));
        }
    }
}
