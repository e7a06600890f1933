/// View-space transform primitives for the silhouette classifier
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// Normalize a vector, returning the input unchanged when its magnitude
/// is exactly zero.
///
/// Degenerate normals or view vectors (e.g. the camera coincident with a
/// vertex) propagate as zero vectors, so downstream dot products evaluate
/// to zero and the classifier's boolean tests stay defined instead of
/// producing NaN.
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let magnitude = v.norm();
    if magnitude == 0.0 {
        v
    } else {
        v / magnitude
    }
}

/// Build a view matrix from 16 row-major elements.
///
/// The matrix multiplies column vectors, so row-major element order here
/// matches the layout constant-buffer dumps and the reference data use.
pub fn view_matrix_from_rows(elements: &[f32; 16]) -> Matrix4<f32> {
    Matrix4::from_row_slice(elements)
}

/// Transform a world-space normal into view space.
///
/// The normal is extended with w = 0 so the transform's translation does
/// not apply, then renormalized via the zero guard above.
pub fn view_normal(view: &Matrix4<f32>, normal: &Vector3<f32>) -> Vector3<f32> {
    let n4 = view * Vector4::new(normal.x, normal.y, normal.z, 0.0);
    normalize_or_zero(n4.xyz())
}

/// Transform a world-space position into view space.
///
/// The position is extended with w = 1 and the perspective divide is
/// applied unless the transformed w component is exactly zero, in which
/// case the raw xyz is used as-is.
pub fn view_position(view: &Matrix4<f32>, position: &Point3<f32>) -> Vector3<f32> {
    let p4 = view * Vector4::new(position.x, position.y, position.z, 1.0);
    if p4.w != 0.0 {
        p4.xyz() / p4.w
    } else {
        p4.xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_nonzero_has_unit_magnitude() {
        let v = normalize_or_zero(Vector3::new(3.0, -4.0, 12.0));
        assert!((v.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_exact_fixed_point() {
        let zero = Vector3::zeros();
        assert_eq!(normalize_or_zero(zero), zero);
    }

    #[test]
    fn test_normalize_is_idempotent_on_unit_vectors() {
        let unit = normalize_or_zero(Vector3::new(1.0, 2.0, -2.0));
        let again = normalize_or_zero(unit);
        assert!((again - unit).norm() < 1e-6);
    }

    #[test]
    fn test_view_matrix_row_major_layout() {
        let m = view_matrix_from_rows(&[
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(3, 0)], 13.0);
    }

    #[test]
    fn test_view_normal_ignores_translation() {
        let view = view_matrix_from_rows(&[
            1.0, 0.0, 0.0, 5.0, //
            0.0, 1.0, 0.0, -3.0, //
            0.0, 0.0, 1.0, 7.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let n = view_normal(&view, &Vector3::new(0.0, 0.0, 1.0));
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_view_position_applies_perspective_divide() {
        // Bottom row copies z into w, so w = 2 for this position
        let view = view_matrix_from_rows(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ]);
        let p = view_position(&view, &Point3::new(4.0, 6.0, 2.0));
        assert!((p - Vector3::new(2.0, 3.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_view_position_skips_divide_when_w_is_zero() {
        // Zero bottom row forces transformed w to exactly zero
        let view = view_matrix_from_rows(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        ]);
        let p = view_position(&view, &Point3::new(4.0, 6.0, 2.0));
        assert!(p.iter().all(|c| c.is_finite()));
        assert!((p - Vector3::new(4.0, 6.0, 2.0)).norm() < 1e-6);
    }
}
