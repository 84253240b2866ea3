use glam::{DMat3, DMat4, DVec3};

use crate::pose::Pose;

/// Elementwise approximate equality with a caller-supplied tolerance.
///
/// Two values are equal iff every pair of corresponding scalars differs by at most
/// `epsilon` (inclusive). A tolerance of zero requires exact equality. The relation is
/// symmetric; a NaN component never compares equal.
pub trait ToleranceEq {
    /// Check whether `self` and `other` are equal within `epsilon`.
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool;
}

/// Check whether two scalars differ by at most `epsilon`.
#[inline]
pub fn scalar_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

fn all_scalars_eq(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| scalar_eq(x, y, epsilon))
}

impl ToleranceEq for f64 {
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        scalar_eq(*self, *other, epsilon)
    }
}

impl ToleranceEq for DVec3 {
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        all_scalars_eq(&self.to_array(), &other.to_array(), epsilon)
    }
}

impl ToleranceEq for DMat3 {
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        all_scalars_eq(&self.to_cols_array(), &other.to_cols_array(), epsilon)
    }
}

impl ToleranceEq for DMat4 {
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        all_scalars_eq(&self.to_cols_array(), &other.to_cols_array(), epsilon)
    }
}

impl ToleranceEq for Pose {
    /// Compares the rotation block and the translation; the homogeneous row of a pose is
    /// constant, so this is the same as comparing the full 4x4 matrices.
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        rotation_eq(self, other, epsilon)
            && self.translation().tolerance_eq(&other.translation(), epsilon)
    }
}

/// Compare only the rotation blocks of two poses.
#[inline]
pub fn rotation_eq(a: &Pose, b: &Pose, epsilon: f64) -> bool {
    a.rotation().tolerance_eq(&b.rotation(), epsilon)
}

/// Compare only the translations of two poses.
#[inline]
pub fn translation_eq(a: &Pose, b: &Pose, epsilon: f64) -> bool {
    a.translation().tolerance_eq(&b.translation(), epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pose() -> Pose {
        Pose::from_rows(
            [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            [0.25, -3.5, 7.0],
        )
    }

    #[test]
    fn test_inclusive_bound() {
        assert!(scalar_eq(1.0, 1.5, 0.5));
        assert!(!scalar_eq(1.0, 1.5000001, 0.5));
        assert!(DVec3::new(0.0, 0.0, 0.0).tolerance_eq(&DVec3::new(0.25, -0.25, 0.0), 0.25));
    }

    #[test]
    fn test_zero_tolerance_is_exact() {
        let pose = sample_pose();
        assert!(pose.tolerance_eq(&pose, 0.0));

        let nudged = Pose::new(pose.rotation(), pose.translation() + DVec3::new(0.0, 1e-12, 0.0));
        assert!(!pose.tolerance_eq(&nudged, 0.0));
        assert!(pose.tolerance_eq(&nudged, 1e-9));
    }

    #[test]
    fn test_symmetry() {
        let a = sample_pose();
        let offsets = [1e-4, 5e-3, 1e-2, 0.1];
        for &delta in &offsets {
            let b = Pose::new(
                a.rotation() * DMat3::from_diagonal(DVec3::splat(1.0 + delta)),
                a.translation() - DVec3::splat(delta),
            );
            for &epsilon in &[0.0, 1e-3, 1e-2, 0.2] {
                assert_eq!(a.tolerance_eq(&b, epsilon), b.tolerance_eq(&a, epsilon));
                assert_eq!(
                    a.to_matrix().tolerance_eq(&b.to_matrix(), epsilon),
                    b.to_matrix().tolerance_eq(&a.to_matrix(), epsilon)
                );
                assert_eq!(rotation_eq(&a, &b, epsilon), rotation_eq(&b, &a, epsilon));
            }
        }
    }

    #[test]
    fn test_rotation_and_translation_only() {
        let a = sample_pose();
        let shifted = Pose::new(a.rotation(), a.translation() + DVec3::X);
        assert!(rotation_eq(&a, &shifted, 0.0));
        assert!(!translation_eq(&a, &shifted, 0.5));
        assert!(!a.tolerance_eq(&shifted, 0.5));

        let rotated = Pose::new(DMat3::IDENTITY, a.translation());
        assert!(translation_eq(&a, &rotated, 0.0));
        assert!(!rotation_eq(&a, &rotated, 0.5));
    }

    #[test]
    fn test_nan_never_equal() {
        let a = DVec3::new(f64::NAN, 0.0, 0.0);
        assert!(!a.tolerance_eq(&a, f64::MAX));
    }

    #[test]
    fn test_pose_agrees_with_matrix() {
        let a = sample_pose();
        let b = Pose::new(a.rotation(), a.translation() + DVec3::new(0.0, 0.0, 0.02));
        for &epsilon in &[0.01, 0.02, 0.03] {
            assert_eq!(
                a.tolerance_eq(&b, epsilon),
                a.to_matrix().tolerance_eq(&b.to_matrix(), epsilon)
            );
        }
    }
}
