use glam::{DMat3, DQuat};

/// Convert a 3x3 rotation block to a quaternion using Shepperd's method.
///
/// The branch is picked from the trace and then from the largest diagonal entry, which
/// keeps the divisor away from zero for any orthonormal input. The input is not checked
/// for orthonormality and the result is not normalized.
///
/// # Arguments
///
/// * `rotation` - The rotation block.
///
/// # Returns
///
/// The quaternion as (x, y, z, w). For finite input the divisor of the selected branch is
/// at least 2; non-finite input propagates as non-finite components.
///
/// Example:
///
/// ```
/// use glam::DMat3;
/// use posematch::quaternion::rotation_to_quaternion;
///
/// let q = rotation_to_quaternion(&DMat3::IDENTITY);
/// assert_eq!(q.w, 1.0);
/// ```
pub fn rotation_to_quaternion(rotation: &DMat3) -> DQuat {
    // a[r][c], row-major
    let a = rotation.transpose().to_cols_array_2d();

    let trace = a[0][0] + a[1][1] + a[2][2];

    if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        DQuat::from_xyzw(
            (a[2][1] - a[1][2]) / s,
            (a[0][2] - a[2][0]) / s,
            (a[1][0] - a[0][1]) / s,
            0.25 * s,
        )
    } else if a[0][0] > a[1][1] && a[0][0] > a[2][2] {
        let s = (1.0 + a[0][0] - a[1][1] - a[2][2]).sqrt() * 2.0;
        DQuat::from_xyzw(
            0.25 * s,
            (a[0][1] + a[1][0]) / s,
            (a[0][2] + a[2][0]) / s,
            (a[2][1] - a[1][2]) / s,
        )
    } else if a[1][1] > a[2][2] {
        let s = (1.0 + a[1][1] - a[0][0] - a[2][2]).sqrt() * 2.0;
        DQuat::from_xyzw(
            (a[0][1] + a[1][0]) / s,
            0.25 * s,
            (a[1][2] + a[2][1]) / s,
            (a[0][2] - a[2][0]) / s,
        )
    } else {
        let s = (1.0 + a[2][2] - a[0][0] - a[1][1]).sqrt() * 2.0;
        DQuat::from_xyzw(
            (a[0][2] + a[2][0]) / s,
            (a[1][2] + a[2][1]) / s,
            0.25 * s,
            (a[1][0] - a[0][1]) / s,
        )
    }
}
