use std::ops::Mul;

use glam::{DMat3, DMat4, DQuat, DVec3};

use crate::quaternion::rotation_to_quaternion;

/// A rigid transform made of a 3x3 rotation block and a translation vector.
///
/// The rotation block is taken as given: it is expected to be orthonormal but it is never
/// re-orthonormalized. A `Pose` is a plain value; every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    rotation: DMat3,
    translation: DVec3,
}

impl Pose {
    /// The identity pose at the origin.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Create a pose from a rotation block and a translation.
    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create a pose with an identity rotation block.
    pub fn from_translation(translation: DVec3) -> Self {
        Self::new(DMat3::IDENTITY, translation)
    }

    /// Create a pose from a row-major rotation block and a translation.
    ///
    /// Example:
    ///
    /// ```
    /// use posematch::Pose;
    ///
    /// let pose = Pose::from_rows(
    ///     [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
    ///     [1.0, 2.0, 3.0],
    /// );
    /// assert_eq!(pose.rotation_rows()[1][2], -1.0);
    /// ```
    pub fn from_rows(rotation: [[f64; 3]; 3], translation: [f64; 3]) -> Self {
        // from_cols_array_2d reads columns, so the transpose restores rows
        let rotation = DMat3::from_cols_array_2d(&rotation).transpose();
        Self::new(rotation, DVec3::from_array(translation))
    }

    /// The rotation block.
    #[inline]
    pub fn rotation(&self) -> DMat3 {
        self.rotation
    }

    /// The rotation block as row-major nested arrays, `rows[r][c]`.
    pub fn rotation_rows(&self) -> [[f64; 3]; 3] {
        self.rotation.transpose().to_cols_array_2d()
    }

    /// The translation vector.
    #[inline]
    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    /// The rotation block as a quaternion, see [`rotation_to_quaternion`].
    pub fn rotation_as_quaternion(&self) -> DQuat {
        rotation_to_quaternion(&self.rotation)
    }

    /// The homogeneous 4x4 matrix of the pose.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// The homogeneous 4x4 matrix as row-major nested arrays, `rows[r][c]`.
    pub fn to_rows_array(&self) -> [[f64; 4]; 4] {
        self.to_matrix().transpose().to_cols_array_2d()
    }

    /// The inverse transform.
    ///
    /// The rotation block is inverted as a general 3x3 matrix, so the result is exact for
    /// slightly non-orthonormal input too. A singular block yields non-finite values.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(rotation, -(rotation * self.translation))
    }

    /// Apply the transform to a 3D point.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Pose {
    type Output = Pose;

    /// Compose two transforms, `self` applied after `rhs`.
    fn mul(self, rhs: Pose) -> Self::Output {
        Pose::new(
            self.rotation * rhs.rotation,
            self.rotation * rhs.translation + self.translation,
        )
    }
}

/// An ordered, read-only collection of poses.
///
/// The order only matters for the first element, which the affine strategy uses as its
/// reference pose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseSet {
    poses: Vec<Pose>,
}

impl PoseSet {
    /// Create a pose set from a vector of poses.
    pub fn new(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    /// Get the number of poses in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Get as reference the poses in the set.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Get the pose at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Pose> {
        self.poses.get(index)
    }

    /// Get the first pose of the set, if any.
    pub fn first(&self) -> Option<&Pose> {
        self.poses.first()
    }

    /// Iterate over the poses in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }
}

impl From<Vec<Pose>> for PoseSet {
    fn from(poses: Vec<Pose>) -> Self {
        Self::new(poses)
    }
}

impl FromIterator<Pose> for PoseSet {
    fn from_iter<I: IntoIterator<Item = Pose>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PoseSet {
    type Item = &'a Pose;
    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}
