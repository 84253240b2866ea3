use posematch::Pose;
use serde::{Deserialize, Serialize};

/// A stored pose: a 4x4 matrix with one field per element, `mRC` = row R, column C.
///
/// Fields are declared column by column, matching the order the records are written in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct MatrixRecord {
    pub m00: f64,
    pub m10: f64,
    pub m20: f64,
    pub m30: f64,
    pub m01: f64,
    pub m11: f64,
    pub m21: f64,
    pub m31: f64,
    pub m02: f64,
    pub m12: f64,
    pub m22: f64,
    pub m32: f64,
    pub m03: f64,
    pub m13: f64,
    pub m23: f64,
    pub m33: f64,
}

impl MatrixRecord {
    /// The record of a pose.
    pub fn from_pose(pose: &Pose) -> Self {
        let [r0, r1, r2, r3] = pose.to_rows_array();
        Self {
            m00: r0[0],
            m10: r1[0],
            m20: r2[0],
            m30: r3[0],
            m01: r0[1],
            m11: r1[1],
            m21: r2[1],
            m31: r3[1],
            m02: r0[2],
            m12: r1[2],
            m22: r2[2],
            m32: r3[2],
            m03: r0[3],
            m13: r1[3],
            m23: r2[3],
            m33: r3[3],
        }
    }

    /// The pose stored in the record; the homogeneous row is ignored.
    pub fn to_pose(&self) -> Pose {
        Pose::from_rows(
            [
                [self.m00, self.m01, self.m02],
                [self.m10, self.m11, self.m12],
                [self.m20, self.m21, self.m22],
            ],
            [self.m03, self.m13, self.m23],
        )
    }

    /// Check whether the bottom row is `(0, 0, 0, 1)`.
    pub fn is_rigid(&self) -> bool {
        self.m30 == 0.0 && self.m31 == 0.0 && self.m32 == 0.0 && self.m33 == 1.0
    }
}

/// An exported offset: a 4x4 matrix with one field per element, `eRC` = row R, column C.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct OffsetRecord {
    pub e00: f64,
    pub e01: f64,
    pub e02: f64,
    pub e03: f64,
    pub e10: f64,
    pub e11: f64,
    pub e12: f64,
    pub e13: f64,
    pub e20: f64,
    pub e21: f64,
    pub e22: f64,
    pub e23: f64,
    pub e30: f64,
    pub e31: f64,
    pub e32: f64,
    pub e33: f64,
}

impl OffsetRecord {
    /// The record of an offset given as a rigid transform.
    pub fn from_pose(pose: &Pose) -> Self {
        let rows = pose.to_rows_array();
        Self::from_rows(&rows)
    }

    /// The record of a row-major 4x4 matrix.
    pub fn from_rows(rows: &[[f64; 4]; 4]) -> Self {
        let [[e00, e01, e02, e03], [e10, e11, e12, e13], [e20, e21, e22, e23], [e30, e31, e32, e33]] =
            *rows;
        Self {
            e00,
            e01,
            e02,
            e03,
            e10,
            e11,
            e12,
            e13,
            e20,
            e21,
            e22,
            e23,
            e30,
            e31,
            e32,
            e33,
        }
    }

    /// The record as a row-major 4x4 matrix.
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        [
            [self.e00, self.e01, self.e02, self.e03],
            [self.e10, self.e11, self.e12, self.e13],
            [self.e20, self.e21, self.e22, self.e23],
            [self.e30, self.e31, self.e32, self.e33],
        ]
    }

    /// The rigid transform stored in the record; the homogeneous row is ignored.
    pub fn to_pose(&self) -> Pose {
        Pose::from_rows(
            [
                [self.e00, self.e01, self.e02],
                [self.e10, self.e11, self.e12],
                [self.e20, self.e21, self.e22],
            ],
            [self.e03, self.e13, self.e23],
        )
    }
}
