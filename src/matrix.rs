use libm::{cos, fabs, sin};
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3×3 rotation matrix, stored row-major as delivered by the motion sensor.
///
/// Rows and columns are zero-based in [`get`](Self::get), [`row`](Self::row)
/// and [`column`](Self::column). The `m11`..`m33` accessors use the one-based
/// naming of the sensor API. The matrix is expected to be orthonormal; nothing
/// here re-normalizes it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationMatrix(Matrix3<f64>);

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(Matrix3::new(
            r0[0], r0[1], r0[2], //
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2],
        ))
    }

    /// Builds a matrix from nine entries in `m11, m12, m13, m21, ..., m33` order.
    pub fn from_row_major(m: [f64; 9]) -> Self {
        Self(Matrix3::from_row_slice(&m))
    }

    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Converts a fused unit quaternion into its rotation matrix.
    pub fn from_quaternion(quaternion: &UnitQuaternion<f64>) -> Self {
        Self(quaternion.to_rotation_matrix().into_inner())
    }

    /// Builds `Rz(yaw) * Rx(pitch) * Ry(roll)`, angles in radians.
    ///
    /// X is the lateral axis, Y points forward and Z points up. This is the
    /// composition [`extract`](crate::extract) inverts, so
    /// `extract(&from_euler(p, r, yaw))` yields `(p, r)` in degrees for any yaw
    /// as long as `|p| < 90°`.
    pub fn from_euler(pitch: f64, roll: f64, yaw: f64) -> Self {
        let (sp, cp) = (sin(pitch), cos(pitch));
        let (sr, cr) = (sin(roll), cos(roll));
        let (sy, cy) = (sin(yaw), cos(yaw));

        let rx = Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, cp, -sp, //
            0.0, sp, cp,
        );
        let ry = Matrix3::new(
            cr, 0.0, sr, //
            0.0, 1.0, 0.0, //
            -sr, 0.0, cr,
        );
        let rz = Matrix3::new(
            cy, -sy, 0.0, //
            sy, cy, 0.0, //
            0.0, 0.0, 1.0,
        );
        Self(rz * rx * ry)
    }

    /// Returns the entry at zero-based `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get((row, col)).copied()
    }

    /// Zero-based row, `None` when `index > 2`.
    pub fn row(&self, index: usize) -> Option<Vector3<f64>> {
        (index < 3).then(|| self.0.row(index).transpose())
    }

    /// Zero-based column, `None` when `index > 2`.
    pub fn column(&self, index: usize) -> Option<Vector3<f64>> {
        (index < 3).then(|| self.0.column(index).into_owned())
    }

    pub fn m11(&self) -> f64 {
        self.0.m11
    }

    pub fn m12(&self) -> f64 {
        self.0.m12
    }

    pub fn m13(&self) -> f64 {
        self.0.m13
    }

    pub fn m21(&self) -> f64 {
        self.0.m21
    }

    pub fn m22(&self) -> f64 {
        self.0.m22
    }

    pub fn m23(&self) -> f64 {
        self.0.m23
    }

    pub fn m31(&self) -> f64 {
        self.0.m31
    }

    pub fn m32(&self) -> f64 {
        self.0.m32
    }

    pub fn m33(&self) -> f64 {
        self.0.m33
    }

    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    pub fn into_inner(self) -> Matrix3<f64> {
        self.0
    }

    pub fn to_row_major(&self) -> [f64; 9] {
        let m = &self.0;
        [
            m.m11, m.m12, m.m13, //
            m.m21, m.m22, m.m23, //
            m.m31, m.m32, m.m33,
        ]
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Checks that `M * Mᵀ` is the identity within `tolerance` per entry.
    ///
    /// Rows being orthonormal implies the columns are too for a square matrix.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let gram = self.0 * self.0.transpose();
        let deviation = gram - Matrix3::identity();
        deviation.iter().all(|e| fabs(*e) <= tolerance)
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }
}

impl From<RotationMatrix> for Matrix3<f64> {
    fn from(matrix: RotationMatrix) -> Self {
        matrix.0
    }
}

impl From<[[f64; 3]; 3]> for RotationMatrix {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}
