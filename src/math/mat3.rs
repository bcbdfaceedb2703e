//! 3x3 matrix used for camera orientation.
//!
//! # Convention
//! - Stored as `data[row][col]`
//! - `Mat3 * Vec3` treats the vector as a column vector (`M v`)
//! - `Vec3 * Mat3` treats the vector as a row vector (`vᵀ M`), which is how a
//!   world-space offset is re-expressed in the camera's basis: component `j`
//!   of the result is the dot product of the vector with column `j`.
//! - Rotations chain right-to-left: `A * B` applies B first, then A

use std::ops::Mul;

use super::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub fn identity() -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Mat3::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Returns column `col` as a vector.
    pub fn column(&self, col: usize) -> Vec3 {
        Vec3::new(self.data[0][col], self.data[1][col], self.data[2][col])
    }

    /// Returns row `row` as a vector.
    pub fn row(&self, row: usize) -> Vec3 {
        let [x, y, z] = self.data[row];
        Vec3::new(x, y, z)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.row(row).dot(rhs.column(col));
            }
        }

        Mat3::new(result)
    }
}

/// Column-vector transform: `M v`.
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.row(0).dot(rhs), self.row(1).dot(rhs), self.row(2).dot(rhs))
    }
}

/// Row-vector transform: `vᵀ M`.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        Vec3::new(
            self.dot(rhs.column(0)),
            self.dot(rhs.column(1)),
            self.dot(rhs.column(2)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_leaves_vectors_unchanged() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Mat3::identity() * v, v);
        assert_eq!(v * Mat3::identity(), v);
    }

    #[test]
    fn row_vector_product_is_transpose_product() {
        let m = Mat3::rotation_x(0.3) * Mat3::rotation_y(-0.7);
        let v = Vec3::new(0.5, 1.5, -2.0);
        let a = v * m;
        let b = m.transpose() * v;
        assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-6);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = Mat3::rotation_y(0.4) * Mat3::rotation_x(1.1);
        let product = m * m.transpose();
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(product.get(row, col), expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn quarter_turn_about_y() {
        // +X turned a quarter turn about Y ends up on -Z
        let rotated = Mat3::rotation_y(FRAC_PI_2).transpose() * Vec3::RIGHT;
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-6);
    }
}
