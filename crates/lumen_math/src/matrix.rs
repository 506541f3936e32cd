//! Row-major 4x4 matrix.

use std::fmt;
use std::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::{approx_eq, approx_eq_slice, MathError, MathResult, Point3, Vector3};

#[inline]
const fn index(row: usize, column: usize) -> usize {
    row * 4 + column
}

/// A 4x4 matrix stored row-major. Defaults to the identity.
///
/// No invariant is enforced: the matrix may be singular, in which case
/// [`Matrix4::inverse`] reports [`MathError::MatrixSingular`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Matrix4 {
    #[rustfmt::skip]
    pub const IDENTITY: Matrix4 = Matrix4::new([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Build from 16 row-major elements.
    #[inline]
    pub const fn new(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Build from four rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut elements = [0.0; 16];
        let mut row = 0;
        while row < 4 {
            let mut column = 0;
            while column < 4 {
                elements[index(row, column)] = rows[row][column];
                column += 1;
            }
            row += 1;
        }
        Self { elements }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Element at `(row, column)`. Panics if either index is out of `0..4`.
    #[inline]
    pub const fn get(&self, row: usize, column: usize) -> f32 {
        self.elements[index(row, column)]
    }

    /// The row-major element array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.elements
    }

    #[rustfmt::skip]
    pub const fn transpose(&self) -> Matrix4 {
        let e = &self.elements;
        Matrix4::new([
            e[0], e[4], e[8], e[12],
            e[1], e[5], e[9], e[13],
            e[2], e[6], e[10], e[14],
            e[3], e[7], e[11], e[15],
        ])
    }

    /// Apply to a point (`w = 1`).
    ///
    /// If the resulting `w` is not 1 the coordinates are divided by it, so
    /// projective matrices produce a proper point.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let e = &self.elements;
        let mut result = [0.0_f32; 4];
        for (row, value) in result.iter_mut().enumerate() {
            *value = e[index(row, 0)] * p.x()
                + e[index(row, 1)] * p.y()
                + e[index(row, 2)] * p.z()
                + e[index(row, 3)];
        }

        let [x, y, z, w] = result;
        if approx_eq(w, 1.0) {
            Point3::new(x, y, z)
        } else {
            let inv_w = 1.0 / w;
            Point3::new(x * inv_w, y * inv_w, z * inv_w)
        }
    }

    /// Apply to a vector (`w = 0`). Only the upper-left 3x3 block is used,
    /// translation has no effect.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let e = &self.elements;
        let row = |r: usize| {
            e[index(r, 0)] * v.x() + e[index(r, 1)] * v.y() + e[index(r, 2)] * v.z()
        };
        Vector3::new(row(0), row(1), row(2))
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Matrix4) -> Matrix4 {
        let mut result = [0.0_f32; 16];
        for row in 0..4 {
            for column in 0..4 {
                result[index(row, column)] = (0..4)
                    .map(|i| self.elements[index(row, i)] * rhs.elements[index(i, column)])
                    .sum();
            }
        }
        Matrix4::new(result)
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// The forward pass reduces to upper triangular form with a unit
    /// diagonal, the backward pass clears everything above the diagonal.
    /// Every row operation is mirrored into an identity seed, which ends up
    /// holding the inverse.
    ///
    /// A pivot is rejected when it is within [`TOLERANCE`](crate::TOLERANCE)
    /// of zero in absolute terms, not relative to the matrix scale. Matrices
    /// whose entries are all tiny, such as a uniform scale by `1e-4`, report
    /// [`MathError::MatrixSingular`] even though they are invertible; build
    /// those with an analytic inverse (e.g. [`Transform::scale`](crate::Transform::scale)).
    pub fn inverse(&self) -> MathResult<Matrix4> {
        let mut reduced = self.elements;
        let mut inverse = Self::IDENTITY.elements;

        for pivot in 0..4 {
            swap_in_pivot_row(&mut reduced, &mut inverse, pivot)?;
            let leading = reduced[index(pivot, pivot)];

            for row in pivot + 1..4 {
                combine_rows(&mut reduced, &mut inverse, pivot, row, leading);
            }

            scale_row(&mut reduced, &mut inverse, pivot, 1.0 / leading);
        }

        // Diagonal is all ones now, eliminate upwards.
        for pivot in (1..4).rev() {
            for row in 0..pivot {
                combine_rows(&mut reduced, &mut inverse, pivot, row, 1.0);
            }
        }

        Ok(Matrix4::new(inverse))
    }

    /// Tolerance-based comparison against the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Move the row with the largest magnitude in the pivot column (at or below
/// `pivot`) into the pivot position.
fn swap_in_pivot_row(
    reduced: &mut [f32; 16],
    inverse: &mut [f32; 16],
    pivot: usize,
) -> MathResult<()> {
    let mut best_row = pivot;
    let mut best = reduced[index(pivot, pivot)].abs();
    for row in pivot + 1..4 {
        let candidate = reduced[index(row, pivot)].abs();
        if candidate > best {
            best_row = row;
            best = candidate;
        }
    }

    if best.is_nan() || approx_eq(best, 0.0) {
        log::debug!("Matrix4::inverse: no usable pivot in column {}", pivot);
        return Err(MathError::MatrixSingular);
    }

    if best_row != pivot {
        for column in 0..4 {
            reduced.swap(index(pivot, column), index(best_row, column));
            inverse.swap(index(pivot, column), index(best_row, column));
        }
    }

    Ok(())
}

/// `row_target -= (element / leading) * row_pivot`, zeroing the pivot column
/// of the target row.
fn combine_rows(
    reduced: &mut [f32; 16],
    inverse: &mut [f32; 16],
    pivot: usize,
    target: usize,
    leading: f32,
) {
    let scalar = -reduced[index(target, pivot)] / leading;
    for column in 0..4 {
        let from = index(pivot, column);
        let to = index(target, column);
        reduced[to] += scalar * reduced[from];
        inverse[to] += scalar * inverse[from];
    }
}

fn scale_row(reduced: &mut [f32; 16], inverse: &mut [f32; 16], row: usize, scalar: f32) {
    for column in 0..4 {
        reduced[index(row, column)] *= scalar;
        inverse[index(row, column)] *= scalar;
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Element-wise [`approx_eq`].
impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        approx_eq_slice(&self.elements, &other.elements)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl Mul<Point3> for Matrix4 {
    type Output = Point3;

    fn mul(self, rhs: Point3) -> Point3 {
        self.transform_point(rhs)
    }
}

impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_vector(rhs)
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(elements: [f32; 16]) -> Self {
        Matrix4::new(elements)
    }
}

// glam stores columns, we store rows.
impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.transpose().elements)
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Matrix4::new(m.transpose().to_cols_array())
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            write!(f, "[ ")?;
            for column in 0..4 {
                write!(f, "{} ", self.get(row, column))?;
            }
            write!(f, "]")?;
            if row < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[rustfmt::skip]
    const SAMPLE: Matrix4 = Matrix4::new([
        1.0, 2.0, 3.0, 4.0,
        5.0, -6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, -12.0,
        13.0, 14.0, 15.0, 16.0,
    ]);

    #[test]
    fn test_default_is_identity() {
        assert!(Matrix4::default().is_identity());
        assert_eq!(Matrix4::identity(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_from_rows_matches_new() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, -6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, -12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m, SAMPLE);
        assert_eq!(m.get(1, 1), -6.0);
        assert_eq!(m.get(2, 3), -12.0);
    }

    #[test]
    fn test_transpose() {
        let t = SAMPLE.transpose();
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(t.get(row, column), SAMPLE.get(column, row));
            }
        }
        assert_eq!(t.transpose(), SAMPLE);
    }

    #[test]
    fn test_multiply_by_identity() {
        assert_eq!(SAMPLE * Matrix4::IDENTITY, SAMPLE);
        assert_eq!(Matrix4::IDENTITY * SAMPLE, SAMPLE);
    }

    #[test]
    fn test_multiply_known_product() {
        let a = Matrix4::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Matrix4::from_rows([
            [1.0, 0.0, 0.0, 3.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let expected = Matrix4::from_rows([
            [3.0, 2.0, 0.0, 3.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(a * b, expected);
    }

    #[test]
    fn test_transform_point_applies_translation() {
        let m = Matrix4::from_rows([
            [1.0, 0.0, 0.0, 10.0],
            [0.0, 1.0, 0.0, 20.0],
            [0.0, 0.0, 1.0, 30.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m * Point3::new(1.0, 2.0, 3.0), Point3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let m = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 10.0],
            [0.0, 1.0, 0.0, 20.0],
            [0.0, 0.0, 1.0, 30.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m * Vector3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_point_divides_by_w() {
        // w' = z
        let m = Matrix4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(m * Point3::new(2.0, 4.0, 2.0), Point3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_identity_inverse_is_identity() {
        assert!(Matrix4::IDENTITY.inverse().unwrap().is_identity());
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let zero = Matrix4::new([0.0; 16]);
        assert_eq!(zero.inverse(), Err(MathError::MatrixSingular));
    }

    #[test]
    fn test_dependent_rows_are_singular() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.inverse(), Err(MathError::MatrixSingular));
    }

    #[test]
    fn test_tiny_pivots_are_treated_as_singular() {
        let tiny = Matrix4::from_rows([
            [1e-4, 0.0, 0.0, 0.0],
            [0.0, 1e-4, 0.0, 0.0],
            [0.0, 0.0, 1e-4, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(tiny.inverse(), Err(MathError::MatrixSingular));
    }

    #[test]
    fn test_inverse_requires_row_swap() {
        // Zero on the leading diagonal forces a pivot swap.
        let m = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 4.0, 0.0],
        ]);
        let inv = m.inverse().unwrap();
        let expected = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.25],
            [0.0, 0.0, 0.5, 0.0],
        ]);
        assert_eq!(inv, expected);
        assert!((m * inv).is_identity());
    }

    #[test]
    fn test_inverse_matches_glam() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut elements = [0.0_f32; 16];
            for e in elements.iter_mut() {
                *e = rng.gen_range(-1.0..1.0);
            }
            // Diagonally dominant keeps the matrix well conditioned
            for i in 0..4 {
                elements[index(i, i)] += 5.0;
            }
            let m = Matrix4::new(elements);

            let ours = m.inverse().unwrap();
            let oracle = Matrix4::from(glam::Mat4::from(m).inverse());

            assert_eq!(ours, oracle);
            assert!((m * ours).is_identity());
            assert!((ours * m).is_identity());
        }
    }

    #[test]
    fn test_glam_round_trip_preserves_layout() {
        let g: glam::Mat4 = SAMPLE.into();
        // Row 0, column 3 is the x translation slot in both conventions
        assert_eq!(g.w_axis.x, SAMPLE.get(0, 3));
        assert_eq!(g.x_axis.y, SAMPLE.get(1, 0));
        assert_eq!(Matrix4::from(g), SAMPLE);
    }

    #[test]
    fn test_pod_cast() {
        let bytes = bytemuck::bytes_of(&SAMPLE);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_display() {
        let text = Matrix4::IDENTITY.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("[ 1 0 0 0 ]"));
    }
}
