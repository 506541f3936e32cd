// Spatial transforms as (matrix, inverse) pairs.
//
// Keeping the inverse alongside the matrix makes inversion free after
// construction. Factories that know their inverse analytically supply it
// directly; everything else goes through Matrix4::inverse().

use std::fmt;
use std::ops::Mul;

use crate::{MathError, MathResult, Matrix4, Normal3, Point3, Radians, Ray3, Vector3};

/// A matrix paired with its inverse.
///
/// `matrix * inverse ≈ identity` is maintained by the constructors but not
/// re-checked. [`Transform::new`] trusts the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    matrix: Matrix4,
    inverse: Matrix4,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Transform = Transform::new(Matrix4::IDENTITY, Matrix4::IDENTITY);

    /// Pair a matrix with a known inverse.
    #[inline]
    pub const fn new(matrix: Matrix4, inverse: Matrix4) -> Self {
        Self { matrix, inverse }
    }

    /// Build from a matrix alone, computing the inverse generically.
    pub fn from_matrix(matrix: Matrix4) -> MathResult<Self> {
        Ok(Self::new(matrix, matrix.inverse()?))
    }

    #[inline]
    pub const fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    #[inline]
    pub const fn inverse_matrix(&self) -> &Matrix4 {
        &self.inverse
    }

    /// The inverse transform. Swaps the pair, no computation.
    #[inline]
    pub const fn inverse(&self) -> Transform {
        Transform::new(self.inverse, self.matrix)
    }

    /// Transposes both halves of the pair.
    #[inline]
    pub const fn transpose(&self) -> Transform {
        Transform::new(self.matrix.transpose(), self.inverse.transpose())
    }

    /// Composition `self * other`: `other` is applied first.
    ///
    /// The inverse of a product is the product of inverses in reverse order.
    pub fn multiply(&self, other: &Transform) -> Transform {
        Transform::new(
            self.matrix.multiply(&other.matrix),
            other.inverse.multiply(&self.inverse),
        )
    }

    #[inline]
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.matrix.transform_point(p)
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.matrix.transform_vector(v)
    }

    /// Normals transform by the inverse transpose, not the forward matrix,
    /// so they stay perpendicular to surfaces under non-uniform scaling.
    /// The result is unit length.
    pub fn transform_normal(&self, n: Normal3) -> Normal3 {
        let inverse_transpose = self.inverse.transpose();
        Normal3::from(inverse_transpose.transform_vector(Vector3::from(n)))
    }

    /// Origin transforms as a point, direction as a vector. The ray is
    /// rebuilt through [`Ray3::new`], which renormalizes the direction.
    pub fn transform_ray(&self, r: &Ray3) -> Ray3 {
        Ray3::new(
            self.matrix.transform_point(r.origin()),
            self.matrix.transform_vector(r.direction()),
        )
    }

    #[rustfmt::skip]
    pub const fn translate(delta: Vector3) -> Transform {
        let (x, y, z) = (delta.x(), delta.y(), delta.z());
        let m = Matrix4::new([
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let inverse = Matrix4::new([
            1.0, 0.0, 0.0, -x,
            0.0, 1.0, 0.0, -y,
            0.0, 0.0, 1.0, -z,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Transform::new(m, inverse)
    }

    /// Non-uniform scale. The inverse uses reciprocal factors, so a zero
    /// factor yields an infinite inverse.
    #[rustfmt::skip]
    pub const fn scale(x: f32, y: f32, z: f32) -> Transform {
        let m = Matrix4::new([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let inverse = Matrix4::new([
            1.0 / x, 0.0,     0.0,     0.0,
            0.0,     1.0 / y, 0.0,     0.0,
            0.0,     0.0,     1.0 / z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        ]);
        Transform::new(m, inverse)
    }

    /// Rotation about the X axis. Rotations are orthogonal, their inverse
    /// is the transpose.
    #[rustfmt::skip]
    pub fn rotate_x(theta: Radians) -> Transform {
        let (s, c) = theta.sin_cos();
        let m = Matrix4::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Transform::new(m, m.transpose())
    }

    #[rustfmt::skip]
    pub fn rotate_y(theta: Radians) -> Transform {
        let (s, c) = theta.sin_cos();
        let m = Matrix4::new([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Transform::new(m, m.transpose())
    }

    #[rustfmt::skip]
    pub fn rotate_z(theta: Radians) -> Transform {
        let (s, c) = theta.sin_cos();
        let m = Matrix4::new([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Transform::new(m, m.transpose())
    }

    /// Rotation by `theta` about an arbitrary axis (Rodrigues' formula).
    /// `axis` is normalized here and must not be zero-length.
    pub fn rotate_axis_angle(axis: Vector3, theta: Radians) -> Transform {
        let a = axis.norm();
        let (x, y, z) = (a.x(), a.y(), a.z());
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;

        let m = Matrix4::from_rows([
            [x * x + (1.0 - x * x) * c, x * y * t - z * s, x * z * t + y * s, 0.0],
            [x * y * t + z * s, y * y + (1.0 - y * y) * c, y * z * t - x * s, 0.0],
            [x * z * t - y * s, y * z * t + x * s, z * z + (1.0 - z * z) * c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Transform::new(m, m.transpose())
    }

    /// Camera-to-world transform for a camera at `eye` looking at `target`.
    ///
    /// The basis columns are `left = up × forward`, `forward × left` and
    /// `forward`, with `eye` as the translation column. Fails with
    /// [`MathError::DegenerateBasis`] when `eye == target`, `up` is zero, or
    /// `up` is parallel to the viewing direction.
    pub fn look_at(eye: Point3, target: Point3, up: Vector3) -> MathResult<Transform> {
        let view = target - eye;
        if !(view.length_squared() > 0.0) || !(up.length_squared() > 0.0) {
            log::debug!("look_at: zero-length view ({}) or up ({})", view, up);
            return Err(MathError::DegenerateBasis);
        }

        let forward = view.norm();
        let left = up.norm().cross(forward);
        if !(left.length_squared() > f32::EPSILON) {
            log::debug!("look_at: up {} is parallel to view direction {}", up, forward);
            return Err(MathError::DegenerateBasis);
        }

        let left = left.norm();
        let new_up = forward.cross(left);

        let m = Matrix4::from_rows([
            [left.x(), new_up.x(), forward.x(), eye.x()],
            [left.y(), new_up.y(), forward.y(), eye.y()],
            [left.z(), new_up.z(), forward.z(), eye.z()],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Transform::from_matrix(m)
    }

    /// True when both the matrix and its inverse are (approximately) the
    /// identity.
    pub fn is_identity(&self) -> bool {
        self.matrix.is_identity() && self.inverse.is_identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.multiply(&rhs)
    }
}

impl Mul<Point3> for Transform {
    type Output = Point3;

    fn mul(self, rhs: Point3) -> Point3 {
        self.transform_point(rhs)
    }
}

impl Mul<Vector3> for Transform {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_vector(rhs)
    }
}

impl Mul<Normal3> for Transform {
    type Output = Normal3;

    fn mul(self, rhs: Normal3) -> Normal3 {
        self.transform_normal(rhs)
    }
}

impl Mul<Ray3> for Transform {
    type Output = Ray3;

    fn mul(self, rhs: Ray3) -> Ray3 {
        self.transform_ray(&rhs)
    }
}

impl From<Transform> for glam::Mat4 {
    fn from(t: Transform) -> Self {
        t.matrix.into()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform:\n{}\n\nInverse:\n{}", self.matrix, self.inverse)
    }
}
