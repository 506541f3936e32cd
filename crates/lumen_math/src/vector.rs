use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::NoUninit;

use crate::components::{self, Components, Direction3};

/// A free displacement in 3D space.
///
/// Translation has no effect on a `Vector3`; see [`Point3`](crate::Point3)
/// for positions.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, NoUninit)]
pub struct Vector3 {
    c: Components,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            c: Components::new(x, y, z, 0.0),
        }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.c.x
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.c.y
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.c.z
    }

    #[inline]
    pub fn dot(self, other: Vector3) -> f32 {
        components::dot(self, other)
    }

    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        components::cross(self, other)
    }

    #[inline]
    pub fn length(self) -> f32 {
        components::length(self)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        components::length_squared(self)
    }

    /// Scale to unit length in place. The caller must guard against a
    /// zero-length vector.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.norm();
    }

    /// Unit-length copy of this vector.
    #[inline]
    pub fn norm(self) -> Vector3 {
        components::norm(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.c.xyz()
    }
}

impl Direction3 for Vector3 {
    #[inline]
    fn components(&self) -> Components {
        self.c
    }

    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Vector3::new(x, y, z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.c.x += rhs.c.x;
        self.c.y += rhs.c.y;
        self.c.z += rhs.c.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.c.x -= rhs.c.x;
        self.c.y -= rhs.c.y;
        self.c.z -= rhs.c.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.c.x *= rhs;
        self.c.y *= rhs;
        self.c.z *= rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(mut self, rhs: Vector3) -> Vector3 {
        self += rhs;
        self
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(mut self, rhs: Vector3) -> Vector3 {
        self -= rhs;
        self
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(mut self, rhs: f32) -> Vector3 {
        self *= rhs;
        self
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f32) -> Vector3 {
        self * (1.0 / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.c.x, -self.c.y, -self.c.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x(), v.y(), v.z())
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq, random_vector3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vector3_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.components().w(), 0.0);
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_vector3_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vector3_assign_operators() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v += Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        v *= 3.0;
        assert_eq!(v, Vector3::new(3.0, 6.0, 9.0));
        v /= 3.0;
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    }

    #[test]
    fn test_length() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_normalize_in_place_and_copy() {
        let mut v = Vector3::new(0.0, 10.0, 0.0);
        let copy = v.norm();
        assert_eq!(v, Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(copy, Vector3::Y);

        v.normalize();
        assert_eq!(v, Vector3::Y);
    }

    #[test]
    fn test_normalized_length_is_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_vector3(&mut rng);
            if v.length_squared() < 1.0e-3 {
                continue;
            }
            assert!(approx_eq(v.norm().length(), 1.0));
        }
    }

    #[test]
    fn test_cross_is_perpendicular() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let v = random_vector3(&mut rng);
            let w = random_vector3(&mut rng);
            let c = v.cross(w);
            // Scale the tolerance with the magnitudes involved
            let scale = v.length() * w.length() * v.length().max(w.length());
            assert!(approx_eq(v.dot(c) / scale.max(1.0), 0.0));
            assert!(approx_eq(w.dot(c) / scale.max(1.0), 0.0));
        }
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector3::from(g), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }

    #[test]
    fn test_bytes_keep_w_zero() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0]);
    }
}
