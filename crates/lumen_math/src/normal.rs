use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::NoUninit;

use crate::components::{self, Components, Direction3};
use crate::Vector3;

/// A surface normal.
///
/// Normals share the arithmetic of [`Vector3`] but transform by the
/// inverse transpose of a matrix (see
/// [`Transform::transform_normal`](crate::Transform::transform_normal)).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, NoUninit)]
pub struct Normal3 {
    c: Components,
}

impl Normal3 {
    pub const X: Normal3 = Normal3::new(1.0, 0.0, 0.0);
    pub const Y: Normal3 = Normal3::new(0.0, 1.0, 0.0);
    pub const Z: Normal3 = Normal3::new(0.0, 0.0, 1.0);

    /// Create a new normal. The coordinates are stored as given.
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
    pub fn dot(self, other: Normal3) -> f32 {
        components::dot(self, other)
    }

    #[inline]
    pub fn length(self) -> f32 {
        components::length(self)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        components::length_squared(self)
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.norm();
    }

    #[inline]
    pub fn norm(self) -> Normal3 {
        components::norm(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.c.xyz()
    }
}

impl Direction3 for Normal3 {
    #[inline]
    fn components(&self) -> Components {
        self.c
    }

    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Normal3::new(x, y, z)
    }
}

/// Builds a unit normal pointing along `v`.
impl From<Vector3> for Normal3 {
    fn from(v: Vector3) -> Self {
        let n = v.norm();
        Normal3::new(n.x(), n.y(), n.z())
    }
}

impl From<Normal3> for Vector3 {
    fn from(n: Normal3) -> Self {
        Vector3::new(n.x(), n.y(), n.z())
    }
}

impl AddAssign for Normal3 {
    fn add_assign(&mut self, rhs: Normal3) {
        self.c.x += rhs.c.x;
        self.c.y += rhs.c.y;
        self.c.z += rhs.c.z;
    }
}

impl SubAssign for Normal3 {
    fn sub_assign(&mut self, rhs: Normal3) {
        self.c.x -= rhs.c.x;
        self.c.y -= rhs.c.y;
        self.c.z -= rhs.c.z;
    }
}

impl MulAssign<f32> for Normal3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.c.x *= rhs;
        self.c.y *= rhs;
        self.c.z *= rhs;
    }
}

impl DivAssign<f32> for Normal3 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Normal3 {
    type Output = Normal3;

    fn add(mut self, rhs: Normal3) -> Normal3 {
        self += rhs;
        self
    }
}

impl Sub for Normal3 {
    type Output = Normal3;

    fn sub(mut self, rhs: Normal3) -> Normal3 {
        self -= rhs;
        self
    }
}

impl Mul<f32> for Normal3 {
    type Output = Normal3;

    fn mul(mut self, rhs: f32) -> Normal3 {
        self *= rhs;
        self
    }
}

impl Mul<Normal3> for f32 {
    type Output = Normal3;

    fn mul(self, rhs: Normal3) -> Normal3 {
        rhs * self
    }
}

impl Div<f32> for Normal3 {
    type Output = Normal3;

    fn div(mut self, rhs: f32) -> Normal3 {
        self /= rhs;
        self
    }
}

impl Neg for Normal3 {
    type Output = Normal3;

    fn neg(self) -> Normal3 {
        Normal3::new(-self.c.x, -self.c.y, -self.c.z)
    }
}

impl From<[f32; 3]> for Normal3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Normal3::new(x, y, z)
    }
}

impl From<Normal3> for glam::Vec3 {
    fn from(n: Normal3) -> Self {
        glam::Vec3::new(n.x(), n.y(), n.z())
    }
}

impl fmt::Display for Normal3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
