use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use bytemuck::NoUninit;

use crate::components::Components;
use crate::Vector3;

/// An affine position (`w = 1`).
///
/// Points can be offset by vectors and subtracted from each other, but not
/// scaled.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, NoUninit)]
pub struct Point3 {
    c: Components,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            c: Components::new(x, y, z, 1.0),
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

    /// Underlying storage (`w` is always 1).
    #[inline]
    pub const fn components(&self) -> Components {
        self.c
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.c.xyz()
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Point3::ORIGIN
    }
}

impl AddAssign<Vector3> for Point3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.c.x += rhs.x();
        self.c.y += rhs.y();
        self.c.z += rhs.z();
    }
}

impl SubAssign<Vector3> for Point3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.c.x -= rhs.x();
        self.c.y -= rhs.y();
        self.c.z -= rhs.z();
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(mut self, rhs: Vector3) -> Point3 {
        self += rhs;
        self
    }
}

impl Add<Point3> for Vector3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        rhs + self
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(mut self, rhs: Vector3) -> Point3 {
        self -= rhs;
        self
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::from(self) - Vector3::from(rhs)
    }
}

impl From<Point3> for Vector3 {
    fn from(p: Point3) -> Self {
        Vector3::new(p.x(), p.y(), p.z())
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

impl From<glam::Vec3> for Point3 {
    fn from(v: glam::Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for glam::Vec3 {
    fn from(p: Point3) -> Self {
        glam::Vec3::new(p.x(), p.y(), p.z())
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point3_creation() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
        assert_eq!(p.components().w(), 1.0);
        assert_eq!(Point3::default(), Point3::ORIGIN);
    }

    #[test]
    fn test_point_plus_vector() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(1.0, -1.0, 0.5);

        assert_eq!(p + v, Point3::new(2.0, 1.0, 3.5));
        assert_eq!(v + p, Point3::new(2.0, 1.0, 3.5));
        assert_eq!(p - v, Point3::new(0.0, 3.0, 2.5));

        let mut q = p;
        q += v;
        assert_eq!(q, p + v);
        // w stays fixed through arithmetic
        assert_eq!(q.components().w(), 1.0);
    }

    #[test]
    fn test_point_difference_is_vector() {
        let a = Point3::new(5.0, 5.0, 5.0);
        let b = Point3::new(1.0, 2.0, 3.0);
        let d: Vector3 = a - b;

        assert_eq!(d, Vector3::new(4.0, 3.0, 2.0));
        assert_eq!(b + d, a);
    }

    #[test]
    fn test_equality_is_tolerant() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Point3::new(1.00001, 2.0, 3.0));
        assert_ne!(a, Point3::new(1.01, 2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3::new(0.0, -1.0, 2.0).to_string(), "(0, -1, 2)");
    }

    #[test]
    fn test_bytes_keep_w_fixed() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&p));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(p.components().w(), 1.0);

        let points = [p, Point3::ORIGIN];
        let floats: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(floats[7], 1.0);
    }
}
