use std::fmt;

use crate::{Point3, Vector3};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized once, in [`Ray3::new`], and never again.
/// Rays are rebuilt through `new` when transformed, which renormalizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3 {
    origin: Point3,
    direction: Vector3,
}

impl Ray3 {
    /// Create a new ray. `direction` must not be zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.norm(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the (unit) direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

impl fmt::Display for Ray3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.direction)
    }
}
