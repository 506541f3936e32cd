//! Shared homogeneous storage for vectors, points and normals.
//!
//! `w` is fixed by the owning type (0 for directions, 1 for points) and never
//! changes after construction. Only `x`, `y`, `z` take part in equality.

use bytemuck::{Pod, Zeroable};

use crate::{approx_eq, Vector3};

/// Four floats `(x, y, z, w)` laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct Components {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) z: f32,
    pub(crate) w: f32,
}

impl Components {
    pub(crate) const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Homogeneous coordinate.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The spatial part as an array.
    #[inline]
    pub const fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// All four components, `w` included.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl PartialEq for Components {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

/// A free direction in space (`w = 0`): [`Vector3`] or [`Normal3`](crate::Normal3).
///
/// The generic functions below provide the arithmetic the two types share,
/// including mixed vector/normal products.
pub trait Direction3: Copy {
    /// Underlying storage.
    fn components(&self) -> Components;

    /// Build a value of this type from raw coordinates.
    fn from_xyz(x: f32, y: f32, z: f32) -> Self;
}

/// Dot product. Accepts any mix of vectors and normals.
#[inline]
pub fn dot<A: Direction3, B: Direction3>(left: A, right: B) -> f32 {
    let l = left.components();
    let r = right.components();
    l.x * r.x + l.y * r.y + l.z * r.z
}

/// Cross product. The result is always a free [`Vector3`].
#[inline]
pub fn cross<A: Direction3, B: Direction3>(left: A, right: B) -> Vector3 {
    let l = left.components();
    let r = right.components();
    Vector3::new(
        l.y * r.z - l.z * r.y,
        l.z * r.x - l.x * r.z,
        l.x * r.y - l.y * r.x,
    )
}

#[inline]
pub fn length_squared<T: Direction3>(v: T) -> f32 {
    dot(v, v)
}

#[inline]
pub fn length<T: Direction3>(v: T) -> f32 {
    length_squared(v).sqrt()
}

/// Unit-length copy of `v`.
///
/// Undefined for a (near) zero-length input: the caller must guard.
#[inline]
pub fn norm<T: Direction3>(v: T) -> T {
    let c = v.components();
    let inv = 1.0 / length(v);
    T::from_xyz(c.x * inv, c.y * inv, c.z * inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Normal3;

    #[test]
    fn test_equality_ignores_w() {
        let a = Components::new(1.0, 2.0, 3.0, 0.0);
        let b = Components::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, Components::new(1.0, 2.0, 3.5, 0.0));
    }

    #[test]
    fn test_pod_layout() {
        let c = Components::new(1.0, 2.0, 3.0, 1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&c);
        assert_eq!(bytes.len(), 16);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_mixed_dot_and_cross() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let n = Normal3::new(0.0, 1.0, 0.0);

        assert_eq!(dot(v, n), 0.0);
        assert_eq!(dot(n, n), 1.0);
        assert_eq!(cross(v, n), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(cross(n, v), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_generic_norm_keeps_type() {
        let n: Normal3 = norm(Normal3::new(0.0, 0.0, 5.0));
        assert_eq!(n, Normal3::new(0.0, 0.0, 1.0));
        assert_eq!(n.components().w(), 0.0);
    }
}
