//! Real roots of `a·t² + b·t + c = 0`, the core of ray/quadric
//! intersection.

use crate::{approx_eq, MathError, MathResult};

/// The two real roots of a quadratic, ordered so `t0 <= t1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticRoots {
    pub t0: f32,
    pub t1: f32,
}

impl QuadraticRoots {
    /// The first root in front of the ray origin: `t0` if positive,
    /// otherwise `t1` (which may itself be behind the origin).
    #[inline]
    pub fn earliest_viable(&self) -> f32 {
        if self.t0 > 0.0 {
            self.t0
        } else {
            self.t1
        }
    }
}

/// Solve `a·t² + b·t + c = 0` for real `t`.
///
/// Returns `Ok(None)` when the discriminant is negative and
/// [`MathError::QuadraticDegenerate`] when `a ≈ 0`.
///
/// Intermediates are computed in `f64` and narrowed back to `f32`. The
/// larger-magnitude root comes from `q = -½(b + sign(b)·√disc)` and the
/// smaller from `c / q`, which avoids subtracting nearly equal values when
/// `b² ≫ 4ac`.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> MathResult<Option<QuadraticRoots>> {
    if approx_eq(a, 0.0) {
        return Err(MathError::QuadraticDegenerate);
    }

    let a = f64::from(a);
    let b = f64::from(b);
    let c = f64::from(c);

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Ok(None);
    }

    let root_discriminant = discriminant.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - root_discriminant)
    } else {
        -0.5 * (b + root_discriminant)
    };

    let t0 = (q / a) as f32;
    // q vanishes only when b and the discriminant both do: a double root
    let t1 = if q.abs() < f64::EPSILON {
        t0
    } else {
        (c / q) as f32
    };

    Ok(Some(if t0 <= t1 {
        QuadraticRoots { t0, t1 }
    } else {
        QuadraticRoots { t0: t1, t1: t0 }
    }))
}
