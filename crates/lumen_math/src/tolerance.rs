//! Floating point tolerance helpers.
//!
//! Everything here is `const fn` so tolerances can be baked into constants
//! at compile time.

use crate::{MathError, MathResult};

/// Upper bound on Newton iterations in [`sqrt`]. Enough to walk down from
/// `f32::MAX` and still converge.
const MAX_SQRT_ITERATIONS: u32 = 128;

/// Relative/absolute tolerance used by [`approx_eq`]: `sqrt(f32::EPSILON)`.
pub const TOLERANCE: f32 = match sqrt(f32::EPSILON) {
    Ok(value) => value,
    Err(_) => panic!("f32::EPSILON is positive"),
};

/// Absolute value.
#[inline]
pub const fn abs(x: f32) -> f32 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

#[inline]
const fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Square root by Newton's method, usable in const contexts.
///
/// Returns [`MathError::SqrtDomain`] for negative input. NaN is passed
/// through unchanged.
pub const fn sqrt(x: f32) -> MathResult<f32> {
    if x < 0.0 {
        return Err(MathError::SqrtDomain(x));
    }

    if x == 0.0 || x == f32::INFINITY {
        return Ok(x);
    }

    let mut guess = x;
    let mut next = 0.5 * (guess + x / guess);
    let mut iterations = 0;

    // Stop once successive guesses agree to within one ulp of the estimate.
    while abs(guess - next) > f32::EPSILON * next && iterations < MAX_SQRT_ITERATIONS {
        guess = next;
        next = 0.5 * (guess + x / guess);
        iterations += 1;
    }

    Ok(next)
}

/// Tolerance-based float equality.
///
/// `|a - b| <= TOLERANCE * max(1, |a|, |b|)`: absolute near zero, relative
/// for large magnitudes.
#[inline]
pub const fn approx_eq(left: f32, right: f32) -> bool {
    let scale = max(1.0, max(abs(left), abs(right)));
    abs(left - right) <= TOLERANCE * scale
}

/// Element-wise [`approx_eq`] over two slices of the same length.
pub fn approx_eq_slice(left: &[f32], right: &[f32]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(&l, &r)| approx_eq(l, r))
}
