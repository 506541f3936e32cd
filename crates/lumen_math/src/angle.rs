//! Strongly typed angles.
//!
//! `Degrees` and `Radians` are distinct types so an unconverted angle can't
//! be passed where the other unit is expected.

use std::fmt;
use std::ops::Neg;

/// Pi, in single precision.
pub const PI: f32 = std::f32::consts::PI;

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f32);

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

impl Radians {
    /// Raw angle value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
}

impl Degrees {
    /// Raw angle value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Convert degrees to radians.
#[inline]
pub const fn to_radians(theta: Degrees) -> Radians {
    Radians(theta.0 * (PI / 180.0))
}

/// Convert radians to degrees.
#[inline]
pub const fn to_degrees(theta: Radians) -> Degrees {
    Degrees(theta.0 * (180.0 / PI))
}

impl From<Degrees> for Radians {
    fn from(theta: Degrees) -> Self {
        to_radians(theta)
    }
}

impl From<Radians> for Degrees {
    fn from(theta: Radians) -> Self {
        to_degrees(theta)
    }
}

impl Neg for Radians {
    type Output = Radians;

    fn neg(self) -> Radians {
        Radians(-self.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;

    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
