//! Random sampling of kernel types for tests and benchmarks.
//!
//! Every helper takes the generator explicitly; seed a
//! `rand::rngs::StdRng` for reproducible runs.

use rand::Rng;

use crate::{Normal3, Point3, Ray3, Vector3};

/// Range of each sampled coordinate.
const COORDINATE_RANGE: std::ops::Range<f32> = -10.0..10.0;

pub fn random_float<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(COORDINATE_RANGE)
}

/// A float in `[0.1, 10)`, safe to use as a scale factor or divisor.
pub fn random_positive_float<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.1..10.0)
}

pub fn random_vector3<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    Vector3::new(random_float(rng), random_float(rng), random_float(rng))
}

pub fn random_point3<R: Rng + ?Sized>(rng: &mut R) -> Point3 {
    Point3::new(random_float(rng), random_float(rng), random_float(rng))
}

/// A unit normal. Near-zero samples are redrawn so normalization is safe.
pub fn random_normal3<R: Rng + ?Sized>(rng: &mut R) -> Normal3 {
    Normal3::from(random_nonzero_vector3(rng))
}

pub fn random_ray3<R: Rng + ?Sized>(rng: &mut R) -> Ray3 {
    Ray3::new(random_point3(rng), random_nonzero_vector3(rng))
}

fn random_nonzero_vector3<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let v = random_vector3(rng);
        if v.length_squared() > 1.0e-4 {
            return v;
        }
    }
}
