//! Lumen math kernel.
//!
//! Strongly typed vectors, points and normals, row-major 4x4 matrices,
//! matrix/inverse transform pairs, a cancellation-safe quadratic solver and
//! a nearest-hit accumulator.
//!
//! # Example
//!
//! ```
//! use lumen_math::{solve_quadratic, Point3, Ray3, Transform, Vector3};
//!
//! let world_to_object = Transform::translate(Vector3::new(0.0, 0.0, 5.0)).inverse();
//! let ray = world_to_object * Ray3::new(Point3::ORIGIN, Vector3::Z);
//!
//! // Unit sphere at the object-space origin
//! let oc = Vector3::from(ray.origin());
//! let roots = solve_quadratic(1.0, 2.0 * oc.dot(ray.direction()), oc.dot(oc) - 1.0)?
//!     .expect("ray points at the sphere");
//! assert_eq!(roots.earliest_viable(), 4.0);
//! # Ok::<(), lumen_math::MathError>(())
//! ```

mod angle;
mod components;
mod error;
mod intersection;
mod matrix;
mod normal;
mod point;
mod quadratic;
mod random;
mod ray;
mod tolerance;
mod transform;
mod vector;

pub use angle::{to_degrees, to_radians, Degrees, Radians, PI};
pub use components::{cross, dot, length, length_squared, norm, Components, Direction3};
pub use error::{MathError, MathResult};
pub use intersection::{is_intersecting, IntersectionInfo, NO_INTERSECTION};
pub use matrix::Matrix4;
pub use normal::Normal3;
pub use point::Point3;
pub use quadratic::{solve_quadratic, QuadraticRoots};
pub use random::{
    random_float, random_normal3, random_point3, random_positive_float, random_ray3,
    random_vector3,
};
pub use ray::Ray3;
pub use tolerance::{abs, approx_eq, approx_eq_slice, sqrt, TOLERANCE};
pub use transform::Transform;
pub use vector::Vector3;

/// Re-export glam for interop with the renderer side.
pub use glam;
