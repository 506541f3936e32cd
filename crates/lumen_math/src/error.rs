//! Errors raised by the math kernel.
//!
//! All of these mean the caller handed in bad input; none of them are
//! transient, so callers are expected to abandon whatever operation
//! triggered them.

use thiserror::Error;

/// Errors that can occur in kernel operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("negative value passed to sqrt(): {0}")]
    SqrtDomain(f32),

    #[error("matrix has no inverse")]
    MatrixSingular,

    #[error("quadratic coefficient is zero, equation is not quadratic")]
    QuadraticDegenerate,

    #[error("up vector is parallel to the viewing direction")]
    DegenerateBasis,
}

/// Result type for kernel operations.
pub type MathResult<T> = Result<T, MathError>;
