//! Nearest-hit accumulator for ray/surface intersection tests.

use crate::{Normal3, Point3};

/// Time stored by an accumulator that has not recorded a hit yet.
pub const NO_INTERSECTION: f32 = f32::MAX;

/// Record of the earliest ray/surface hit seen so far.
///
/// Starts out at [`NO_INTERSECTION`] and only ever moves to smaller times
/// through [`IntersectionInfo::update_with_new_intersection`]. One
/// accumulator per ray; concurrent writers need their own accumulators
/// merged afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionInfo {
    point: Point3,
    normal: Normal3,
    time: f32,
}

impl IntersectionInfo {
    /// Record a hit. `normal` is normalized, it need not be unit length.
    pub fn new(point: Point3, normal: Normal3, time: f32) -> Self {
        Self {
            point,
            normal: normal.norm(),
            time,
        }
    }

    #[inline]
    pub fn point(&self) -> Point3 {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Normal3 {
        self.normal
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Replace the stored hit with `candidate` iff it happened strictly
    /// earlier. Returns whether the record changed.
    pub fn update_with_new_intersection(&mut self, candidate: &IntersectionInfo) -> bool {
        if candidate.time < self.time {
            *self = *candidate;
            true
        } else {
            false
        }
    }

    /// True once a hit has been recorded.
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        is_intersecting(self)
    }
}

impl Default for IntersectionInfo {
    fn default() -> Self {
        Self {
            point: Point3::ORIGIN,
            normal: Normal3::default(),
            time: NO_INTERSECTION,
        }
    }
}

/// Exact comparison against the sentinel; any recorded time is below it.
#[inline]
pub fn is_intersecting(info: &IntersectionInfo) -> bool {
    info.time < NO_INTERSECTION
}
