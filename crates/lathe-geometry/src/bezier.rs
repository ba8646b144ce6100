//! Cubic Bezier segment and the two-segment spline built from 7 control points.

use lathe_math::{DMat4, DVec4, Point4};
use serde::{Deserialize, Serialize};

use crate::sequence::TimeSequence;

/// Number of control points the editor exposes. The spline is two cubic
/// segments overlapping at the middle point, so the count is fixed.
pub const CONTROL_POINT_COUNT: usize = 7;

/// Cubic Bezier blending matrix: maps the monomial vector `[t^3, t^2, t, 1]`
/// onto the four Bernstein basis weights.
const BLEND: DMat4 = DMat4::from_cols(
    DVec4::new(-1.0, 3.0, -3.0, 1.0),
    DVec4::new(3.0, -6.0, 3.0, 0.0),
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(1.0, 0.0, 0.0, 0.0),
);

/// A single cubic Bezier segment over four homogeneous control points,
/// parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BezierSegment {
    pub points: [Point4; 4],
}

impl BezierSegment {
    pub fn new(points: [Point4; 4]) -> Self {
        Self { points }
    }

    /// Evaluate the segment at parameter `t`.
    ///
    /// Computes `P * G * T(t)` where `P` packs the control points as matrix
    /// columns, `G` is the blending matrix, and `T(t) = [t^3, t^2, t, 1]`.
    /// Interpolates the endpoints: `point_at(0) == points[0]` and
    /// `point_at(1) == points[3]`.
    pub fn point_at(&self, t: f64) -> Point4 {
        let [p0, p1, p2, p3] = self.points;
        let monomials = DVec4::new(t * t * t, t * t, t, 1.0);
        DMat4::from_cols(p0, p1, p2, p3) * (BLEND * monomials)
    }
}

/// The full editable curve: 7 control points forming two overlapping cubic
/// segments (indices `0..=3` and `3..=6`). Sharing the middle point makes the
/// join C0-continuous by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierSpline {
    pub points: [Point4; CONTROL_POINT_COUNT],
}

impl BezierSpline {
    pub fn new(points: [Point4; CONTROL_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// The two overlapping cubic segments.
    pub fn segments(&self) -> [BezierSegment; 2] {
        let p = &self.points;
        [
            BezierSegment::new([p[0], p[1], p[2], p[3]]),
            BezierSegment::new([p[3], p[4], p[5], p[6]]),
        ]
    }

    /// Sample both segments across `times` and concatenate the results into
    /// one ring template for the revolution sweep. The output length is
    /// `2 * times.len()`.
    pub fn sample_ring(&self, times: &TimeSequence) -> Vec<Point4> {
        let mut ring = Vec::with_capacity(2 * times.values.len());
        for segment in self.segments() {
            for &t in &times.values {
                ring.push(segment.point_at(t));
            }
        }
        ring
    }
}
