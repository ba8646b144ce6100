//! Dashed control-polygon marker generation.
//!
//! The segment between two consecutive control points is drawn as discrete
//! markers rather than a solid line. Markers are laid out at a fixed spacing
//! along the segment direction and generation stops before overshooting the
//! far endpoint.

use lathe_math::{DVec2, Point4};

/// Segments shorter than this produce no markers; the caller skips the draw
/// for that segment rather than treating it as an error.
pub const MIN_SEGMENT_LENGTH: f64 = 0.005;

/// Distance between consecutive markers, in NDC units.
pub const MARKER_SPACING: f64 = 0.05 / 1.15;

/// Three-valued sign shared with the overshoot test: a flat axis keeps sign 0
/// for the whole walk, and a step landing exactly on `b` zeroes the stop test
/// before that marker is emitted.
fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else if v > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Generate marker points from `a` toward `b`.
///
/// Returns an empty list when `|b - a| < MIN_SEGMENT_LENGTH`. Otherwise steps
/// by `MARKER_SPACING` along the normalized direction, starting one step past
/// `a`, and stops the instant the sign of `(b - current)` along either axis
/// differs from its sign at the start. The sign test guards against
/// overshooting `b`, and because a point coinciding with `b` has sign 0 on
/// the stop axis, every returned marker lies strictly between `a` and `b`.
pub fn trace_markers(a: Point4, b: Point4) -> Vec<Point4> {
    let delta = DVec2::new(b.x - a.x, b.y - a.y);
    let length = delta.length();
    if length < MIN_SEGMENT_LENGTH {
        return Vec::new();
    }

    let step = delta / length * MARKER_SPACING;
    let (sx, sy) = (sign(delta.x), sign(delta.y));

    let mut markers = Vec::with_capacity((length / MARKER_SPACING) as usize + 1);
    let mut p = DVec2::new(a.x + step.x, a.y + step.y);
    while sign(b.x - p.x) == sx && sign(b.y - p.y) == sy {
        markers.push(Point4::new(p.x, p.y, a.z, a.w));
        p += step;
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_math::DVec4;

    fn pt(x: f64, y: f64) -> Point4 {
        DVec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_degenerate_segment_is_empty() {
        let a = pt(0.1, 0.1);
        let b = pt(0.1 + 0.004, 0.1);
        assert!(trace_markers(a, b).is_empty());
        assert!(trace_markers(a, a).is_empty());
    }

    #[test]
    fn test_just_above_epsilon_is_not_degenerate() {
        // Longer than eps but shorter than one marker step: not degenerate,
        // but the first step already overshoots, so still no markers.
        let a = pt(0.0, 0.0);
        let b = pt(0.006, 0.0);
        assert!(trace_markers(a, b).is_empty());
    }

    #[test]
    fn test_marker_count_approximates_length_over_spacing() {
        let a = pt(-0.5, 0.0);
        let b = pt(0.5, 0.0);
        let markers = trace_markers(a, b);
        let expected = (1.0 / MARKER_SPACING) as usize;
        assert!(
            markers.len() >= expected - 1 && markers.len() <= expected + 1,
            "expected about {} markers, got {}",
            expected,
            markers.len()
        );
    }

    #[test]
    fn test_markers_strictly_between_endpoints() {
        let a = pt(-0.31, -0.4);
        let b = pt(0.5, 0.2);
        let dir = DVec2::new(b.x - a.x, b.y - a.y).normalize();
        let span = DVec2::new(b.x - a.x, b.y - a.y).length();
        for m in trace_markers(a, b) {
            let along = DVec2::new(m.x - a.x, m.y - a.y).dot(dir);
            assert!(along > 0.0, "marker at or before start");
            assert!(along < span, "marker overshoots end: {} >= {}", along, span);
        }
    }

    #[test]
    fn test_exact_multiple_span_excludes_endpoint() {
        // Span of exactly two marker steps: the second step lands on `b`
        // itself and must not be emitted.
        let a = pt(0.0, 0.0);
        let b = pt(2.0 * MARKER_SPACING, 0.0);
        let markers = trace_markers(a, b);
        assert_eq!(markers.len(), 1);
        assert!((markers[0].x - MARKER_SPACING).abs() < 1e-12);
        assert!(markers.iter().all(|m| m.x < b.x));
    }

    #[test]
    fn test_markers_lie_on_segment() {
        let a = pt(0.0, 0.0);
        let b = pt(0.6, 0.8);
        for m in trace_markers(a, b) {
            // On the line y = (4/3) x
            assert!((m.y - 4.0 / 3.0 * m.x).abs() < 1e-12);
            assert_eq!(m.z, 0.0);
            assert_eq!(m.w, 1.0);
        }
    }

    #[test]
    fn test_vertical_segment() {
        // Flat x axis must not trigger the sign-flip stop early.
        let a = pt(0.25, -0.5);
        let b = pt(0.25, 0.41);
        let markers = trace_markers(a, b);
        assert!(markers.len() > 10);
        assert!(markers.iter().all(|m| m.x == 0.25));
        assert!(markers.iter().all(|m| m.y > -0.5 && m.y < 0.41));
    }
}
