//! Control-point hit-testing and drag-session state.

use lathe_geometry::{BezierSpline, CONTROL_POINT_COUNT};
use lathe_math::{DVec2, Point4};

/// Maximum pick distance in NDC units.
pub const HIT_THRESHOLD: f64 = 0.065;

/// Owns the 7 control points and the pointer-drag session that mutates them.
///
/// Nothing else in the system writes control points. A drag only ever moves
/// the currently highlighted point, and the highlight is always either unset
/// or a valid index, so out-of-range mutation cannot happen.
#[derive(Debug, Clone)]
pub struct ControlPointEditor {
    points: [Point4; CONTROL_POINT_COUNT],
    highlight: Option<usize>,
    threshold: f64,
}

impl ControlPointEditor {
    /// Editor with the default vertical column of points: x = 0.5, y rising
    /// from -0.6 in steps of 0.2.
    pub fn new() -> Self {
        let mut points = [Point4::ZERO; CONTROL_POINT_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = Point4::new(0.5, -0.6 + 0.2 * i as f64, 0.0, 1.0);
        }
        Self {
            points,
            highlight: None,
            threshold: HIT_THRESHOLD,
        }
    }

    pub fn points(&self) -> &[Point4; CONTROL_POINT_COUNT] {
        &self.points
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// The current curve through the control points.
    pub fn spline(&self) -> BezierSpline {
        BezierSpline::new(self.points)
    }

    /// Index of the closest control point within the pick threshold.
    ///
    /// Distances are Euclidean in the XY plane. Ties resolve to the smallest
    /// index; a minimum beyond the threshold yields `None`.
    pub fn hit_test(&self, pos: DVec2) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let dist = DVec2::new(p.x, p.y).distance(pos);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.filter(|&(_, d)| d <= self.threshold).map(|(i, _)| i)
    }

    /// Start a drag session: highlight whichever point is under the pointer.
    pub fn pointer_down(&mut self, pos: DVec2) {
        self.highlight = self.hit_test(pos);
    }

    /// Move the highlighted point to the pointer position, preserving its
    /// z and w components. A no-op when nothing is highlighted.
    pub fn drag_to(&mut self, pos: DVec2) {
        if let Some(i) = self.highlight {
            self.points[i].x = pos.x;
            self.points[i].y = pos.y;
        }
    }

    /// End the drag session and clear the highlight.
    pub fn release(&mut self) {
        self.highlight = None;
    }
}

impl Default for ControlPointEditor {
    fn default() -> Self {
        Self::new()
    }
}
