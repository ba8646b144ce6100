//! LatheKit geometry: cubic Bezier evaluation, sample sequences, and the
//! dashed control-polygon marker generator.

pub mod bezier;
pub mod polygon;
pub mod sequence;

pub use bezier::{BezierSegment, BezierSpline, CONTROL_POINT_COUNT};
pub use polygon::trace_markers;
pub use sequence::{AngleSequence, TimeSequence};
