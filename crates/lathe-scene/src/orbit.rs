//! Arcball-style orbit control for the 3-D viewer.
//!
//! A drag gesture maps its screen delta to a rotation axis and angle. The
//! rotation is composed live against the last committed rotation and only
//! promoted to committed state on release, so successive gestures accumulate
//! instead of resetting. With the modifier held at gesture start, the same
//! delta rotates the light position in the view plane instead; exactly one of
//! the two targets updates per gesture.

use lathe_math::{rotate_in_plane, rotation_about_axis, DMat4, DVec2, DVec3, DVec4};

/// Radians of object rotation per pixel of drag distance.
pub const ORBIT_SENSITIVITY: f64 = std::f64::consts::PI / 180.0;

/// Radians of light rotation per pixel of drag distance.
pub const LIGHT_SENSITIVITY: f64 = 0.05;

/// Base model-view translation per dolly key press.
pub const DOLLY_STEP: f64 = 0.1;

/// Default light position in view space.
pub const DEFAULT_LIGHT: DVec4 = DVec4::new(0.1, 0.1, 0.1, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    Object,
    Light,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start: DVec2,
    target: DragTarget,
}

#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Base model-view (look-at, plus any dolly translation).
    base: DMat4,
    /// Rotation accumulated from completed gestures.
    committed: DMat4,
    /// Live rotation of the in-flight gesture.
    pending: Option<DMat4>,
    light: DVec4,
    pending_light: Option<DVec4>,
    drag: Option<Drag>,
}

impl OrbitController {
    pub fn new(base: DMat4) -> Self {
        Self {
            base,
            committed: DMat4::IDENTITY,
            pending: None,
            light: DEFAULT_LIGHT,
            pending_light: None,
            drag: None,
        }
    }

    /// Begin a gesture at screen position `(x, y)`. The modifier decides the
    /// drag target once, here; it cannot change mid-gesture.
    pub fn begin_drag(&mut self, x: f64, y: f64, rotate_light: bool) {
        self.drag = Some(Drag {
            start: DVec2::new(x, y),
            target: if rotate_light {
                DragTarget::Light
            } else {
                DragTarget::Object
            },
        });
    }

    /// Update the in-flight gesture with the current pointer position.
    ///
    /// The screen delta `(dx, dy)` becomes the rotation axis `(dy, dx, 0)`
    /// and the rotation angle is the delta's length times the sensitivity.
    /// A zero delta leaves the pending state untouched.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let axis = DVec3::new(y - drag.start.y, x - drag.start.x, 0.0);

        match drag.target {
            DragTarget::Object => {
                let angle = axis.length() * ORBIT_SENSITIVITY;
                if angle > 0.0 {
                    if let Some(rotation) = rotation_about_axis(angle, axis) {
                        self.pending = Some(rotation * self.committed);
                    }
                }
            }
            DragTarget::Light => {
                let angle = axis.length() * LIGHT_SENSITIVITY;
                if angle > 0.0 {
                    self.pending_light = Some(rotate_in_plane(self.light, angle));
                }
            }
        }
    }

    /// End the gesture, promoting whatever pending state it produced.
    pub fn release(&mut self) {
        if let Some(rotation) = self.pending.take() {
            self.committed = rotation;
        }
        if let Some(light) = self.pending_light.take() {
            self.light = light;
        }
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Live model-view matrix: the base composed with the pending rotation if
    /// a gesture is in flight, otherwise with the committed one.
    pub fn model_view(&self) -> DMat4 {
        self.base * self.pending.unwrap_or(self.committed)
    }

    /// Live light position.
    pub fn light(&self) -> DVec4 {
        self.pending_light.unwrap_or(self.light)
    }

    /// Translate the base model-view along the view z axis.
    pub fn dolly(&mut self, delta: f64) {
        self.base = DMat4::from_translation(DVec3::new(0.0, 0.0, delta)) * self.base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> OrbitController {
        OrbitController::new(DMat4::IDENTITY)
    }

    fn transform(m: DMat4, p: DVec4) -> DVec4 {
        m * p
    }

    #[test]
    fn test_no_gesture_is_identity() {
        let orbit = controller();
        let p = DVec4::new(0.2, -0.4, 0.6, 1.0);
        assert!((transform(orbit.model_view(), p) - p).length() < 1e-12);
        assert_eq!(orbit.light(), DEFAULT_LIGHT);
    }

    #[test]
    fn test_gestures_accumulate() {
        // Two horizontal drags about the same screen axis must compose into
        // one rotation by the summed angle, checked on transformed points.
        let mut orbit = controller();
        orbit.begin_drag(0.0, 0.0, false);
        orbit.drag_to(30.0, 0.0);
        orbit.release();
        orbit.begin_drag(0.0, 0.0, false);
        orbit.drag_to(50.0, 0.0);
        orbit.release();

        let total = rotation_about_axis(80.0 * ORBIT_SENSITIVITY, DVec3::Y).unwrap();
        let p = DVec4::new(0.3, 0.7, -0.2, 1.0);
        let got = transform(orbit.model_view(), p);
        let expected = transform(total, p);
        assert!(
            (got - expected).length() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            got
        );
    }

    #[test]
    fn test_pending_not_committed_until_release() {
        let mut orbit = controller();
        orbit.begin_drag(0.0, 0.0, false);
        orbit.drag_to(40.0, 0.0);
        let live = orbit.model_view();
        let p = DVec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((transform(live, p) - p).length() > 1e-3);

        // A fresh gesture recomputes from the still-unchanged committed state
        assert!(orbit.is_dragging());
        orbit.release();
        assert!(!orbit.is_dragging());
        assert!((orbit.model_view() * p - live * p).length() < 1e-12);
    }

    #[test]
    fn test_zero_delta_leaves_state_alone() {
        let mut orbit = controller();
        orbit.begin_drag(10.0, 10.0, false);
        orbit.drag_to(10.0, 10.0);
        orbit.release();
        let p = DVec4::new(0.5, 0.5, 0.5, 1.0);
        assert!((orbit.model_view() * p - p).length() < 1e-12);
    }

    #[test]
    fn test_light_gesture_spares_object_rotation() {
        let mut orbit = controller();
        orbit.begin_drag(0.0, 0.0, true);
        orbit.drag_to(20.0, 0.0);
        orbit.release();

        // Object rotation untouched
        let p = DVec4::new(0.1, 0.2, 0.3, 1.0);
        assert!((orbit.model_view() * p - p).length() < 1e-12);

        // Light rotated in the xy plane by |delta| * sensitivity
        let expected = rotate_in_plane(DEFAULT_LIGHT, 20.0 * LIGHT_SENSITIVITY);
        assert!((orbit.light() - expected).length() < 1e-12);
        assert_eq!(orbit.light().z, DEFAULT_LIGHT.z);
    }

    #[test]
    fn test_light_recomputes_from_gesture_start() {
        // Within one gesture the rotation derives from the total delta, not
        // from compounding per-move increments.
        let mut orbit = controller();
        orbit.begin_drag(0.0, 0.0, true);
        orbit.drag_to(5.0, 0.0);
        orbit.drag_to(10.0, 0.0);
        let expected = rotate_in_plane(DEFAULT_LIGHT, 10.0 * LIGHT_SENSITIVITY);
        assert!((orbit.light() - expected).length() < 1e-12);
    }

    #[test]
    fn test_modifier_sampled_at_gesture_start() {
        let mut orbit = controller();
        orbit.begin_drag(0.0, 0.0, true);
        orbit.drag_to(15.0, 0.0);
        orbit.release();
        // The light moved, the object did not; a later object gesture does
        // not disturb the light.
        let light_after = orbit.light();
        orbit.begin_drag(0.0, 0.0, false);
        orbit.drag_to(25.0, 0.0);
        orbit.release();
        assert_eq!(orbit.light(), light_after);
    }

    #[test]
    fn test_dolly_translates_base() {
        let mut orbit = controller();
        orbit.dolly(DOLLY_STEP);
        orbit.dolly(DOLLY_STEP);
        let p = DVec4::new(0.0, 0.0, 0.0, 1.0);
        let moved = orbit.model_view() * p;
        assert!((moved.z - 0.2).abs() < 1e-12);
        orbit.dolly(-DOLLY_STEP);
        let back = orbit.model_view() * p;
        assert!((back.z - 0.1).abs() < 1e-12);
    }
}
