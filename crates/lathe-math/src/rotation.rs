//! Rotation helpers shared by the sweep and the orbit controller.

use glam::{DMat4, DVec3, DVec4};

/// Rotation about the Y axis by `theta` radians, as a homogeneous matrix.
///
/// This is the revolution axis for the surface sweep: a ring template in the
/// XY plane rotated by a sequence of these matrices traces the surface.
pub fn rotation_y(theta: f64) -> DMat4 {
    DMat4::from_rotation_y(theta)
}

/// Rotation by `angle` radians about an arbitrary `axis`.
///
/// Returns `None` when the axis is too short to normalize, which happens for
/// a drag gesture with zero screen delta; callers skip the update in that
/// case rather than rotating about a garbage direction.
pub fn rotation_about_axis(angle: f64, axis: DVec3) -> Option<DMat4> {
    let len = axis.length();
    if len < 1e-12 {
        return None;
    }
    Some(DMat4::from_axis_angle(axis / len, angle))
}

/// Rotate the (x, y) components of `v` by `angle` radians, leaving z and w
/// untouched. Used to swing the light position around the view axis.
pub fn rotate_in_plane(v: DVec4, angle: f64) -> DVec4 {
    let (sin, cos) = angle.sin_cos();
    DVec4::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z, v.w)
}
