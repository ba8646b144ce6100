pub mod rotation;
pub mod screen;

pub use glam::{DMat3, DMat4, DVec2, DVec3, DVec4};
pub use rotation::{rotation_about_axis, rotation_y, rotate_in_plane};
pub use screen::{ndc_x, ndc_y, screen_to_ndc};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Homogeneous point (x, y, z, w) as used by control points and mesh positions.
pub type Point4 = DVec4;
