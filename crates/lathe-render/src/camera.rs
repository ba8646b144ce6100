use lathe_math::{DMat4, Point3, Vector3};

/// A 3D perspective camera producing the fixed projection and the base
/// model-view matrix that the orbit controller composes drag rotations onto.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    pub fov_y: f64,  // vertical FOV in radians
    pub aspect: f64, // width/height
    pub near: f64,
    pub far: f64,
}

impl Camera {
    pub fn new(
        eye: Point3,
        target: Point3,
        up: Vector3,
        fov_y: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// The viewer defaults: eye at (0, 0, 5) looking at the origin, 45 degree
    /// FOV over a square viewport.
    pub fn default_view() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 5.0),
            target: Point3::ZERO,
            up: Vector3::Y,
            fov_y: 45f64.to_radians(),
            aspect: 1.0,
            near: 0.01,
            far: 100.0,
        }
    }

    /// Look-at view matrix (world to camera space, looking down -Z).
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with OpenGL-style NDC depth.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}
