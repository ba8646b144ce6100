//! The Edit/View mode state machine and scene-wide state.

use lathe_core::{LatheError, Result};
use lathe_geometry::{AngleSequence, TimeSequence};
use lathe_math::screen_to_ndc;
use lathe_mesh::{revolve, TriangleMesh};
use lathe_render::Camera;

use crate::editor::ControlPointEditor;
use crate::input::{InputEvent, Key, ParamField};
use crate::material::Material;
use crate::orbit::{OrbitController, DOLLY_STEP};

pub const DEFAULT_SAMPLE_COUNT: u32 = 16;
pub const DEFAULT_ANGLE_COUNT: u32 = 16;

/// Which half of the application the user is interacting with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// 2-D curve editing: control points, polygon markers, curve preview.
    Edit,
    /// 3-D viewing of the revolved surface.
    View,
}

/// Top-level scene state and the sole dispatcher of input events.
///
/// Ownership is single-writer throughout: the editor owns the control
/// points, the orbit controller owns camera rotation and light, and the
/// scene itself owns mode, sequences, and the mesh. All mutation happens
/// synchronously inside `handle_event` or an explicit transition; a render
/// pass therefore always observes settled state.
#[derive(Debug, Clone)]
pub struct Scene {
    mode: Mode,
    viewport: (f64, f64),
    editor: ControlPointEditor,
    orbit: OrbitController,
    camera: Camera,
    material: Material,
    textured: bool,
    sample_count: u32,
    angle_count: u32,
    times: TimeSequence,
    angles: AngleSequence,
    mesh: TriangleMesh,
    shift_down: bool,
    pointer_down: bool,
}

impl Scene {
    /// New scene in edit mode over a viewport of the given pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        let camera = Camera::default_view();
        let orbit = OrbitController::new(camera.view_matrix());
        Self {
            mode: Mode::Edit,
            viewport: (width, height),
            editor: ControlPointEditor::new(),
            orbit,
            camera,
            material: Material::default(),
            textured: false,
            sample_count: DEFAULT_SAMPLE_COUNT,
            angle_count: DEFAULT_ANGLE_COUNT,
            times: TimeSequence::fine(),
            angles: AngleSequence::closed(DEFAULT_ANGLE_COUNT),
            mesh: TriangleMesh::default(),
            shift_down: false,
            pointer_down: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn editor(&self) -> &ControlPointEditor {
        &self.editor
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn textured(&self) -> bool {
        self.textured
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn times(&self) -> &TimeSequence {
        &self.times
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn angle_count(&self) -> u32 {
        self.angle_count
    }

    /// Switch to view mode: restore default counts, rebuild the coarse time
    /// sequence and the angle sequence, and tessellate the surface.
    pub fn enter_view(&mut self) {
        log::debug!("mode transition: edit -> view");
        self.mode = Mode::View;
        self.pointer_down = false;
        self.restore_defaults();
        self.times = TimeSequence::coarse(self.sample_count);
        self.angles = AngleSequence::closed(self.angle_count);
        self.rebuild_surface();
    }

    /// Switch back to edit mode: restore default counts and the fine preview
    /// time sequence. Control points keep their edited positions.
    pub fn enter_edit(&mut self) {
        log::debug!("mode transition: view -> edit");
        self.mode = Mode::Edit;
        self.pointer_down = false;
        self.restore_defaults();
        self.times = TimeSequence::fine();
    }

    fn restore_defaults(&mut self) {
        self.sample_count = DEFAULT_SAMPLE_COUNT;
        self.angle_count = DEFAULT_ANGLE_COUNT;
    }

    /// Replace the material wholesale and drop back to the lit pipeline.
    pub fn set_material(&mut self, material: Material) {
        self.textured = false;
        self.material = material;
    }

    /// Switch the surface pass to texture sampling. The mesh is untouched.
    pub fn enable_texture(&mut self) {
        self.textured = true;
    }

    /// Apply a sample-count update from the configuration surface.
    ///
    /// Accepted only in view mode, and only for a positive integer that is a
    /// multiple of 8 and differs from the current value. Rejections keep the
    /// prior state and surface no error to the user.
    pub fn set_sample_count(&mut self, raw: &str) {
        match self.validate_sample_count(raw) {
            Ok(v) => {
                self.sample_count = v;
                self.times = TimeSequence::coarse(v);
                self.rebuild_surface();
            }
            Err(err) => log::debug!("sample-count update rejected: {err}"),
        }
    }

    /// Apply an angle-count update; any positive integer different from the
    /// current value is accepted, in view mode only.
    pub fn set_angle_count(&mut self, raw: &str) {
        match self.validate_angle_count(raw) {
            Ok(v) => {
                self.angle_count = v;
                self.angles = AngleSequence::closed(v);
                self.rebuild_surface();
            }
            Err(err) => log::debug!("angle-count update rejected: {err}"),
        }
    }

    fn validate_sample_count(&self, raw: &str) -> Result<u32> {
        let v = parse_positive_integer(raw)?;
        if self.mode != Mode::View {
            return Err(LatheError::InvalidParameter(
                "sample count only applies in view mode".into(),
            ));
        }
        if v % 8 != 0 {
            return Err(LatheError::InvalidParameter(format!(
                "sample count {v} is not a multiple of 8"
            )));
        }
        if v == self.sample_count {
            return Err(LatheError::InvalidParameter("sample count unchanged".into()));
        }
        Ok(v)
    }

    fn validate_angle_count(&self, raw: &str) -> Result<u32> {
        let v = parse_positive_integer(raw)?;
        if self.mode != Mode::View {
            return Err(LatheError::InvalidParameter(
                "angle count only applies in view mode".into(),
            ));
        }
        if v == self.angle_count {
            return Err(LatheError::InvalidParameter("angle count unchanged".into()));
        }
        Ok(v)
    }

    /// Retessellate the surface from the current control points and
    /// sequences. Always a total rebuild.
    pub fn rebuild_surface(&mut self) {
        let ring = self.editor.spline().sample_ring(&self.times);
        self.mesh = revolve(&ring, &self.angles);
        log::debug!(
            "surface rebuilt: {} samples x {} angles, {} triangles",
            ring.len(),
            self.angles.len(),
            self.mesh.triangle_count()
        );
    }

    /// Dispatch one input event. All state mutation funnels through here or
    /// the explicit mode transitions.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down = true;
                match self.mode {
                    Mode::View => self.orbit.begin_drag(x, y, self.shift_down),
                    Mode::Edit => self.editor.pointer_down(self.to_ndc(x, y)),
                }
            }
            InputEvent::PointerMove { x, y } => {
                if !self.pointer_down {
                    return;
                }
                match self.mode {
                    Mode::View => self.orbit.drag_to(x, y),
                    Mode::Edit => self.editor.drag_to(self.to_ndc(x, y)),
                }
            }
            InputEvent::PointerUp => {
                self.pointer_down = false;
                match self.mode {
                    Mode::View => self.orbit.release(),
                    Mode::Edit => self.editor.release(),
                }
            }
            InputEvent::KeyDown(Key::Shift) => self.shift_down = true,
            InputEvent::KeyUp(Key::Shift) => self.shift_down = false,
            InputEvent::KeyDown(Key::DollyIn) => {
                if self.mode == Mode::View {
                    self.orbit.dolly(DOLLY_STEP);
                }
            }
            InputEvent::KeyDown(Key::DollyOut) => {
                if self.mode == Mode::View {
                    self.orbit.dolly(-DOLLY_STEP);
                }
            }
            InputEvent::KeyUp(_) => {}
            InputEvent::FieldChanged { field, value } => match field {
                ParamField::SampleCount => self.set_sample_count(&value),
                ParamField::AngleCount => self.set_angle_count(&value),
            },
        }
    }

    fn to_ndc(&self, x: f64, y: f64) -> lathe_math::DVec2 {
        screen_to_ndc(x, y, self.viewport.0, self.viewport.1)
    }
}

/// Positive-integer parsing over numeric field text. Integral-valued decimal
/// strings like `"16.0"` count as integers; fractional values, junk, zero,
/// and negatives all fail.
fn parse_positive_integer(raw: &str) -> Result<u32> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| LatheError::InvalidParameter(format!("'{raw}' is not a number")))?;
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(LatheError::InvalidParameter(format!(
            "'{raw}' is not an integer"
        )));
    }
    if v < 1.0 || v > f64::from(u32::MAX) {
        return Err(LatheError::InvalidParameter("value must be positive".into()));
    }
    Ok(v as u32)
}
