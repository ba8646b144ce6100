use lathe_core::Result;
use lathe_math::{DMat4, DVec4, Point2, Point4, Vector3};
use lathe_mesh::TriangleMesh;

/// How a batch's vertex list is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Points,
    Lines,
    LineStrip,
    Triangles,
}

/// Which shading pipeline the backend should select for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Flat-colored points and lines (center axis, markers, disks).
    FlatColor,
    /// Curve preview pass.
    Curve,
    /// Lit surface using the material products and light uniforms.
    Lit,
    /// Texture-sampled surface; ignores the material products.
    Textured,
}

impl ShadingMode {
    /// Numeric flag as the shader uniform expects it.
    pub fn flag(self) -> f32 {
        match self {
            ShadingMode::FlatColor => 0.0,
            ShadingMode::Curve => 1.0,
            ShadingMode::Lit => 2.0,
            ShadingMode::Textured => 3.0,
        }
    }
}

/// One draw request handed to the renderer.
///
/// `positions` is always populated. Flat-colored batches carry a parallel
/// `colors` list; surface batches carry parallel `normals` and `uvs` instead.
/// The renderer binds whichever arrays are non-empty and issues a single draw
/// call; it performs no geometry computation of its own.
#[derive(Debug, Clone)]
pub struct DrawBatch {
    pub kind: PrimitiveKind,
    pub shading: ShadingMode,
    pub positions: Vec<Point4>,
    pub colors: Vec<DVec4>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl DrawBatch {
    /// Batch with one color broadcast across all vertices.
    pub fn colored(
        kind: PrimitiveKind,
        shading: ShadingMode,
        positions: Vec<Point4>,
        color: DVec4,
    ) -> Self {
        let colors = vec![color; positions.len()];
        Self {
            kind,
            shading,
            positions,
            colors,
            normals: Vec::new(),
            uvs: Vec::new(),
        }
    }

    /// Triangle batch from a surface mesh, under lit or textured shading.
    pub fn from_mesh(mesh: &TriangleMesh, shading: ShadingMode) -> Self {
        Self {
            kind: PrimitiveKind::Triangles,
            shading,
            positions: mesh.positions.clone(),
            colors: Vec::new(),
            normals: mesh.normals.clone(),
            uvs: mesh.uvs.clone(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Uniform state applied before the draw calls of a frame.
#[derive(Debug, Clone)]
pub struct Uniforms {
    pub model_view: DMat4,
    pub projection: DMat4,
    /// Material products: coefficient times base color, per channel.
    pub ambient: DVec4,
    pub diffuse: DVec4,
    pub specular: DVec4,
    pub light: DVec4,
    pub shininess: f64,
}

/// External rendering collaborator.
///
/// Implementations bind the batch arrays to vertex attributes, apply the
/// current uniform state, and issue one draw call per batch. Backend failures
/// (context loss, shader compile errors) surface as `LatheError::Renderer`
/// and are fatal to the frame; the core never produces them.
pub trait Renderer {
    fn set_uniforms(&mut self, uniforms: &Uniforms) -> Result<()>;
    fn draw(&mut self, batch: &DrawBatch) -> Result<()>;
}
