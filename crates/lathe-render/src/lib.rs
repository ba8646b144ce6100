pub mod batch;
pub mod camera;

pub use batch::{DrawBatch, PrimitiveKind, Renderer, ShadingMode, Uniforms};
pub use camera::Camera;
