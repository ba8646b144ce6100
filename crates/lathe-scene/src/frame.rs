//! Per-frame primitive assembly.
//!
//! Walks the settled scene state and produces the batches and uniform block
//! the external renderer consumes: center axis dashes, control-point disks,
//! polygon markers, and the curve preview in edit mode; the revolved surface
//! under lit or textured shading in view mode.

use std::f64::consts::TAU;

use lathe_core::Result;
use lathe_geometry::trace_markers;
use lathe_math::{DMat4, DVec4, Point4};
use lathe_render::{DrawBatch, PrimitiveKind, Renderer, ShadingMode, Uniforms};

use crate::mode::{Mode, Scene};

const WHITE: DVec4 = DVec4::new(1.0, 1.0, 1.0, 1.0);
const CURVE_COLOR: DVec4 = DVec4::new(0.0, 1.0, 0.0, 1.0);

/// Base control-point disk radius in NDC units.
const DISK_RADIUS: f64 = 0.013671875;
/// Radius scale for the highlighted disk.
const HIGHLIGHT_SCALE: f64 = 1.4;
/// Fan resolution of a disk.
const DISK_SEGMENTS: usize = 100;
/// Dash count of the center dividing line.
const CENTER_DASHES: usize = 8;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct FramePacket {
    pub uniforms: Uniforms,
    pub batches: Vec<DrawBatch>,
}

/// Assemble the frame for the scene's current mode.
pub fn compose_frame(scene: &Scene) -> FramePacket {
    match scene.mode() {
        Mode::Edit => edit_frame(scene),
        Mode::View => view_frame(scene),
    }
}

/// Assemble and immediately hand the frame to a renderer: uniforms first,
/// then one draw call per batch.
pub fn render_frame<R: Renderer>(scene: &Scene, renderer: &mut R) -> Result<()> {
    let packet = compose_frame(scene);
    renderer.set_uniforms(&packet.uniforms)?;
    for batch in &packet.batches {
        renderer.draw(batch)?;
    }
    Ok(())
}

fn edit_frame(scene: &Scene) -> FramePacket {
    let mut batches = Vec::new();

    batches.push(center_line_batch());
    batches.extend(control_point_batches(scene));
    batches.extend(polygon_marker_batches(scene));
    batches.extend(curve_batches(scene));

    // The 2-D passes draw in NDC directly; no camera transforms apply.
    let products = scene.material().products();
    FramePacket {
        uniforms: Uniforms {
            model_view: DMat4::IDENTITY,
            projection: DMat4::IDENTITY,
            ambient: products.ambient,
            diffuse: products.diffuse,
            specular: products.specular,
            light: scene.orbit().light(),
            shininess: scene.material().shininess,
        },
        batches,
    }
}

fn view_frame(scene: &Scene) -> FramePacket {
    let shading = if scene.textured() {
        ShadingMode::Textured
    } else {
        ShadingMode::Lit
    };
    let products = scene.material().products();
    FramePacket {
        uniforms: Uniforms {
            model_view: scene.orbit().model_view(),
            projection: scene.camera().projection_matrix(),
            ambient: products.ambient,
            diffuse: products.diffuse,
            specular: products.specular,
            light: scene.orbit().light(),
            shininess: scene.material().shininess,
        },
        batches: vec![DrawBatch::from_mesh(scene.mesh(), shading)],
    }
}

/// The dashed dividing line along x = 0: pairs of dash endpoints from y = -1
/// upward, advancing two dash lengths per dash.
fn center_line_batch() -> DrawBatch {
    let dy = 1.0 / CENTER_DASHES as f64;
    let mut positions = Vec::with_capacity(2 * CENTER_DASHES);
    let mut y = -1.0;
    for _ in 0..CENTER_DASHES {
        positions.push(Point4::new(0.0, y, 0.0, 1.0));
        positions.push(Point4::new(0.0, y + dy, 0.0, 1.0));
        y += 2.0 * dy;
    }
    DrawBatch::colored(PrimitiveKind::Lines, ShadingMode::FlatColor, positions, WHITE)
}

/// One filled disk per control point; the highlighted one is enlarged and
/// tinted differently.
fn control_point_batches(scene: &Scene) -> Vec<DrawBatch> {
    let editor = scene.editor();
    editor
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let highlighted = editor.highlight() == Some(i);
            let radius = if highlighted {
                DISK_RADIUS * HIGHLIGHT_SCALE
            } else {
                DISK_RADIUS
            };
            let color = DVec4::new(1.0, 0.0, if highlighted { 1.0 } else { 0.0 }, 1.0);
            DrawBatch::colored(
                PrimitiveKind::Triangles,
                ShadingMode::FlatColor,
                disk_triangles(*p, radius),
                color,
            )
        })
        .collect()
}

/// Triangle list spanning a disk around `center`.
fn disk_triangles(center: Point4, radius: f64) -> Vec<Point4> {
    let rim = |i: usize| {
        let theta = TAU * i as f64 / DISK_SEGMENTS as f64;
        Point4::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
            center.z,
            center.w,
        )
    };
    let mut positions = Vec::with_capacity(3 * DISK_SEGMENTS);
    for i in 0..DISK_SEGMENTS {
        positions.push(center);
        positions.push(rim(i));
        positions.push(rim(i + 1));
    }
    positions
}

/// Marker points for each control-polygon segment. Degenerate segments
/// produce no markers and are skipped entirely.
fn polygon_marker_batches(scene: &Scene) -> Vec<DrawBatch> {
    let points = scene.editor().points();
    points
        .windows(2)
        .filter_map(|pair| {
            let markers = trace_markers(pair[0], pair[1]);
            if markers.is_empty() {
                return None;
            }
            Some(DrawBatch::colored(
                PrimitiveKind::Points,
                ShadingMode::FlatColor,
                markers,
                WHITE,
            ))
        })
        .collect()
}

/// The two sampled curve segments as line strips.
fn curve_batches(scene: &Scene) -> Vec<DrawBatch> {
    let times = scene.times();
    scene
        .editor()
        .spline()
        .segments()
        .iter()
        .map(|segment| {
            let positions = times.values.iter().map(|&t| segment.point_at(t)).collect();
            DrawBatch::colored(
                PrimitiveKind::LineStrip,
                ShadingMode::Curve,
                positions,
                CURVE_COLOR,
            )
        })
        .collect()
}
