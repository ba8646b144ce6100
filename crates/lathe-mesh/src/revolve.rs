//! Surface-of-revolution tessellation.

use lathe_geometry::AngleSequence;
use lathe_math::{rotation_y, Point2, Point4, Vector3};

use crate::triangle::TriangleMesh;

/// Sweep a sampled curve ring through `angles` and triangulate the result.
///
/// The ring is rotated about the Y axis once per angle, forming a grid
/// indexed by (angle row, sample column). Every adjacent quad contributes two
/// triangles whose vertices are private copies; each triangle's face normal
/// is assigned to all three of its vertices, never averaged across the shared
/// edge, so the surface shades faceted. UVs are `(col/(S-1), row/(A-1))`.
///
/// Fewer than 2 samples or 2 angles cannot form a quad; the result is then an
/// empty mesh. Rebuilds are always total, there is no incremental path.
pub fn revolve(ring: &[Point4], angles: &AngleSequence) -> TriangleMesh {
    let samples = ring.len();
    let rows = angles.len();
    if samples < 2 || rows < 2 {
        return TriangleMesh::default();
    }

    let grid: Vec<Vec<Point4>> = angles
        .values
        .iter()
        .map(|&theta| {
            let rot = rotation_y(theta);
            ring.iter().map(|&p| rot * p).collect()
        })
        .collect();

    let quads = (samples - 1) * (rows - 1);
    let mut mesh = TriangleMesh {
        positions: Vec::with_capacity(6 * quads),
        normals: Vec::with_capacity(6 * quads),
        uvs: Vec::with_capacity(6 * quads),
    };

    let uv = |row: usize, col: usize| {
        Point2::new(col as f64 / (samples - 1) as f64, row as f64 / (rows - 1) as f64)
    };

    for col in 0..samples - 1 {
        for row in 0..rows - 1 {
            let a = grid[row][col];
            let b = grid[row + 1][col + 1];
            let c = grid[row + 1][col];
            let d = grid[row][col + 1];

            mesh.positions.extend_from_slice(&[a, b, c, a, b, d]);

            let n1 = face_normal(b, c, a, c);
            let n2 = face_normal(a, d, b, d);
            mesh.normals.extend_from_slice(&[n1, n1, n1, n2, n2, n2]);

            mesh.uvs.extend_from_slice(&[
                uv(row, col),
                uv(row + 1, col + 1),
                uv(row + 1, col),
                uv(row, col),
                uv(row + 1, col + 1),
                uv(row, col + 1),
            ]);
        }
    }

    debug_assert!(mesh.is_consistent());
    mesh
}

/// Face normal `cross(p - q, r - q)` on the spatial components.
fn face_normal(p: Point4, q: Point4, r: Point4, s: Point4) -> Vector3 {
    (p.truncate() - q.truncate()).cross(r.truncate() - s.truncate())
}
