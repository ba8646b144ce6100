use lathe_math::{Point2, Point4, Vector3};

/// Flat, non-indexed triangle mesh.
///
/// The three arrays run in parallel, one entry per vertex, grouped in triples.
/// Every triangle owns private copies of its three vertices and all three
/// carry the same face normal, so adjacent faces never share shading data and
/// the surface renders faceted. There is no index buffer on purpose.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point4>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check the parallel-array invariant: equal lengths, multiple of 3.
    pub fn is_consistent(&self) -> bool {
        self.positions.len() % 3 == 0
            && self.normals.len() == self.positions.len()
            && self.uvs.len() == self.positions.len()
    }
}
