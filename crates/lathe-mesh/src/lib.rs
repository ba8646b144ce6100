pub mod revolve;
pub mod triangle;

pub use revolve::revolve;
pub use triangle::TriangleMesh;
