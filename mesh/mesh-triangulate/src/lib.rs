//! Triangulation of polygon meshes.
//!
//! Converts the quad-dominant output of tube generation into pure triangle
//! meshes by fan-splitting each convex face. The result is ready for
//! decimation and OBJ export.
//!
//! # Example
//!
//! ```
//! use mesh_triangulate::triangulate;
//! use mesh_types::{MeshTopology, PolygonMesh, Vertex};
//!
//! let pentagon = PolygonMesh::from_parts(
//!     (0..5)
//!         .map(|i| {
//!             let angle = 2.0 * std::f64::consts::PI * f64::from(i) / 5.0;
//!             Vertex::from_coords(angle.cos(), angle.sin(), 0.0)
//!         })
//!         .collect(),
//!     vec![vec![0, 1, 2, 3, 4]],
//! );
//!
//! let mesh = triangulate(&pentagon).unwrap();
//! assert_eq!(mesh.face_count(), 3);
//! ```

mod error;
mod triangulate;

pub use error::{TriangulateError, TriangulateResult};
pub use triangulate::triangulate;
