//! Core mesh types for the curve-to-OBJ conversion pipeline.
//!
//! The pipeline moves geometry through three representations, all defined
//! here:
//!
//! - [`PolylineMesh`] - the input: points connected into polyline cells
//! - [`PolygonMesh`] - the swept tube surface, faces of arbitrary arity
//! - [`IndexedMesh`] - the triangulated surface that gets decimated and
//!   exported
//!
//! Supporting vocabulary: [`Vertex`] and its [`VertexAttributes`],
//! [`VertexColor`], the concrete [`Triangle`], and the [`Aabb`] bounding
//! box. The [`MeshTopology`] and [`MeshBounds`] traits give algorithms a
//! representation-independent view.
//!
//! Coordinates are `f64` in a right-handed system, unit-agnostic. Faces
//! wind counter-clockwise seen from outside, so normals follow the
//! right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Point3, PolylineMesh};
//!
//! // A three-point centerline, the typical pipeline input
//! let curve = PolylineMesh::from_points(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(0.0, 1.0, 2.0),
//! ]);
//!
//! assert_eq!(curve.vertex_count(), 3);
//! assert_eq!(curve.segment_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod polygon;
mod polyline;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use mesh::IndexedMesh;
pub use polygon::PolygonMesh;
pub use polyline::PolylineMesh;
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
