//! Polyline-to-OBJ mesh conversion toolkit.
//!
//! This umbrella crate re-exports the conversion crates, providing a unified
//! API for turning line-like meshes (vessel centerlines, fiber tracts, curve
//! networks) into simplified, colored surface geometry in Wavefront OBJ
//! format.
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh::prelude::*;
//!
//! // A centerline through three points
//! let centerline = PolylineMesh::from_points(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(0.0, 1.0, 2.0),
//! ]);
//!
//! // Convert it to an OBJ/MTL pair on disk
//! let report = Converter::new(&centerline)
//!     .radius(0.1)
//!     .sides(3)
//!     .run("output/vessel")
//!     .unwrap();
//!
//! println!("{}", report.stats);
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `PolylineMesh`, `PolygonMesh`,
//!   `IndexedMesh`, `Vertex`
//!
//! ## Pipeline Stages
//! - [`tube`] - Tube sweep around polylines
//! - [`triangulate`] - Fan triangulation of polygon meshes
//! - [`decimate`] - Mesh simplification (QEM-based)
//! - [`material`] - Random surface material assignment
//! - [`obj`] - Wavefront OBJ/MTL writing and parsing
//!
//! ## Orchestration
//! - [`convert`] - The conversion pipeline and `Converter` builder
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize impls on the core types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/mesh/0.1.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `PolylineMesh`, `PolygonMesh`, `IndexedMesh`, `Vertex`.
pub use mesh_types as types;

/// Tube sweep around polylines.
pub use mesh_tube as tube;

/// Fan triangulation of polygon meshes.
pub use mesh_triangulate as triangulate;

/// Mesh simplification (QEM-based decimation).
pub use mesh_decimate as decimate;

/// Random surface material assignment.
pub use mesh_material as material;

/// Wavefront OBJ/MTL writing and parsing.
pub use mesh_obj as obj;

/// The conversion pipeline and fluent `Converter` builder.
pub use mesh_convert as convert;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh conversion.
///
/// This module re-exports the most commonly used types and entry points.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{
        Aabb, IndexedMesh, MeshBounds, MeshTopology, Point3, PolygonMesh, PolylineMesh, Vertex,
        VertexColor,
    };

    // Conversion (main use case)
    pub use mesh_convert::{convert_mesh, convert_mesh_at_source, ConvertParams, Converter};

    // Stage entry points
    pub use mesh_decimate::decimate_mesh;
    pub use mesh_material::Material;
    pub use mesh_obj::export_mesh;
    pub use mesh_triangulate::triangulate;
    pub use mesh_tube::tubes_from_mesh;
}

// =============================================================================
// Tests
// =============================================================================
