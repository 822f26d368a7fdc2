//! Mesh simplification using quadric error metrics.
//!
//! Reduces the triangle count of an [`IndexedMesh`](mesh_types::IndexedMesh)
//! by iteratively collapsing the edges whose removal distorts the surface
//! least, following the Quadric Error Metrics (QEM) approach.
//!
//! # Algorithm
//!
//! 1. For each vertex, accumulate a quadric from the planes of its incident
//!    faces. The quadric of a point measures its summed squared distance to
//!    those planes.
//! 2. For each edge, compute the cost of collapsing it to the position that
//!    minimizes the combined quadric (falling back to the edge midpoint when
//!    the system is singular).
//! 3. Repeatedly collapse the cheapest edge, dropping degenerated faces and
//!    re-queuing the surviving vertex's edges, until the requested fraction
//!    of triangles has been removed.
//! 4. Collapses that would break the surface (link condition) or touch a
//!    preserved boundary are rejected.
//!
//! # Example
//!
//! ```
//! use mesh_decimate::{decimate_mesh, DecimateParams};
//! use mesh_types::{IndexedMesh, Vertex};
//!
//! let mesh = IndexedMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! // A single triangle is already below the default 30% reduction target
//! let outcome = decimate_mesh(&mesh, &DecimateParams::default()).unwrap();
//! assert_eq!(outcome.final_triangles, 1);
//! println!("{outcome}");
//! ```

// Deny unwrap/expect in library code; tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod error;
mod outcome;
mod params;
mod quadric;

pub use decimate::decimate_mesh;
pub use error::{DecimateError, DecimateResult};
pub use outcome::DecimationOutcome;
pub use params::{DecimateParams, MAX_REDUCTION};
pub use quadric::Quadric;
