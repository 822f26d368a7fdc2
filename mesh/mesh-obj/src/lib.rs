//! Wavefront OBJ/MTL export and import.
//!
//! This crate writes the file pair produced at the end of a conversion:
//!
//! - **OBJ** - vertex positions and triangle faces, referencing the MTL
//! - **MTL** - a single material block with the assigned surface color
//!
//! [`export_mesh`] writes both files from one call, which is how the
//! conversion pipeline uses it. The individual writers and the matching
//! readers are exposed for tooling and round-trip verification.
//!
//! # Example
//!
//! ```no_run
//! use mesh_material::Material;
//! use mesh_obj::{export_mesh, load_obj};
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let paths = export_mesh(&mesh, &Material::default(), "model").unwrap();
//!
//! let loaded = load_obj(&paths.geometry_path).unwrap();
//! assert_eq!(loaded.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod export;
mod mtl;
mod obj;

pub use error::{ObjError, ObjResult};
pub use export::{export_mesh, ExportPaths};
pub use mtl::{load_mtl, save_mtl};
pub use obj::{load_obj, save_obj};
