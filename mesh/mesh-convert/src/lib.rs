//! Polyline-to-OBJ conversion pipeline.
//!
//! Converts line-like meshes (vessel centerlines, fiber tracts, curve
//! networks) into renderable surface geometry on disk. The pipeline sweeps
//! a tube around every polyline, triangulates the tube surface, decimates
//! it, assigns a random surface color, and writes a Wavefront OBJ/MTL file
//! pair:
//!
//! 1. **Tube sweep** - `mesh-tube`
//! 2. **Triangulation** - `mesh-triangulate`
//! 3. **Decimation** - `mesh-decimate`
//! 4. **Material assignment** - `mesh-material`
//! 5. **Export** - `mesh-obj`
//!
//! Stages run in order and fail fast: the first error aborts the run and
//! is returned as a [`ConvertError`] naming the stage.
//!
//! # Quick Start with `Converter`
//!
//! ```no_run
//! use mesh_convert::Converter;
//! use mesh_types::{Point3, PolylineMesh};
//!
//! let mesh = PolylineMesh::from_points(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(0.0, 1.0, 2.0),
//! ]);
//!
//! let report = Converter::new(&mesh)
//!     .radius(0.1)
//!     .sides(3)
//!     .run("output/vessel")
//!     .unwrap();
//!
//! println!("wrote {}", report.geometry_path.display());
//! ```
//!
//! # Function API
//!
//! ```no_run
//! use mesh_convert::{convert_mesh, ConvertParams};
//! use mesh_types::{Point3, PolylineMesh};
//!
//! let mesh = PolylineMesh::from_points(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//! ]);
//!
//! let params = ConvertParams::default().with_reduction(0.5).with_seed(42);
//! let report = convert_mesh(&mesh, "output/curve", &params).unwrap();
//! println!("{}", report.stats);
//! ```
//!
//! A mesh that records where it was loaded from can be converted in place,
//! writing the file pair next to the original:
//!
//! ```no_run
//! use mesh_convert::Converter;
//! use mesh_types::PolylineMesh;
//!
//! let mesh = PolylineMesh::new().with_source("/data/centerline.vtk");
//! let report = Converter::new(&mesh).run_at_source();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod convert;
mod error;
mod params;
mod report;

pub use builder::Converter;
pub use convert::{convert_mesh, convert_mesh_at_source};
pub use error::{ConvertError, ConvertResult};
pub use params::ConvertParams;
pub use report::{ConversionReport, ConversionStats};
