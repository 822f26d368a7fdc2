//! Tube mesh generation around polyline curves.
//!
//! Sweeps a regular polygon cross-section along each polyline of an input
//! curve set, producing an open-ended quad-panel surface suitable for
//! triangulation and export. Ring orientation uses parallel transport
//! frames, so the cross-section does not spin around the curve.
//!
//! # Example
//!
//! ```
//! use mesh_tube::{tube_from_polyline, TubeParams};
//! use nalgebra::Point3;
//!
//! let curve = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(0.0, 5.0, 10.0),
//! ];
//!
//! let params = TubeParams::default().with_radius(0.25).with_sides(12);
//! let tube = tube_from_polyline(&curve, &params).unwrap();
//!
//! assert_eq!(tube.vertex_count(), 3 * 12);
//! assert_eq!(tube.face_count(), 2 * 12);
//! ```

mod error;
mod frame;
mod tube;

pub use error::{TubeError, TubeResult};
pub use frame::{parallel_transport_frames, Frame};
pub use tube::{tube_from_polyline, tubes_from_mesh, TubeParams, MIN_SIDES};
