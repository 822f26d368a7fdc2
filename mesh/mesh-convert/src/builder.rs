//! Fluent builder API for conversions.
//!
//! # Example
//!
//! ```no_run
//! use mesh_convert::Converter;
//! use mesh_types::{Point3, PolylineMesh};
//!
//! let mesh = PolylineMesh::from_points(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ]);
//!
//! let report = Converter::new(&mesh)
//!     .radius(0.2)
//!     .sides(6)
//!     .seed(42)
//!     .run("output/vessel")
//!     .unwrap();
//! ```

use std::path::Path;

use mesh_types::PolylineMesh;

use crate::convert::{convert_mesh, convert_mesh_at_source};
use crate::error::ConvertResult;
use crate::params::ConvertParams;
use crate::report::ConversionReport;

/// Fluent builder for a conversion.
///
/// `Converter` provides a chainable API for configuring conversion
/// parameters before executing the pipeline. Unset parameters keep the
/// [`ConvertParams`] defaults.
///
/// # Example
///
/// ```no_run
/// use mesh_convert::Converter;
/// use mesh_types::{Point3, PolylineMesh};
///
/// let mesh = PolylineMesh::from_points(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ]);
///
/// // Simple usage with defaults
/// let report = Converter::new(&mesh).run("simple");
///
/// // Custom settings
/// let report = Converter::new(&mesh)
///     .radius(0.5)
///     .sides(8)
///     .reduction(0.5)
///     .run("custom");
/// ```
pub struct Converter<'a> {
    mesh: &'a PolylineMesh,
    params: ConvertParams,
}

impl<'a> Converter<'a> {
    /// Create a new `Converter` for the given polyline mesh.
    ///
    /// # Arguments
    ///
    /// * `mesh` - The polyline mesh to convert
    #[must_use]
    pub fn new(mesh: &'a PolylineMesh) -> Self {
        Self {
            mesh,
            params: ConvertParams::default(),
        }
    }

    /// Set the tube radius.
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.params.radius = radius;
        self
    }

    /// Set the number of tube cross-section sides.
    #[must_use]
    pub const fn sides(mut self, sides: usize) -> Self {
        self.params.sides = sides;
        self
    }

    /// Set the fraction of triangles to remove during decimation.
    #[must_use]
    pub const fn reduction(mut self, reduction: f64) -> Self {
        self.params.reduction = reduction;
        self
    }

    /// Seed the material color RNG for reproducible output.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self
    }

    /// Run the conversion, writing `<prefix>.obj` and `<prefix>.mtl`.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error, as [`convert_mesh`].
    pub fn run<P: AsRef<Path>>(self, prefix: P) -> ConvertResult<ConversionReport> {
        convert_mesh(self.mesh, prefix, &self.params)
    }

    /// Run the conversion next to the input's storage location.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingStorageLocation`](crate::ConvertError::MissingStorageLocation)
    /// when the mesh has no `source`, otherwise as [`convert_mesh`].
    pub fn run_at_source(self) -> ConvertResult<ConversionReport> {
        convert_mesh_at_source(self.mesh, &self.params)
    }
}
