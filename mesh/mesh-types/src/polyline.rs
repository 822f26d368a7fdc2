//! Polyline (curve) input mesh.

use std::path::{Path, PathBuf};

use nalgebra::Point3;

use crate::{Aabb, MeshBounds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line-like input mesh: points connected into polyline cells.
///
/// This is the shape a host application hands to the conversion pipeline:
/// an ordered point set plus polyline cells, each cell an index run where
/// every consecutive pair forms one line segment. Cells with fewer than
/// two points carry no segments and are ignored by the tube sweep.
///
/// The optional `source` records the on-disk location the host loaded the
/// mesh from; the pipeline can derive an output path prefix from it by
/// stripping the extension.
///
/// # Example
///
/// ```
/// use mesh_types::{PolylineMesh, Point3};
///
/// let mesh = PolylineMesh::from_points(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 2.0),
/// ]);
///
/// assert_eq!(mesh.segment_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolylineMesh {
    /// Point positions.
    pub vertices: Vec<Point3<f64>>,

    /// Polyline cells as vertex index runs.
    pub polylines: Vec<Vec<u32>>,

    /// On-disk storage location of the input, if known.
    pub source: Option<PathBuf>,
}

impl PolylineMesh {
    /// Create a new empty polyline mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            polylines: Vec::new(),
            source: None,
        }
    }

    /// Create a mesh holding a single polyline through the given points.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolylineMesh, Point3};
    ///
    /// let mesh = PolylineMesh::from_points(vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// ]);
    /// assert_eq!(mesh.segment_count(), 1);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so point counts > 4B are unsupported by design
    pub fn from_points(points: Vec<Point3<f64>>) -> Self {
        let indices: Vec<u32> = (0..points.len() as u32).collect();
        let polylines = if indices.len() >= 2 {
            vec![indices]
        } else {
            Vec::new()
        };
        Self {
            vertices: points,
            polylines,
            source: None,
        }
    }

    /// Attach the on-disk storage location of this mesh.
    #[inline]
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Append a polyline cell.
    pub fn push_polyline(&mut self, indices: Vec<u32>) {
        self.polylines.push(indices);
    }

    /// Get the on-disk storage location, if known.
    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Derive an output path prefix from the storage location.
    ///
    /// The prefix is the storage path with its extension stripped, the
    /// place a converted file pair lands next to the original.
    /// Returns `None` when the mesh never came from disk.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use mesh_types::PolylineMesh;
    ///
    /// let mesh = PolylineMesh::new().with_source("/data/centerline.vtk");
    /// assert_eq!(mesh.output_prefix(), Some(PathBuf::from("/data/centerline")));
    /// ```
    #[must_use]
    pub fn output_prefix(&self) -> Option<PathBuf> {
        self.source.as_ref().map(|path| path.with_extension(""))
    }

    /// Get the number of points.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Count the line segments across all polyline cells.
    ///
    /// Each cell of `n >= 2` points contributes `n - 1` segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.polylines
            .iter()
            .map(|line| line.len().saturating_sub(1))
            .sum()
    }

    /// Check if the mesh carries no line segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }
}

impl MeshBounds for PolylineMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}
