//! Traits shared by the mesh types.

use crate::{Aabb, Triangle};
use nalgebra::Point3;

/// Read access to a triangulated surface.
///
/// Algorithms that only need counts and per-face geometry take this trait
/// instead of a concrete mesh type, so they work on any triangle storage.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangle faces.
    fn face_count(&self) -> usize;

    /// Whether the mesh holds no renderable geometry.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Materialize one face as a [`Triangle`] with resolved positions.
    ///
    /// Returns `None` when `face_index` is out of range.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over all faces as [`Triangle`]s with resolved positions.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Axis-aligned spatial extent of a mesh.
pub trait MeshBounds {
    /// Bounding box over all vertices.
    ///
    /// A mesh without vertices reports the empty [`Aabb`].
    fn bounds(&self) -> Aabb;

    /// Center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
