//! Polygonal face mesh.

use crate::{Aabb, MeshBounds, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh whose faces may have any arity of 3 or more.
///
/// This is the intermediate representation between tube generation and
/// triangulation: the tube sweep emits quad panels, and the triangulator
/// converts them into an [`IndexedMesh`](crate::IndexedMesh).
///
/// Faces reference vertices by index with counter-clockwise winding when
/// viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{PolygonMesh, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(vec![0, 1, 2, 3]);
///
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygonal faces as vertex index runs, arity >= 3.
    pub faces: Vec<Vec<u32>>,
}

impl PolygonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Vec<u32>>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Count the triangles a fan triangulation of every face would produce.
    ///
    /// An n-gon fans into `n - 2` triangles; faces below arity 3 count as zero.
    #[must_use]
    pub fn fan_triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|face| face.len().saturating_sub(2))
            .sum()
    }
}

impl MeshBounds for PolygonMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
