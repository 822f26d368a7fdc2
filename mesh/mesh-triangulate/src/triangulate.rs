//! Fan triangulation of polygon faces.

use mesh_types::{IndexedMesh, PolygonMesh};
use tracing::debug;

use crate::error::{TriangulateError, TriangulateResult};

/// Triangulate every face of a polygon mesh with a triangle fan.
///
/// Each n-gon splits into `n - 2` triangles anchored at its first vertex:
/// `[v0, v1, v2], [v0, v2, v3], ...`. Faces must be convex for the fan to
/// cover them without overlap; the quad panels produced by tube generation
/// always are. Vertex data and winding order are preserved, so a
/// counter-clockwise face yields counter-clockwise triangles.
///
/// Triangles pass through unchanged and an empty mesh triangulates to an
/// empty mesh.
///
/// # Errors
///
/// Returns an error if a face has fewer than 3 vertices or references a
/// vertex outside the mesh.
///
/// # Example
///
/// ```
/// use mesh_triangulate::triangulate;
/// use mesh_types::{PolygonMesh, Vertex};
///
/// let quad = PolygonMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 1.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![vec![0, 1, 2, 3]],
/// );
///
/// let mesh = triangulate(&quad).unwrap();
/// assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
/// ```
pub fn triangulate(mesh: &PolygonMesh) -> TriangulateResult<IndexedMesh> {
    let vertex_count = mesh.vertex_count();
    let mut faces = Vec::with_capacity(mesh.fan_triangle_count());

    for (face_idx, face) in mesh.faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(TriangulateError::FaceTooSmall {
                face: face_idx,
                arity: face.len(),
            });
        }
        for &index in face {
            if index as usize >= vertex_count {
                return Err(TriangulateError::IndexOutOfBounds {
                    face: face_idx,
                    index,
                    vertex_count,
                });
            }
        }

        for i in 1..face.len() - 1 {
            faces.push([face[0], face[i], face[i + 1]]);
        }
    }

    debug!(
        polygons = mesh.face_count(),
        triangles = faces.len(),
        "triangulated polygon mesh"
    );

    Ok(IndexedMesh::from_parts(mesh.vertices.clone(), faces))
}
