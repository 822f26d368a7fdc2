//! Error types for triangulation.

use thiserror::Error;

/// Result type for triangulation operations.
pub type TriangulateResult<T> = Result<T, TriangulateError>;

/// Errors that can occur during triangulation.
#[derive(Debug, Error)]
pub enum TriangulateError {
    /// A face has fewer than 3 vertices.
    #[error("face {face} has {arity} vertices, need at least 3")]
    FaceTooSmall {
        /// Index of the offending face.
        face: usize,
        /// Number of vertices the face references.
        arity: usize,
    },

    /// A face references a vertex outside the mesh.
    #[error("face {face} references vertex {index} but mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
