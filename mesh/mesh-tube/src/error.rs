//! Error types for tube generation.

use thiserror::Error;

/// Result type for tube generation operations.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors that can occur while sweeping tubes around polylines.
#[derive(Debug, Error)]
pub enum TubeError {
    /// Curve has too few points to sweep.
    #[error("curve needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Radius is invalid (zero, negative, or non-finite).
    #[error("invalid tube radius: {0}")]
    InvalidRadius(f64),

    /// Cross-section side count is too low.
    #[error("cross-section needs at least {min} sides, got {actual}")]
    TooFewSides {
        /// Minimum required sides.
        min: usize,
        /// Actual side count.
        actual: usize,
    },

    /// Consecutive coincident points in a polyline.
    #[error("degenerate segment {segment} in polyline {polyline}: consecutive points coincide")]
    DegenerateSegment {
        /// Index of the polyline cell.
        polyline: usize,
        /// Index of the zero-length segment within the cell.
        segment: usize,
    },

    /// A polyline references a vertex index outside the mesh.
    #[error("polyline {polyline} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Index of the polyline cell.
        polyline: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
