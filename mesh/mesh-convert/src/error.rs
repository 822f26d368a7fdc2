//! Error types for the conversion pipeline.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during a conversion.
///
/// The pipeline is fail-fast: the first stage error aborts the run and is
/// returned unchanged, wrapped in the variant naming the stage.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Tube generation failed.
    #[error("tube generation failed: {0}")]
    Tube(#[from] mesh_tube::TubeError),

    /// Triangulation failed.
    #[error("triangulation failed: {0}")]
    Triangulate(#[from] mesh_triangulate::TriangulateError),

    /// Decimation failed.
    #[error("decimation failed: {0}")]
    Decimate(#[from] mesh_decimate::DecimateError),

    /// Export failed.
    #[error("export failed: {0}")]
    Export(#[from] mesh_obj::ObjError),

    /// No output prefix could be derived from the input mesh.
    #[error("input mesh has no storage location to derive an output prefix from")]
    MissingStorageLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::from(mesh_tube::TubeError::InvalidRadius(-1.0));
        assert!(format!("{err}").contains("tube generation failed"));

        let err = ConvertError::MissingStorageLocation;
        assert!(format!("{err}").contains("no storage location"));
    }
}
