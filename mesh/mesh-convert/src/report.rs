//! Conversion report and statistics.

use std::fmt;
use std::path::PathBuf;

use mesh_material::Material;

/// Statistics collected across the conversion stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Line segments in the input.
    pub segments: usize,
    /// Vertices of the swept tube surface.
    pub tube_vertices: usize,
    /// Quad faces of the swept tube surface.
    pub tube_faces: usize,
    /// Triangles entering decimation.
    pub triangles_before: usize,
    /// Triangles remaining after decimation.
    pub triangles_after: usize,
}

impl ConversionStats {
    /// Fraction of triangles removed by decimation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_achieved(&self) -> f64 {
        if self.triangles_before == 0 {
            return 0.0;
        }
        1.0 - self.triangles_after as f64 / self.triangles_before as f64
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} segments, {} tube faces, {} → {} triangles ({:.1}% removed)",
            self.segments,
            self.tube_faces,
            self.triangles_before,
            self.triangles_after,
            self.reduction_achieved() * 100.0
        )
    }
}

/// Report returned by a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Path of the written OBJ file.
    pub geometry_path: PathBuf,
    /// Path of the written MTL file.
    pub material_path: PathBuf,
    /// Material assigned to the surface.
    pub material: Material,
    /// Stage statistics.
    pub stats: ConversionStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reduction_achieved_fraction() {
        let stats = ConversionStats {
            segments: 2,
            tube_vertices: 9,
            tube_faces: 6,
            triangles_before: 12,
            triangles_after: 9,
        };
        assert_relative_eq!(stats.reduction_achieved(), 0.25);
    }

    #[test]
    fn reduction_achieved_empty_input() {
        let stats = ConversionStats {
            segments: 0,
            tube_vertices: 0,
            tube_faces: 0,
            triangles_before: 0,
            triangles_after: 0,
        };
        assert_relative_eq!(stats.reduction_achieved(), 0.0);
    }

    #[test]
    fn display_summarizes_stages() {
        let stats = ConversionStats {
            segments: 1,
            tube_vertices: 6,
            tube_faces: 3,
            triangles_before: 6,
            triangles_after: 4,
        };
        let text = format!("{stats}");
        assert!(text.contains("1 segments"));
        assert!(text.contains("6 → 4 triangles"));
    }
}
