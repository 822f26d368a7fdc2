//! Outcome types for decimation.

// Triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Outcome of mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimationOutcome {
    /// The decimated mesh.
    pub mesh: IndexedMesh,

    /// Number of triangles in the input mesh.
    pub original_triangles: usize,

    /// Number of triangles in the decimated mesh.
    pub final_triangles: usize,

    /// Number of edge collapses performed.
    pub collapses_performed: usize,

    /// Number of edge collapses rejected (e.g., would create non-manifold geometry).
    pub collapses_rejected: usize,
}

impl DecimationOutcome {
    /// Get the fraction of triangles removed.
    #[must_use]
    pub fn reduction_achieved(&self) -> f64 {
        if self.original_triangles == 0 {
            0.0
        } else {
            1.0 - self.final_triangles as f64 / self.original_triangles as f64
        }
    }

    /// Check if any decimation occurred.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses_performed > 0
    }
}

impl std::fmt::Display for DecimationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decimation: {} → {} triangles ({:.1}% removed, {} collapses)",
            self.original_triangles,
            self.final_triangles,
            self.reduction_achieved() * 100.0,
            self.collapses_performed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_achieved() {
        let outcome = DecimationOutcome {
            mesh: IndexedMesh::new(),
            original_triangles: 1000,
            final_triangles: 700,
            collapses_performed: 150,
            collapses_rejected: 10,
        };

        assert!((outcome.reduction_achieved() - 0.3).abs() < 0.001);
    }

    #[test]
    fn reduction_achieved_empty() {
        let outcome = DecimationOutcome {
            mesh: IndexedMesh::new(),
            original_triangles: 0,
            final_triangles: 0,
            collapses_performed: 0,
            collapses_rejected: 0,
        };

        assert!(outcome.reduction_achieved().abs() < 0.001);
        assert!(!outcome.was_decimated());
    }

    #[test]
    fn display() {
        let outcome = DecimationOutcome {
            mesh: IndexedMesh::new(),
            original_triangles: 1000,
            final_triangles: 700,
            collapses_performed: 150,
            collapses_rejected: 0,
        };

        let display = format!("{outcome}");
        assert!(display.contains("1000"));
        assert!(display.contains("700"));
        assert!(display.contains("30.0%"));
    }
}
