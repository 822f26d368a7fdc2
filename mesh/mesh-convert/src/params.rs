//! Parameters for the conversion pipeline.

/// Parameters controlling a polyline-to-OBJ conversion.
///
/// Collects the knobs of the individual stages: tube radius and profile
/// side count for the sweep, the reduction fraction for decimation, and an
/// optional RNG seed for reproducible material colors. Values are validated
/// by the stage that consumes them, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    /// Tube radius around each polyline.
    pub radius: f64,

    /// Number of sides of the tube cross-section.
    pub sides: usize,

    /// Fraction of triangles to remove during decimation, in `[0.0, 1.0)`.
    pub reduction: f64,

    /// Seed for the material color RNG. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for ConvertParams {
    /// Thin tubes with a triangular cross-section, reduced by 30%.
    fn default() -> Self {
        Self {
            radius: 0.1,
            sides: 3,
            reduction: 0.3,
            seed: None,
        }
    }
}

impl ConvertParams {
    /// Set the tube radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of tube cross-section sides.
    #[must_use]
    pub const fn with_sides(mut self, sides: usize) -> Self {
        self.sides = sides;
        self
    }

    /// Set the fraction of triangles to remove during decimation.
    #[must_use]
    pub const fn with_reduction(mut self, reduction: f64) -> Self {
        self.reduction = reduction;
        self
    }

    /// Seed the material color RNG for reproducible output.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
