//! Decimation tuning knobs.

use tracing::warn;

use crate::error::{DecimateError, DecimateResult};

/// Highest reduction fraction the decimator will attempt.
///
/// Requests above this (but still below 1.0) are clamped, leaving at least
/// a few percent of the input triangles in place.
pub const MAX_REDUCTION: f64 = 0.95;

/// Controls how aggressively a mesh is simplified.
#[derive(Debug, Clone)]
pub struct DecimateParams {
    /// Fraction of triangles to remove, in `[0.0, 1.0)`. Default: 0.3
    ///
    /// Values above [`MAX_REDUCTION`] are clamped at decimation time;
    /// values outside the valid range are rejected.
    pub reduction: f64,

    /// Keep open edges (those with a single adjacent face) pinned in place.
    /// Default: true
    pub preserve_boundary: bool,

    /// Cost multiplier applied to open-edge collapses when
    /// `preserve_boundary` is off. Larger values push the decimator toward
    /// interior edges. Default: 10.0
    pub boundary_penalty: f64,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            reduction: 0.3,
            preserve_boundary: true,
            boundary_penalty: 10.0,
        }
    }
}

impl DecimateParams {
    /// Create params removing the given fraction of triangles.
    ///
    /// The value is validated by [`decimate_mesh`](crate::decimate_mesh),
    /// not here.
    #[must_use]
    pub fn with_reduction(reduction: f64) -> Self {
        Self {
            reduction,
            ..Default::default()
        }
    }

    /// Toggle boundary preservation.
    #[must_use]
    pub const fn with_preserve_boundary(mut self, preserve: bool) -> Self {
        self.preserve_boundary = preserve;
        self
    }

    /// Set the open-edge cost multiplier.
    #[must_use]
    pub const fn with_boundary_penalty(mut self, penalty: f64) -> Self {
        self.boundary_penalty = penalty;
        self
    }

    /// Check the reduction fraction and clamp it to [`MAX_REDUCTION`].
    ///
    /// [`decimate_mesh`](crate::decimate_mesh) runs this itself; callers
    /// that want parameter errors surfaced before any mesh work (the
    /// conversion pipeline does) can run it up front and pass the returned
    /// params along.
    ///
    /// # Errors
    ///
    /// Returns [`DecimateError::InvalidReduction`] if the fraction lies
    /// outside `[0.0, 1.0)`.
    pub fn validated(mut self) -> DecimateResult<Self> {
        if !(0.0..1.0).contains(&self.reduction) {
            return Err(DecimateError::InvalidReduction(self.reduction));
        }
        if self.reduction > MAX_REDUCTION {
            warn!(
                requested = self.reduction,
                clamped = MAX_REDUCTION,
                "reduction fraction clamped"
            );
            self.reduction = MAX_REDUCTION;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = DecimateParams::default();
        assert!((params.reduction - 0.3).abs() < 0.001);
        assert!(params.preserve_boundary);
        assert!((params.boundary_penalty - 10.0).abs() < 0.001);
    }

    #[test]
    fn with_reduction() {
        let params = DecimateParams::with_reduction(0.5);
        assert!((params.reduction - 0.5).abs() < 0.001);
    }

    #[test]
    fn reduction_is_not_clamped_at_construction() {
        // Out-of-range values must survive so decimation can reject them
        let params = DecimateParams::with_reduction(1.5);
        assert!((params.reduction - 1.5).abs() < 0.001);
    }

    #[test]
    fn builder() {
        let params = DecimateParams::default()
            .with_preserve_boundary(false)
            .with_boundary_penalty(2.0);

        assert!(!params.preserve_boundary);
        assert!((params.boundary_penalty - 2.0).abs() < 0.001);
    }

    #[test]
    fn validated_passes_in_range_values_through() {
        let params = DecimateParams::with_reduction(0.5).validated().unwrap();
        assert!((params.reduction - 0.5).abs() < 0.001);
    }

    #[test]
    fn validated_clamps_near_total_reduction() {
        let params = DecimateParams::with_reduction(0.99).validated().unwrap();
        assert!((params.reduction - MAX_REDUCTION).abs() < 0.001);
    }

    #[test]
    fn validated_rejects_out_of_range_fractions() {
        assert!(DecimateParams::with_reduction(1.0).validated().is_err());
        assert!(DecimateParams::with_reduction(-0.1).validated().is_err());
    }
}
