//! Concrete triangle geometry.
//!
//! [`Triangle`] carries three positions rather than indices. Indexed meshes
//! materialize one on demand (via [`MeshTopology`](crate::MeshTopology))
//! whenever a caller needs per-face geometry such as the area or the facet
//! normal.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Squared-length floor below which a cross product counts as zero.
const DEGENERATE_NORMAL_EPS: f64 = 1e-12;

/// A triangle given by its corner positions.
///
/// Corners are ordered counter-clockwise when the triangle is viewed from
/// its front side, so the facet normal follows the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert!((tri.area() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First corner.
    pub v0: Point3<f64>,
    /// Second corner.
    pub v1: Point3<f64>,
    /// Third corner.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three corner positions.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// Points along the facet normal with length twice the area.
    #[inline]
    fn edge_cross(&self) -> Vector3<f64> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Compute the unit facet normal.
    ///
    /// Returns `None` when the corners are collinear or coincident and no
    /// plane is defined.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 1.0),
    ///     Point3::new(1.0, 0.0, 1.0),
    ///     Point3::new(0.0, 1.0, 1.0),
    /// );
    ///
    /// let n = tri.normal().unwrap();
    /// assert!((n.z - 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        self.edge_cross().try_normalize(DEGENERATE_NORMAL_EPS)
    }

    /// Compute the triangle's area.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Triangle};
    ///
    /// // Right triangle with legs 6 and 8
    /// let tri = Triangle::new(
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(7.0, 1.0, 0.0),
    ///     Point3::new(1.0, 9.0, 0.0),
    /// );
    /// assert!((tri.area() - 24.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.edge_cross().norm()
    }

    /// Check whether the area falls below `epsilon`.
    ///
    /// Degenerate triangles show up when a collapse or a malformed input
    /// flattens a face; they carry no usable normal.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.area() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_follows_winding() {
        let ccw = Triangle::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 5.0),
            Point3::new(0.0, 1.0, 5.0),
        );
        let flipped = Triangle::new(ccw.v0, ccw.v2, ccw.v1);

        let up = ccw.normal().map_or(0.0, |n| n.z);
        let down = flipped.normal().map_or(0.0, |n| n.z);
        assert_relative_eq!(up, 1.0, epsilon = 1e-10);
        assert_relative_eq!(down, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn area_scales_with_the_legs() {
        let unit = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let doubled = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );

        assert_relative_eq!(unit.area(), 0.5, epsilon = 1e-10);
        assert_relative_eq!(doubled.area(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn collinear_corners_have_no_normal() {
        let flat = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 3.0, 3.0),
        );

        assert!(flat.normal().is_none());
        assert!(flat.is_degenerate(1e-12));
        assert!(!flat.is_degenerate(0.0));
    }
}
