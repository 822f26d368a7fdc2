//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box over `f64` points.
///
/// The pipeline stages and their tests use it to reason about spatial
/// extents, e.g. that a swept tube stays within the inflated bounds of its
/// centerline.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let points = vec![
///     Point3::new(-1.0, 0.0, 2.0),
///     Point3::new(3.0, 4.0, 0.0),
/// ];
/// let aabb = Aabb::from_points(points.iter());
///
/// assert_eq!(aabb.min, Point3::new(-1.0, 0.0, 0.0));
/// assert_eq!(aabb.max, Point3::new(3.0, 4.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Corner with the smallest coordinate on every axis.
    pub min: Point3<f64>,
    /// Corner with the largest coordinate on every axis.
    pub max: Point3<f64>,
}

impl Aabb {
    /// The empty box: `min` at positive infinity, `max` at negative.
    ///
    /// Inverted corners make it the identity for
    /// [`expand_to_include`](Self::expand_to_include).
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Tightest box around the given points, empty for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Whether the box encloses no points at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Midpoint of the two corners.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Whether `point` lies inside the box, boundary included.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        *point == point.sup(&self.min) && *point == point.inf(&self.max)
    }

    /// Grow the box in place so it covers `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// The box grown by a uniform margin on every side.
    ///
    /// A negative margin shrinks it.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 4.0, 4.0)];
    /// let grown = Aabb::from_points(points.iter()).expanded(0.5);
    ///
    /// assert_eq!(grown.min, Point3::new(-0.5, -0.5, -0.5));
    /// assert_eq!(grown.max, Point3::new(4.5, 4.5, 4.5));
    /// ```
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let offset = Vector3::repeat(margin);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_box_encloses_nothing() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert!(!aabb.contains(&Point3::origin()));
        assert_eq!(Aabb::default(), aabb);
    }

    #[test]
    fn from_points_tracks_extremes_per_axis() {
        let points = [
            Point3::new(2.0, -1.0, 0.0),
            Point3::new(-3.0, 5.0, 1.0),
            Point3::new(0.0, 0.0, -2.0),
        ];
        let aabb = Aabb::from_points(points.iter());

        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Point3::new(-3.0, -1.0, -2.0));
        assert_eq!(aabb.max, Point3::new(2.0, 5.0, 1.0));
    }

    #[test]
    fn contains_includes_the_boundary() {
        let points = [Point3::origin(), Point3::new(1.0, 1.0, 1.0)];
        let aabb = Aabb::from_points(points.iter());

        assert!(aabb.contains(&Point3::origin()));
        assert!(aabb.contains(&Point3::new(0.5, 0.5, 1.0)));
        assert!(!aabb.contains(&Point3::new(1.1, 0.5, 0.5)));
        assert!(!aabb.contains(&Point3::new(0.5, -0.1, 0.5)));
    }

    #[test]
    fn expanded_grows_every_side() {
        let points = [Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0)];
        let grown = Aabb::from_points(points.iter()).expanded(1.0);

        assert!(grown.contains(&Point3::new(0.5, 0.5, 0.5)));
        assert!(grown.contains(&Point3::new(3.0, 3.0, 3.0)));
        assert_relative_eq!(grown.size().x, 3.0);
        assert_relative_eq!(grown.center().y, 1.5);
    }
}
