//! Vertices and their optional attributes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
///
/// This is the color unit of the pipeline: input files carry it per vertex,
/// and the exported material carries one as its diffuse color. Material
/// files store colors as normalized floats, so the type converts both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl VertexColor {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from normalized `[0, 1]` floats.
    ///
    /// Out-of-range inputs are clamped. Channels round to the nearest
    /// 8-bit value, which makes [`to_float`](Self::to_float) followed by
    /// `from_float` the identity; colors survive a write/read cycle
    /// through a material file unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let teal = VertexColor::from_float(0.0, 0.5, 0.5);
    /// assert_eq!(teal, VertexColor::new(0, 128, 128));
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn from_float(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Normalized `[0, 1]` floats for the three channels.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let (r, g, b) = VertexColor::new(255, 0, 51).to_float();
    /// assert!((r - 1.0).abs() < 1e-6);
    /// assert!(g.abs() < 1e-6);
    /// assert!((b - 0.2).abs() < 1e-6);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_float(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Solid black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Solid white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Solid red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Solid green.
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Solid blue.
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl Default for VertexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Optional per-vertex data.
///
/// The tube sweep attaches a radial normal to every ring vertex it emits;
/// colors arrive with the input or through visualization tooling. Both are
/// optional so plain positional data costs nothing extra to represent.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttributes {
    /// Unit normal.
    pub normal: Option<Vector3<f64>>,

    /// RGB color.
    pub color: Option<VertexColor>,
}

impl VertexAttributes {
    /// Attributes with nothing set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normal: None,
            color: None,
        }
    }

    /// Attributes carrying only a normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(normal: Vector3<f64>) -> Self {
        Self {
            normal: Some(normal),
            color: None,
        }
    }

    /// Attributes carrying only a color.
    #[inline]
    #[must_use]
    pub const fn with_color(color: VertexColor) -> Self {
        Self {
            normal: None,
            color: Some(color),
        }
    }

    /// Whether no attribute is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.color.is_none()
    }
}

/// A mesh vertex: a position plus optional attributes.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let a = Vertex::from_coords(0.5, -1.0, 2.0);
/// let b = Vertex::new(Point3::new(0.5, -1.0, 2.0));
/// assert_eq!(a.position, b.position);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in model space.
    pub position: Point3<f64>,

    /// Optional normal and color.
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a vertex at `position` with no attributes.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::empty(),
        }
    }

    /// Create an attribute-free vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex carrying a normal.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Vector3, Vertex};
    ///
    /// // A ring vertex: sits on the tube wall, normal points off the axis
    /// let v = Vertex::with_normal(Point3::new(0.1, 0.0, 3.0), Vector3::x());
    /// assert_eq!(v.normal(), Some(Vector3::x()));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::with_normal(normal),
        }
    }

    /// Create a vertex carrying a color.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Vertex, VertexColor};
    ///
    /// let v = Vertex::with_color(Point3::origin(), VertexColor::new(32, 64, 96));
    /// assert_eq!(v.color(), Some(VertexColor::new(32, 64, 96)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_color(position: Point3<f64>, color: VertexColor) -> Self {
        Self {
            position,
            attributes: VertexAttributes::with_color(color),
        }
    }

    /// The normal, if one is set.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Option<Vector3<f64>> {
        self.attributes.normal
    }

    /// The color, if one is set.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<VertexColor> {
        self.attributes.color
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_leaves_attributes_empty() {
        let v = Vertex::from_coords(4.0, 5.0, 6.0);
        assert_eq!(v.position, Point3::new(4.0, 5.0, 6.0));
        assert!(v.attributes.is_empty());
        assert!(v.normal().is_none());
        assert!(v.color().is_none());

        let converted = Vertex::from(Point3::new(4.0, 5.0, 6.0));
        assert_eq!(converted.position, v.position);
    }

    #[test]
    fn attribute_constructors_set_one_field() {
        let n = Vertex::with_normal(Point3::origin(), Vector3::y());
        assert_eq!(n.normal(), Some(Vector3::y()));
        assert!(n.color().is_none());

        let c = Vertex::with_color(Point3::origin(), VertexColor::BLUE);
        assert_eq!(c.color(), Some(VertexColor::BLUE));
        assert!(c.normal().is_none());
        assert!(!c.attributes.is_empty());
    }

    #[test]
    fn color_from_float_rounds_to_nearest() {
        let c = VertexColor::from_float(1.0, 0.5, 0.0);
        assert_eq!(c, VertexColor::new(255, 128, 0));
    }

    #[test]
    fn color_from_float_clamps() {
        let c = VertexColor::from_float(7.5, -0.5, 0.2);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 51);
    }

    #[test]
    fn color_float_round_trip_is_exact() {
        // Every 8-bit channel value survives a normalize/denormalize cycle.
        for v in [0_u8, 1, 63, 127, 128, 200, 254, 255] {
            let c = VertexColor::new(v, v, v);
            let (r, g, b) = c.to_float();
            assert_eq!(VertexColor::from_float(r, g, b), c);
        }
    }

    #[test]
    fn default_color_is_white() {
        assert_eq!(VertexColor::default(), VertexColor::WHITE);
        assert_eq!(VertexColor::WHITE.to_float(), (1.0, 1.0, 1.0));
    }
}
