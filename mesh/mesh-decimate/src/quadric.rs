//! Quadric error metric.
//!
//! A quadric measures the sum of squared distances from a point to a set of
//! planes. Each vertex accumulates the planes of its incident faces; the
//! error of moving the vertex is the quadric evaluated at the new position.

use nalgebra::{Matrix3, Point3, Vector3};

/// Quadric error matrix (symmetric 4x4, stored as its upper triangle).
///
/// For a plane `p = (a, b, c, d)` with unit normal `(a, b, c)` the matrix is
/// `p pᵀ`; quadrics of several planes add component-wise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quadric {
    // Upper triangle:
    // [a b c d]
    // [  e f g]
    // [    h i]
    // [      j]
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
    i: f64,
    j: f64,
}

impl Quadric {
    /// Create a quadric from a plane with unit normal `normal` and offset `d`
    /// (`normal · x + d = 0`).
    #[must_use]
    pub fn from_plane(normal: &Vector3<f64>, d: f64) -> Self {
        let (nx, ny, nz) = (normal.x, normal.y, normal.z);
        Self {
            a: nx * nx,
            b: nx * ny,
            c: nx * nz,
            d: nx * d,
            e: ny * ny,
            f: ny * nz,
            g: ny * d,
            h: nz * nz,
            i: nz * d,
            j: d * d,
        }
    }

    /// Create the plane quadric of a triangle, or `None` if it is degenerate.
    #[must_use]
    pub fn from_triangle(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> Option<Self> {
        let normal = (v1 - v0).cross(&(v2 - v0)).try_normalize(1e-10)?;
        let d = -normal.dot(&v0.coords);
        Some(Self::from_plane(&normal, d))
    }

    /// Add another quadric to this one.
    pub fn add(&mut self, other: &Self) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
        self.d += other.d;
        self.e += other.e;
        self.f += other.f;
        self.g += other.g;
        self.h += other.h;
        self.i += other.i;
        self.j += other.j;
    }

    /// Evaluate the quadric error at a point.
    ///
    /// Returns the sum of squared distances from the point to all planes
    /// that contributed to this quadric.
    #[must_use]
    pub fn evaluate(&self, point: &Point3<f64>) -> f64 {
        // vᵀ Q v with v = [x, y, z, 1]
        let (x, y, z) = (point.x, point.y, point.z);
        x * (self.a * x + 2.0 * (self.b * y + self.c * z + self.d))
            + y * (self.e * y + 2.0 * (self.f * z + self.g))
            + z * (self.h * z + 2.0 * self.i)
            + self.j
    }

    /// Find the point minimizing the error, or `None` if the system is
    /// singular (coplanar contributing planes).
    #[must_use]
    pub fn minimizer(&self) -> Option<Point3<f64>> {
        let m = Matrix3::new(
            self.a, self.b, self.c, //
            self.b, self.e, self.f, //
            self.c, self.f, self.h,
        );

        if m.determinant().abs() < 1e-10 {
            return None;
        }

        let inverse = m.try_inverse()?;
        let rhs = Vector3::new(-self.d, -self.g, -self.i);
        Some(Point3::from(inverse * rhs))
    }
}
