//! Tube surface generation around polylines.
//!
//! Sweeps a regular polygon cross-section along polyline curves, emitting
//! one quad panel per (segment, side) pair. Tube ends are left open.

use mesh_types::{PolygonMesh, PolylineMesh, Vertex};
use nalgebra::Point3;
use tracing::debug;

use crate::error::{TubeError, TubeResult};
use crate::frame::parallel_transport_frames;

/// Minimum number of cross-section sides for a non-degenerate tube.
pub const MIN_SIDES: usize = 3;

/// Configuration for tube generation.
#[derive(Debug, Clone)]
pub struct TubeParams {
    /// Radius of the tube.
    pub radius: f64,
    /// Number of sides of the regular polygon cross-section.
    pub sides: usize,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            radius: 0.1,
            sides: 3,
        }
    }
}

impl TubeParams {
    /// Set the tube radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of cross-section sides.
    #[must_use]
    pub fn with_sides(mut self, sides: usize) -> Self {
        self.sides = sides;
        self
    }

    fn validate(&self) -> TubeResult<()> {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(TubeError::InvalidRadius(self.radius));
        }
        if self.sides < MIN_SIDES {
            return Err(TubeError::TooFewSides {
                min: MIN_SIDES,
                actual: self.sides,
            });
        }
        Ok(())
    }
}

/// Generate a tube surface around a single polyline curve.
///
/// One ring of `sides` vertices is placed at each curve point, oriented by
/// rotation-minimizing frames; consecutive rings are joined by quad panels
/// wound counter-clockwise when viewed from outside. The radial direction
/// is stored as each vertex normal. Ends are left open.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 points are provided
/// - Radius is not positive and finite
/// - Fewer than 3 sides are requested
/// - Consecutive points coincide
///
/// # Example
///
/// ```
/// use mesh_tube::{tube_from_polyline, TubeParams};
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 10.0),
/// ];
///
/// let params = TubeParams::default().with_radius(0.5).with_sides(8);
/// let mesh = tube_from_polyline(&points, &params).unwrap();
///
/// // 2 rings of 8 vertices, joined by 8 quads
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 8);
/// ```
pub fn tube_from_polyline(points: &[Point3<f64>], params: &TubeParams) -> TubeResult<PolygonMesh> {
    params.validate()?;

    if points.len() < 2 {
        return Err(TubeError::TooFewPoints {
            min: 2,
            actual: points.len(),
        });
    }

    let mut mesh = PolygonMesh::with_capacity(
        points.len() * params.sides,
        (points.len() - 1) * params.sides,
    );
    sweep_into(&mut mesh, points, 0, params)?;
    Ok(mesh)
}

/// Generate tube surfaces around every polyline cell of the input mesh.
///
/// Each cell with at least 2 points becomes one open-ended tube; cells
/// with fewer points carry no segments and are skipped. An input without
/// any line segments yields an empty mesh, not an error.
///
/// # Errors
///
/// Returns an error if:
/// - Radius is not positive and finite
/// - Fewer than 3 sides are requested
/// - A cell references a vertex index outside the mesh
/// - Consecutive points in a cell coincide
pub fn tubes_from_mesh(mesh: &PolylineMesh, params: &TubeParams) -> TubeResult<PolygonMesh> {
    params.validate()?;

    let mut out = PolygonMesh::with_capacity(
        mesh.vertex_count() * params.sides,
        mesh.segment_count() * params.sides,
    );

    for (cell_idx, cell) in mesh.polylines.iter().enumerate() {
        if cell.len() < 2 {
            debug!(polyline = cell_idx, points = cell.len(), "skipping polyline with no segments");
            continue;
        }

        let mut points = Vec::with_capacity(cell.len());
        for &index in cell {
            let point = mesh.vertices.get(index as usize).ok_or({
                TubeError::IndexOutOfBounds {
                    polyline: cell_idx,
                    index,
                    vertex_count: mesh.vertex_count(),
                }
            })?;
            points.push(*point);
        }

        sweep_into(&mut out, &points, cell_idx, params)?;
    }

    Ok(out)
}

/// Sweep one polyline into the output mesh.
///
/// Caller guarantees `points.len() >= 2` and validated parameters.
fn sweep_into(
    out: &mut PolygonMesh,
    points: &[Point3<f64>],
    cell_idx: usize,
    params: &TubeParams,
) -> TubeResult<()> {
    for (i, pair) in points.windows(2).enumerate() {
        if (pair[1] - pair[0]).norm() <= f64::EPSILON {
            return Err(TubeError::DegenerateSegment {
                polyline: cell_idx,
                segment: i,
            });
        }
    }

    let frames = parallel_transport_frames(points);
    let base = out.vertices.len() as u32;
    let n_rings = points.len();
    let n_sides = params.sides;

    for (ring_idx, (point, frame)) in points.iter().zip(frames.iter()).enumerate() {
        for side_idx in 0..n_sides {
            let angle = 2.0 * std::f64::consts::PI * (side_idx as f64) / (n_sides as f64);
            let cos_a = angle.cos();
            let sin_a = angle.sin();

            let offset =
                frame.normal * cos_a * params.radius + frame.binormal * sin_a * params.radius;
            let pos = Point3::from(point.coords + offset);

            // Normal points outward
            let normal = (frame.normal * cos_a + frame.binormal * sin_a)
                .try_normalize(f64::EPSILON)
                .unwrap_or(frame.normal);

            out.vertices.push(Vertex::with_normal(pos, normal));

            // Create quad panels (except for last ring)
            if ring_idx < n_rings - 1 {
                let curr = base + (ring_idx * n_sides + side_idx) as u32;
                let next_side = base + (ring_idx * n_sides + (side_idx + 1) % n_sides) as u32;
                let next_ring = base + ((ring_idx + 1) * n_sides + side_idx) as u32;
                let next_both = base + ((ring_idx + 1) * n_sides + (side_idx + 1) % n_sides) as u32;

                // CCW viewed from outside the tube
                out.faces.push(vec![curr, next_side, next_both, next_ring]);
            }
        }
    }

    Ok(())
}
