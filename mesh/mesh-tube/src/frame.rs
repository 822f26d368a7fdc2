//! Moving frame computation for curve sweeping.
//!
//! Provides rotation-minimizing frames along polylines so swept
//! cross-sections keep a consistent orientation without twisting.

use nalgebra::{Point3, UnitVector3, Vector3};

/// A reference frame at a point on a curve.
///
/// Consists of three orthonormal vectors: tangent, normal, and binormal.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Tangent direction (forward along curve).
    pub tangent: Vector3<f64>,
    /// Normal direction (perpendicular to tangent).
    pub normal: Vector3<f64>,
    /// Binormal direction (perpendicular to both tangent and normal).
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Create an initial frame from a tangent vector.
    ///
    /// Computes a perpendicular normal and binormal.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());

        let normal = find_perpendicular(tangent);
        let binormal = tangent.cross(&normal);

        Self {
            tangent,
            normal,
            binormal,
        }
    }
}

/// Find a unit vector perpendicular to the given vector.
fn find_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    // Cross against the axis v is least aligned with
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    let axis = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&axis)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}

/// Compute parallel transport frames along a curve.
///
/// Uses rotation minimizing frames to avoid twisting. Interior tangents
/// average the incoming and outgoing segment directions.
///
/// Returns one frame per point; an empty vector when the curve has fewer
/// than 2 points.
///
/// # Example
///
/// ```
/// use mesh_tube::parallel_transport_frames;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ];
///
/// let frames = parallel_transport_frames(&points);
/// assert_eq!(frames.len(), 3);
/// ```
#[must_use]
pub fn parallel_transport_frames(points: &[Point3<f64>]) -> Vec<Frame> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut frames = Vec::with_capacity(points.len());

    let first_tangent = (points[1] - points[0])
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::z());
    frames.push(Frame::from_tangent(first_tangent));

    for i in 1..points.len() {
        let prev_frame = frames[i - 1];

        let tangent = if i < points.len() - 1 {
            // Average of incoming and outgoing directions
            let prev_dir = points[i] - points[i - 1];
            let next_dir = points[i + 1] - points[i];
            (prev_dir + next_dir)
                .try_normalize(f64::EPSILON)
                .unwrap_or(prev_frame.tangent)
        } else {
            (points[i] - points[i - 1])
                .try_normalize(f64::EPSILON)
                .unwrap_or(prev_frame.tangent)
        };

        frames.push(transport_frame(&prev_frame, tangent));
    }

    frames
}

/// Transport a frame onto a new tangent direction.
///
/// Rotates the normal and binormal by the minimal rotation that maps the
/// old tangent onto the new one.
fn transport_frame(prev_frame: &Frame, new_tangent: Vector3<f64>) -> Frame {
    let new_tangent = new_tangent
        .try_normalize(f64::EPSILON)
        .unwrap_or(prev_frame.tangent);

    let axis = prev_frame.tangent.cross(&new_tangent);
    let axis_len = axis.norm();

    if axis_len < f64::EPSILON {
        // Tangents are parallel
        if prev_frame.tangent.dot(&new_tangent) > 0.0 {
            Frame {
                tangent: new_tangent,
                normal: prev_frame.normal,
                binormal: prev_frame.binormal,
            }
        } else {
            Frame {
                tangent: new_tangent,
                normal: -prev_frame.normal,
                binormal: -prev_frame.binormal,
            }
        }
    } else {
        let axis = UnitVector3::new_normalize(axis);
        let dot = prev_frame.tangent.dot(&new_tangent).clamp(-1.0, 1.0);
        let angle = dot.acos();

        // Rodrigues rotation formula
        let rotate = |v: Vector3<f64>| {
            let k = axis.into_inner();
            let cos_a = angle.cos();
            let sin_a = angle.sin();
            v * cos_a + k.cross(&v) * sin_a + k * (k.dot(&v)) * (1.0 - cos_a)
        };

        Frame {
            tangent: new_tangent,
            normal: rotate(prev_frame.normal),
            binormal: rotate(prev_frame.binormal),
        }
    }
}
