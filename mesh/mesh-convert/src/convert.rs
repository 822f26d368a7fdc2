//! The conversion pipeline.
//!
//! Runs the fixed stage sequence over a polyline mesh: tube sweep,
//! triangulation, decimation, material assignment, OBJ/MTL export. The
//! pipeline is fail-fast; the first stage error aborts the run and no
//! written files are cleaned up.

use std::path::Path;

use mesh_decimate::{decimate_mesh, DecimateParams};
use mesh_material::random_material;
use mesh_obj::export_mesh;
use mesh_triangulate::triangulate;
use mesh_tube::{tubes_from_mesh, TubeParams};
use mesh_types::{MeshTopology, PolylineMesh};
use rand::prelude::*;
use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult};
use crate::params::ConvertParams;
use crate::report::{ConversionReport, ConversionStats};

/// Name given to the exported surface material.
const MATERIAL_NAME: &str = "surface";

/// Convert a polyline mesh into a decimated tube surface on disk.
///
/// Runs the conversion stages in order and writes `<prefix>.obj` and
/// `<prefix>.mtl`. Stage parameters come from `params`; parameter errors
/// surface before any geometry is built. An input with zero line segments
/// converts to an empty (but valid) file pair.
///
/// # Arguments
///
/// * `mesh` - The polyline mesh to convert
/// * `prefix` - Output path without extension
/// * `params` - Conversion parameters
///
/// # Errors
///
/// Returns the first failing stage's error:
///
/// - [`ConvertError::Tube`] for invalid tube parameters or broken polylines
/// - [`ConvertError::Triangulate`] for malformed tube faces
/// - [`ConvertError::Decimate`] for a reduction fraction outside `[0.0, 1.0)`
/// - [`ConvertError::Export`] for I/O failures
///
/// # Example
///
/// ```no_run
/// use mesh_convert::{convert_mesh, ConvertParams};
/// use mesh_types::{Point3, PolylineMesh};
///
/// let mesh = PolylineMesh::from_points(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 2.0),
/// ]);
///
/// let report = convert_mesh(&mesh, "output/vessel", &ConvertParams::default()).unwrap();
/// println!("{}", report.stats);
/// ```
pub fn convert_mesh<P: AsRef<Path>>(
    mesh: &PolylineMesh,
    prefix: P,
    params: &ConvertParams,
) -> ConvertResult<ConversionReport> {
    let prefix = prefix.as_ref();
    info!(
        "Converting {} segments to {} (radius={}, sides={}, reduction={})",
        mesh.segment_count(),
        prefix.display(),
        params.radius,
        params.sides,
        params.reduction
    );

    // Parameter errors must surface before any geometry work
    let decimate_params = DecimateParams::with_reduction(params.reduction).validated()?;

    let tube_params = TubeParams::default()
        .with_radius(params.radius)
        .with_sides(params.sides);
    let tubes = tubes_from_mesh(mesh, &tube_params)?;
    debug!(
        "Tube sweep produced {} vertices, {} quad faces",
        tubes.vertex_count(),
        tubes.face_count()
    );

    let triangulated = triangulate(&tubes)?;
    debug!("Triangulated into {} triangles", triangulated.face_count());

    let outcome = decimate_mesh(&triangulated, &decimate_params)?;
    debug!("{outcome}");

    let mut rng: Box<dyn RngCore> = if let Some(seed) = params.seed {
        Box::new(StdRng::seed_from_u64(seed))
    } else {
        Box::new(thread_rng())
    };
    let material = random_material(MATERIAL_NAME, &mut rng);

    let paths = export_mesh(&outcome.mesh, &material, prefix)?;

    let stats = ConversionStats {
        segments: mesh.segment_count(),
        tube_vertices: tubes.vertex_count(),
        tube_faces: tubes.face_count(),
        triangles_before: outcome.original_triangles,
        triangles_after: outcome.final_triangles,
    };
    info!(
        "Conversion complete: wrote {} and {} ({stats})",
        paths.geometry_path.display(),
        paths.material_path.display()
    );

    Ok(ConversionReport {
        geometry_path: paths.geometry_path,
        material_path: paths.material_path,
        material,
        stats,
    })
}

/// Convert a polyline mesh next to its storage location.
///
/// Derives the output prefix from the mesh's `source` by stripping its
/// extension, so the OBJ/MTL pair lands in the same directory as the file
/// the input was loaded from.
///
/// # Errors
///
/// Returns [`ConvertError::MissingStorageLocation`] when the mesh has no
/// `source`, otherwise as [`convert_mesh`].
pub fn convert_mesh_at_source(
    mesh: &PolylineMesh,
    params: &ConvertParams,
) -> ConvertResult<ConversionReport> {
    let prefix = mesh
        .output_prefix()
        .ok_or(ConvertError::MissingStorageLocation)?;
    convert_mesh(mesh, prefix, params)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_types::Point3;

    fn bent_polyline() -> PolylineMesh {
        PolylineMesh::from_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 2.0),
        ])
    }

    #[test]
    fn convert_writes_file_pair() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("vessel");

        let report = convert_mesh(&bent_polyline(), &prefix, &ConvertParams::default()).unwrap();

        assert_eq!(report.geometry_path, dir.path().join("vessel.obj"));
        assert_eq!(report.material_path, dir.path().join("vessel.mtl"));
        assert!(report.geometry_path.exists());
        assert!(report.material_path.exists());
        assert_eq!(report.material.name, "surface");
    }

    #[test]
    fn convert_collects_stage_stats() {
        let dir = tempfile::tempdir().unwrap();
        let params = ConvertParams::default().with_reduction(0.0);

        let report = convert_mesh(&bent_polyline(), dir.path().join("stats"), &params).unwrap();

        // 2 segments of a 3-sided tube: 3 rings of 3 vertices, 6 quads
        assert_eq!(report.stats.segments, 2);
        assert_eq!(report.stats.tube_vertices, 9);
        assert_eq!(report.stats.tube_faces, 6);
        assert_eq!(report.stats.triangles_before, 12);
        assert_eq!(report.stats.triangles_after, 12);
    }

    #[test]
    fn convert_at_source_derives_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("centerline.vtk");

        let mut mesh = bent_polyline();
        mesh.source = Some(source);

        let report = convert_mesh_at_source(&mesh, &ConvertParams::default()).unwrap();
        assert_eq!(report.geometry_path, dir.path().join("centerline.obj"));
        assert_eq!(report.material_path, dir.path().join("centerline.mtl"));
    }

    #[test]
    fn convert_at_source_requires_source() {
        let result = convert_mesh_at_source(&bent_polyline(), &ConvertParams::default());
        assert!(matches!(result, Err(ConvertError::MissingStorageLocation)));
    }

    #[test]
    fn invalid_sides_fails_before_any_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("rejected");
        let params = ConvertParams::default().with_sides(2);

        let result = convert_mesh(&bent_polyline(), &prefix, &params);

        assert!(matches!(result, Err(ConvertError::Tube(_))));
        assert!(!dir.path().join("rejected.obj").exists());
        assert!(!dir.path().join("rejected.mtl").exists());
    }

    #[test]
    fn invalid_reduction_fails_before_any_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("rejected");
        let params = ConvertParams::default().with_reduction(1.5);

        let result = convert_mesh(&bent_polyline(), &prefix, &params);

        assert!(matches!(result, Err(ConvertError::Decimate(_))));
        assert!(!dir.path().join("rejected.obj").exists());
    }

    #[test]
    fn unwritable_prefix_surfaces_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("no_such_dir").join("vessel");

        let result = convert_mesh(&bent_polyline(), &prefix, &ConvertParams::default());
        assert!(matches!(result, Err(ConvertError::Export(_))));
    }

    #[test]
    fn empty_input_converts_to_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("empty");

        let report =
            convert_mesh(&PolylineMesh::new(), &prefix, &ConvertParams::default()).unwrap();

        assert_eq!(report.stats.segments, 0);
        assert_eq!(report.stats.triangles_after, 0);
        assert!(report.geometry_path.exists());

        let text = std::fs::read_to_string(&report.geometry_path).unwrap();
        assert!(!text.contains("\nv "));
        assert!(!text.contains("\nf "));
    }
}
