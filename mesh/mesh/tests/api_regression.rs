//! API Regression Tests for the Conversion Crate Family
//!
//! These tests serve as a regression suite to ensure the public API remains
//! stable and consistent across the conversion crates. They are organized in
//! tiers of increasing complexity:
//!
//! - Tier 1: Foundation (mesh-types primitives)
//! - Tier 2: Pipeline stages (tube, triangulate, decimate, material, obj)
//! - Tier 3: Full conversions through the orchestrator
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use mesh::{decimate, material, obj, prelude::*, tube, types};

// =============================================================================
// TIER 1: Foundation - Basic Types and Primitives
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn vertex_creation_and_access() {
        let v = types::Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);

        let colored = types::Vertex::with_color(
            types::Point3::new(0.0, 0.0, 0.0),
            types::VertexColor::new(255, 0, 0),
        );
        assert_eq!(colored.color(), Some(types::VertexColor::new(255, 0, 0)));
    }

    #[test]
    fn vertex_color_float_encoding() {
        let color = types::VertexColor::from_float(1.0, 0.5, 0.0);
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 128);
        assert_eq!(color.b, 0);
    }

    #[test]
    fn polyline_mesh_construction() {
        let centerline = PolylineMesh::from_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]);
        assert_eq!(centerline.vertex_count(), 3);
        assert_eq!(centerline.segment_count(), 2);
        assert!(centerline.output_prefix().is_none());

        let located = centerline.with_source("/data/curve.vtk");
        assert!(located.output_prefix().is_some());
    }

    #[test]
    fn polygon_mesh_fan_count() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let quad = PolygonMesh::from_parts(vertices, vec![vec![0, 1, 2, 3]]);
        assert_eq!(quad.face_count(), 1);
        assert_eq!(quad.fan_triangle_count(), 2);
    }

    #[test]
    fn indexed_mesh_topology() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
    }
}

// =============================================================================
// TIER 2: Pipeline Stages
// =============================================================================

mod tier2_stages {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn tube_sweep_counts() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0)];
        let params = tube::TubeParams::default().with_radius(0.5).with_sides(4);

        let surface = tube::tube_from_polyline(&points, &params).unwrap();
        assert_eq!(surface.vertex_count(), 8);
        assert_eq!(surface.face_count(), 4);
    }

    #[test]
    fn tube_rejects_invalid_params() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];

        let bad_radius = tube::TubeParams::default().with_radius(0.0);
        assert!(tube::tube_from_polyline(&points, &bad_radius).is_err());

        let bad_sides = tube::TubeParams::default().with_sides(2);
        assert!(tube::tube_from_polyline(&points, &bad_sides).is_err());
    }

    #[test]
    fn triangulation_splits_quads() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let quad = PolygonMesh::from_parts(vertices, vec![vec![0, 1, 2, 3]]);

        let triangles = triangulate(&quad).unwrap();
        assert_eq!(triangles.face_count(), 2);
        assert_eq!(triangles.vertex_count(), 4);
    }

    #[test]
    fn decimation_identity_and_rejection() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);

        let outcome = decimate_mesh(&mesh, &decimate::DecimateParams::with_reduction(0.0)).unwrap();
        assert_eq!(outcome.final_triangles, 1);
        assert!(!outcome.was_decimated());

        let rejected = decimate_mesh(&mesh, &decimate::DecimateParams::with_reduction(1.0));
        assert!(rejected.is_err());
    }

    #[test]
    fn seeded_materials_reproduce() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = material::random_material("surface", &mut rng);

        let mut rng = StdRng::seed_from_u64(7);
        let second = material::random_material("surface", &mut rng);

        assert_eq!(first.name, "surface");
        assert_eq!(first.diffuse, second.diffuse);
    }

    #[test]
    fn export_and_reload() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
        let dir = tempfile::tempdir().unwrap();

        let paths = export_mesh(&mesh, &Material::default(), dir.path().join("tri")).unwrap();
        assert!(paths.geometry_path.exists());
        assert!(paths.material_path.exists());

        let loaded = obj::load_obj(&paths.geometry_path).unwrap();
        assert_eq!(loaded.face_count(), 1);
    }
}

// =============================================================================
// TIER 3: Full Conversions
// =============================================================================

mod tier3_conversion {
    use super::*;

    fn centerline() -> PolylineMesh {
        PolylineMesh::from_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 2.0),
        ])
    }

    #[test]
    fn converter_produces_consistent_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = centerline();

        let report = Converter::new(&input)
            .radius(0.1)
            .sides(3)
            .seed(42)
            .run(dir.path().join("vessel"))
            .unwrap();

        assert_eq!(report.stats.segments, 2);
        assert_eq!(report.stats.triangles_before, 12);

        let written = obj::load_obj(&report.geometry_path).unwrap();
        assert_eq!(written.face_count(), report.stats.triangles_after);
    }

    #[test]
    fn convert_mesh_function_entry_point() {
        let dir = tempfile::tempdir().unwrap();
        let params = ConvertParams::default().with_seed(1);

        let report = convert_mesh(&centerline(), dir.path().join("fn_entry"), &params).unwrap();
        assert!(report.geometry_path.exists());
        assert!(report.material_path.exists());
    }

    #[test]
    fn at_source_conversion_requires_location() {
        let result = convert_mesh_at_source(&centerline(), &ConvertParams::default());
        assert!(matches!(
            result,
            Err(mesh::convert::ConvertError::MissingStorageLocation)
        ));
    }
}
