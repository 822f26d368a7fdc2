//! Benchmarks for mesh-convert operations.
//!
//! Run with: cargo bench -p mesh-convert
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-convert -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-convert -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_convert::{ConvertParams, convert_mesh};
use mesh_types::{Point3, PolylineMesh};
use tempfile::tempdir;

// =============================================================================
// Test Curve Generation
// =============================================================================

/// Create a helical centerline with the given number of points.
fn create_helix(points: usize) -> PolylineMesh {
    let centerline: Vec<Point3<f64>> = (0..points)
        .map(|i| {
            let t = i as f64 * 0.2;
            Point3::new(t.cos(), t.sin(), 0.1 * t)
        })
        .collect();

    PolylineMesh::from_points(centerline)
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conversion");
    group.sample_size(20); // Full conversions are slower, reduce samples

    let test_cases = [
        ("helix_100pt", create_helix(100)),
        ("helix_1000pt", create_helix(1000)),
        ("helix_5000pt", create_helix(5000)),
    ];

    let temp_dir = tempdir().expect("failed to create temp dir");

    for (name, curve) in &test_cases {
        group.throughput(Throughput::Elements(curve.segment_count() as u64));

        let prefix = temp_dir.path().join(name);
        let params = ConvertParams::default().with_sides(6).with_seed(0);

        group.bench_with_input(BenchmarkId::new("convert", name), curve, |b, curve| {
            b.iter(|| convert_mesh(black_box(curve), black_box(&prefix), black_box(&params)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
