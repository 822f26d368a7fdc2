//! Core mesh decimation algorithm.
//!
//! Edge collapse driven by quadric error metrics (QEM).

// Mesh indices and counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use mesh_types::{IndexedMesh, Point3, Vertex};
use tracing::{debug, info};

use crate::error::DecimateResult;
use crate::outcome::DecimationOutcome;
use crate::params::DecimateParams;
use crate::quadric::Quadric;

/// An edge collapse candidate in the priority queue.
#[derive(Debug, Clone)]
struct EdgeCollapse {
    /// The two vertex indices forming the edge.
    v1: u32,
    v2: u32,
    /// The error cost of this collapse.
    cost: f64,
    /// The position the merged vertex moves to.
    target: Point3<f64>,
}

impl PartialEq for EdgeCollapse {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost).is_eq()
    }
}

impl Eq for EdgeCollapse {}

impl PartialOrd for EdgeCollapse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCollapse {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (smaller cost pops first)
        other.cost.total_cmp(&self.cost)
    }
}

/// Decimate a mesh by collapsing edges until the requested fraction of
/// triangles has been removed.
///
/// The target count is `ceil((1 - reduction) × input count)`; collapsing
/// stops as soon as the active face count reaches it. The exact final count
/// is best effort, since collapses that would break the surface are
/// rejected. A reduction of `0.0`, an empty mesh, or a mesh already at the
/// target all come back unchanged.
///
/// # Errors
///
/// Returns [`DecimateError::InvalidReduction`](crate::DecimateError) if
/// `params.reduction` lies outside `[0.0, 1.0)`; fractions above the cap
/// are clamped instead (see [`DecimateParams::validated`]).
///
/// # Example
///
/// ```
/// use mesh_decimate::{decimate_mesh, DecimateParams};
/// use mesh_types::IndexedMesh;
///
/// let outcome = decimate_mesh(&IndexedMesh::new(), &DecimateParams::default()).unwrap();
/// assert_eq!(outcome.final_triangles, 0);
/// assert!(!outcome.was_decimated());
/// ```
#[allow(clippy::too_many_lines)]
pub fn decimate_mesh(
    mesh: &IndexedMesh,
    params: &DecimateParams,
) -> DecimateResult<DecimationOutcome> {
    let params = params.clone().validated()?;

    let original_triangles = mesh.faces.len();
    let target = ((original_triangles as f64) * (1.0 - params.reduction)).ceil() as usize;

    // Nothing to do for empty input or a target at/above the input count
    if original_triangles <= target {
        return Ok(DecimationOutcome {
            mesh: mesh.clone(),
            original_triangles,
            final_triangles: original_triangles,
            collapses_performed: 0,
            collapses_rejected: 0,
        });
    }

    info!(
        original = original_triangles,
        target = target,
        "starting mesh decimation"
    );

    // Working copies; slots become None as vertices merge and faces degenerate
    let mut vertices: Vec<Option<Vertex>> = mesh.vertices.iter().cloned().map(Some).collect();
    let mut faces: Vec<Option<[u32; 3]>> = mesh.faces.iter().copied().map(Some).collect();
    let mut active_faces = original_triangles;

    let edge_to_faces = build_edge_to_faces(&mesh.faces);
    let boundary_edges = find_boundary_edges(&edge_to_faces);
    let mut quadrics = compute_vertex_quadrics(mesh);

    let mut heap = build_collapse_queue(mesh, &quadrics, &boundary_edges, &params);

    // Maps merged-away vertices to their survivors
    let mut vertex_remap: HashMap<u32, u32> = HashMap::new();

    let mut collapses_performed = 0;
    let mut collapses_rejected = 0;

    while active_faces > target {
        let Some(collapse) = heap.pop() else {
            break;
        };

        // Resolve stale indices through the remap chain
        let v1 = resolve_vertex(collapse.v1, &vertex_remap);
        let v2 = resolve_vertex(collapse.v2, &vertex_remap);

        if v1 == v2 || vertices[v1 as usize].is_none() || vertices[v2 as usize].is_none() {
            continue;
        }

        // Edges can become boundary edges as their surroundings collapse
        if params.preserve_boundary && boundary_edges.contains(&normalize_edge(v1, v2)) {
            collapses_rejected += 1;
            continue;
        }

        if !is_collapse_valid(&vertices, &faces, v1, v2) {
            collapses_rejected += 1;
            continue;
        }

        // Merge v2 into v1 at the collapse target
        if let Some(v) = &mut vertices[v1 as usize] {
            v.position = collapse.target;
        }

        let q2 = quadrics[v2 as usize];
        quadrics[v1 as usize].add(&q2);

        vertices[v2 as usize] = None;
        vertex_remap.insert(v2, v1);

        // Rewrite faces and drop the ones the collapse degenerated
        for face_slot in &mut faces {
            if let Some(face) = face_slot {
                for idx in face.iter_mut() {
                    *idx = resolve_vertex(*idx, &vertex_remap);
                }

                if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                    *face_slot = None;
                    active_faces -= 1;
                }
            }
        }

        collapses_performed += 1;

        requeue_vertex_edges(v1, &vertices, &faces, &quadrics, &boundary_edges, &params, &mut heap);
    }

    let final_mesh = compact_mesh(&vertices, &faces);

    info!(
        final_triangles = active_faces,
        collapses = collapses_performed,
        rejected = collapses_rejected,
        "decimation complete"
    );

    Ok(DecimationOutcome {
        mesh: final_mesh,
        original_triangles,
        final_triangles: active_faces,
        collapses_performed,
        collapses_rejected,
    })
}

const fn normalize_edge(v1: u32, v2: u32) -> (u32, u32) {
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

fn resolve_vertex(mut v: u32, remap: &HashMap<u32, u32>) -> u32 {
    while let Some(&merged) = remap.get(&v) {
        v = merged;
    }
    v
}

fn build_edge_to_faces(faces: &[[u32; 3]]) -> HashMap<(u32, u32), Vec<usize>> {
    let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> = HashMap::new();

    for (face_idx, face) in faces.iter().enumerate() {
        for i in 0..3 {
            let edge = normalize_edge(face[i], face[(i + 1) % 3]);
            edge_to_faces.entry(edge).or_default().push(face_idx);
        }
    }

    edge_to_faces
}

fn find_boundary_edges(edge_to_faces: &HashMap<(u32, u32), Vec<usize>>) -> HashSet<(u32, u32)> {
    edge_to_faces
        .iter()
        .filter(|(_, faces)| faces.len() == 1)
        .map(|(edge, _)| *edge)
        .collect()
}

fn compute_vertex_quadrics(mesh: &IndexedMesh) -> Vec<Quadric> {
    let mut quadrics = vec![Quadric::default(); mesh.vertices.len()];

    for face in &mesh.faces {
        let plane = Quadric::from_triangle(
            &mesh.vertices[face[0] as usize].position,
            &mesh.vertices[face[1] as usize].position,
            &mesh.vertices[face[2] as usize].position,
        );

        // Degenerate faces contribute nothing
        if let Some(plane) = plane {
            for &vi in face {
                quadrics[vi as usize].add(&plane);
            }
        }
    }

    quadrics
}

fn build_collapse_queue(
    mesh: &IndexedMesh,
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
) -> BinaryHeap<EdgeCollapse> {
    let mut heap = BinaryHeap::new();
    let mut seen_edges = HashSet::new();

    for face in &mesh.faces {
        for i in 0..3 {
            let v1 = face[i];
            let v2 = face[(i + 1) % 3];

            if !seen_edges.insert(normalize_edge(v1, v2)) {
                continue;
            }

            let p1 = &mesh.vertices[v1 as usize].position;
            let p2 = &mesh.vertices[v2 as usize].position;

            if let Some(collapse) =
                collapse_candidate(v1, v2, p1, p2, quadrics, boundary_edges, params)
            {
                heap.push(collapse);
            }
        }
    }

    heap
}

/// Cost and target position of collapsing the edge `(v1, v2)`.
///
/// Returns `None` for edges excluded from collapsing outright.
fn collapse_candidate(
    v1: u32,
    v2: u32,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
) -> Option<EdgeCollapse> {
    let edge = normalize_edge(v1, v2);

    if params.preserve_boundary && boundary_edges.contains(&edge) {
        return None;
    }

    let mut combined = quadrics[v1 as usize];
    combined.add(&quadrics[v2 as usize]);

    let target = combined
        .minimizer()
        .unwrap_or_else(|| nalgebra::center(p1, p2));

    let mut cost = combined.evaluate(&target);
    if boundary_edges.contains(&edge) {
        cost *= params.boundary_penalty;
    }

    Some(EdgeCollapse {
        v1,
        v2,
        cost,
        target,
    })
}

/// Link condition: collapsing is valid only if the edge's endpoints share
/// at most 2 other vertices (the apexes of the triangles on the edge).
fn is_collapse_valid(
    vertices: &[Option<Vertex>],
    faces: &[Option<[u32; 3]>],
    v1: u32,
    v2: u32,
) -> bool {
    let mut v1_neighbors: HashSet<u32> = HashSet::new();
    let mut v2_neighbors: HashSet<u32> = HashSet::new();

    for face in faces.iter().flatten() {
        let has_v1 = face.contains(&v1);
        let has_v2 = face.contains(&v2);

        for &vi in face {
            if vi == v1 || vi == v2 || vertices[vi as usize].is_none() {
                continue;
            }
            if has_v1 {
                v1_neighbors.insert(vi);
            }
            if has_v2 {
                v2_neighbors.insert(vi);
            }
        }
    }

    v1_neighbors.intersection(&v2_neighbors).count() <= 2
}

fn requeue_vertex_edges(
    v1: u32,
    vertices: &[Option<Vertex>],
    faces: &[Option<[u32; 3]>],
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
    heap: &mut BinaryHeap<EdgeCollapse>,
) {
    let Some(v1_vertex) = &vertices[v1 as usize] else {
        return;
    };

    let mut neighbors: HashSet<u32> = HashSet::new();
    for face in faces.iter().flatten() {
        if face.contains(&v1) {
            for &vi in face {
                if vi != v1 && vertices[vi as usize].is_some() {
                    neighbors.insert(vi);
                }
            }
        }
    }

    for &v2 in &neighbors {
        let Some(v2_vertex) = &vertices[v2 as usize] else {
            continue;
        };

        if let Some(collapse) = collapse_candidate(
            v1,
            v2,
            &v1_vertex.position,
            &v2_vertex.position,
            quadrics,
            boundary_edges,
            params,
        ) {
            heap.push(collapse);
        }
    }
}

/// Drop the merged-away vertex slots and renumber the surviving faces.
fn compact_mesh(vertices: &[Option<Vertex>], faces: &[Option<[u32; 3]>]) -> IndexedMesh {
    let mut vertex_remap: HashMap<u32, u32> = HashMap::new();
    let mut new_vertices = Vec::new();

    for (old_idx, vertex_slot) in vertices.iter().enumerate() {
        if let Some(vertex) = vertex_slot {
            vertex_remap.insert(old_idx as u32, new_vertices.len() as u32);
            new_vertices.push(vertex.clone());
        }
    }

    let mut new_faces = Vec::new();
    for face in faces.iter().flatten() {
        if let (Some(&i0), Some(&i1), Some(&i2)) = (
            vertex_remap.get(&face[0]),
            vertex_remap.get(&face[1]),
            vertex_remap.get(&face[2]),
        ) {
            new_faces.push([i0, i1, i2]);
        }
    }

    debug!(
        vertices = new_vertices.len(),
        faces = new_faces.len(),
        "compacted decimated mesh"
    );

    IndexedMesh::from_parts(new_vertices, new_faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecimateError;

    /// Closed octahedron: 6 vertices, 8 faces, no boundary edges.
    fn octahedron() -> IndexedMesh {
        let vertices = vec![
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(-1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(0.0, -1.0, 0.0),
            Vertex::from_coords(0.0, 0.0, 1.0),
            Vertex::from_coords(0.0, 0.0, -1.0),
        ];
        let faces = vec![
            [0, 2, 4],
            [2, 1, 4],
            [1, 3, 4],
            [3, 0, 4],
            [2, 0, 5],
            [1, 2, 5],
            [3, 1, 5],
            [0, 3, 5],
        ];
        IndexedMesh::from_parts(vertices, faces)
    }

    /// Flat strip of two quads: 6 vertices, 4 faces, boundary all around.
    fn flat_strip() -> IndexedMesh {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(2.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(2.0, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 4], [0, 4, 3], [1, 2, 5], [1, 5, 4]];
        IndexedMesh::from_parts(vertices, faces)
    }

    #[test]
    fn decimate_empty_mesh() {
        let outcome =
            decimate_mesh(&IndexedMesh::new(), &DecimateParams::default()).expect("decimate");

        assert_eq!(outcome.original_triangles, 0);
        assert_eq!(outcome.final_triangles, 0);
        assert!(!outcome.was_decimated());
    }

    #[test]
    fn zero_reduction_is_identity() {
        let mesh = octahedron();
        let outcome = decimate_mesh(&mesh, &DecimateParams::with_reduction(0.0)).expect("decimate");

        assert_eq!(outcome.final_triangles, 8);
        assert_eq!(outcome.mesh.faces.len(), 8);
        assert!(!outcome.was_decimated());
    }

    #[test]
    fn decimate_octahedron() {
        let outcome =
            decimate_mesh(&octahedron(), &DecimateParams::with_reduction(0.3)).expect("decimate");

        // target = ceil(8 * 0.7) = 6
        assert!(outcome.final_triangles <= 6);
        assert!(outcome.was_decimated());
        assert_eq!(outcome.mesh.faces.len(), outcome.final_triangles);
    }

    #[test]
    fn decimate_respects_target_bound() {
        for reduction in [0.1, 0.25, 0.5, 0.75] {
            let outcome = decimate_mesh(&octahedron(), &DecimateParams::with_reduction(reduction))
                .expect("decimate");

            let target = (8.0 * (1.0 - reduction)).ceil() as usize;
            assert!(
                outcome.final_triangles <= target,
                "reduction {reduction}: {} > {target}",
                outcome.final_triangles
            );
        }
    }

    #[test]
    fn rejects_out_of_range_reduction() {
        let mesh = octahedron();

        for bad in [-0.1, 1.0, 1.5, f64::NAN] {
            let result = decimate_mesh(&mesh, &DecimateParams::with_reduction(bad));
            assert!(matches!(result, Err(DecimateError::InvalidReduction(_))));
        }
    }

    #[test]
    fn clamps_extreme_reduction() {
        let outcome =
            decimate_mesh(&octahedron(), &DecimateParams::with_reduction(0.99)).expect("decimate");

        // Clamped to 0.95, so the target is ceil(8 * 0.05) = 1, best effort
        assert!(outcome.final_triangles < 8);
        assert!(outcome.was_decimated());
    }

    #[test]
    fn preserved_boundary_strip_collapses_interior_edge() {
        let outcome =
            decimate_mesh(&flat_strip(), &DecimateParams::with_reduction(0.5)).expect("decimate");

        // Only the three interior edges are candidates; one collapse
        // removes exactly two faces, reaching the target of 2
        assert_eq!(outcome.final_triangles, 2);
        assert_eq!(outcome.collapses_performed, 1);
    }

    #[test]
    fn compaction_renumbers_faces() {
        let outcome =
            decimate_mesh(&octahedron(), &DecimateParams::with_reduction(0.3)).expect("decimate");

        let vertex_count = outcome.mesh.vertices.len() as u32;
        for face in &outcome.mesh.faces {
            for &idx in face {
                assert!(idx < vertex_count);
            }
        }
    }

    #[test]
    fn normalize_edge_orders_endpoints() {
        assert_eq!(normalize_edge(5, 3), (3, 5));
        assert_eq!(normalize_edge(3, 5), (3, 5));
        assert_eq!(normalize_edge(1, 1), (1, 1));
    }
}
