//! Wavefront OBJ geometry writing and parsing.
//!
//! The writer emits one `v` line per vertex and one `f` line per triangle,
//! plus a `mtllib` reference to a sibling `.mtl` file with the same stem, so
//! the geometry and its material travel as a pair. The parser accepts plain
//! `v`/`f` statements with optional `/`-separated attribute references and
//! fan-splits any n-gon faces into triangles.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_material::Material;
use mesh_types::{IndexedMesh, MeshTopology, Vertex};
use tracing::info;

use crate::error::{ObjError, ObjResult};

/// Save a mesh to a Wavefront OBJ file.
///
/// The file starts with a comment header, references the sibling material
/// file via `mtllib <stem>.mtl`, then lists vertex positions with six
/// decimal places and faces with 1-based indices. All faces use `material`
/// through a single `usemtl` statement.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `material` - Material applied to every face
/// * `path` - Output file path, conventionally ending in `.obj`
///
/// # Errors
///
/// Returns [`ObjError::Io`] if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_material::Material;
/// use mesh_obj::save_obj;
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// save_obj(&mesh, &Material::default(), "triangle.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, material: &Material, path: P) -> ObjResult<()> {
    let path = path.as_ref();
    info!("Saving mesh to {} (OBJ format)", path.display());

    let mtl_file = path.with_extension("mtl");
    let mtl_name = mtl_file.file_name().and_then(|n| n.to_str());

    let file = File::create(path).map_err(|e| ObjError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, mesh, material, mtl_name).map_err(|e| ObjError::io(path, e))?;
    writer.flush().map_err(|e| ObjError::io(path, e))?;

    info!(
        "Saved {} vertices and {} faces to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        path.display()
    );
    Ok(())
}

/// Write OBJ content to a writer.
fn write_obj<W: Write>(
    writer: &mut W,
    mesh: &IndexedMesh,
    material: &Material,
    mtl_name: Option<&str>,
) -> std::io::Result<()> {
    writeln!(writer, "# Wavefront OBJ generated by mesh-obj")?;
    writeln!(writer, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(writer, "# Faces: {}", mesh.face_count())?;
    if let Some(name) = mtl_name {
        writeln!(writer, "mtllib {name}")?;
    }
    writeln!(writer)?;

    for vertex in &mesh.vertices {
        let p = &vertex.position;
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    writeln!(writer)?;

    // OBJ face indices are 1-based
    writeln!(writer, "usemtl {}", material.name)?;
    for &[i0, i1, i2] in &mesh.faces {
        writeln!(writer, "f {} {} {}", i0 + 1, i1 + 1, i2 + 1)?;
    }

    Ok(())
}

/// Load a mesh from a Wavefront OBJ file.
///
/// Only `v` and `f` statements contribute geometry; `mtllib`, `usemtl`,
/// normals, texture coordinates, groups and comments are ignored. Faces may
/// reference attributes with the `i/t/n` syntax (everything after the first
/// `/` is dropped) and n-gon faces are fan-split into triangles.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A `v` or `f` statement is malformed
/// - A face references a vertex that does not exist
///
/// # Example
///
/// ```no_run
/// use mesh_obj::load_obj;
/// use mesh_types::MeshTopology;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("Loaded {} triangles", mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<IndexedMesh> {
    let path = path.as_ref();
    info!("Loading mesh from {} (OBJ format)", path.display());

    let text = std::fs::read_to_string(path).map_err(|e| ObjError::open(path, e))?;
    let mesh = parse_obj(&text)?;

    info!(
        "Loaded {} vertices and {} faces from {}",
        mesh.vertex_count(),
        mesh.face_count(),
        path.display()
    );
    Ok(mesh)
}

/// Parse OBJ text into a mesh.
fn parse_obj(text: &str) -> ObjResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "v" => {
                if parts.len() < 4 {
                    return Err(ObjError::invalid_content(format!(
                        "line {line_no}: vertex has {} coordinates, expected 3",
                        parts.len() - 1
                    )));
                }
                let x = parse_coordinate(parts[1], line_no)?;
                let y = parse_coordinate(parts[2], line_no)?;
                let z = parse_coordinate(parts[3], line_no)?;
                mesh.vertices.push(Vertex::from_coords(x, y, z));
            }
            "f" => {
                if parts.len() < 4 {
                    return Err(ObjError::invalid_content(format!(
                        "line {line_no}: face has {} indices, expected at least 3",
                        parts.len() - 1
                    )));
                }
                let indices = parts[1..]
                    .iter()
                    .map(|token| parse_face_index(token, mesh.vertices.len(), line_no))
                    .collect::<ObjResult<Vec<u32>>>()?;

                // Fan-split n-gons into triangles
                for i in 1..indices.len() - 1 {
                    mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
                }
            }
            _ => {
                // mtllib, usemtl, vn, vt, groups and anything else are ignored
            }
        }
    }

    Ok(mesh)
}

/// Parse one coordinate of a `v` statement.
fn parse_coordinate(token: &str, line_no: usize) -> ObjResult<f64> {
    token.parse().map_err(|_| {
        ObjError::invalid_content(format!("line {line_no}: invalid coordinate {token:?}"))
    })
}

/// Parse one index of an `f` statement, dropping any `/`-separated
/// texture or normal references.
fn parse_face_index(token: &str, vertex_count: usize, line_no: usize) -> ObjResult<u32> {
    let index_token = token.split('/').next().unwrap_or(token);
    let index: usize = index_token.parse().map_err(|_| {
        ObjError::invalid_content(format!("line {line_no}: invalid face index {token:?}"))
    })?;

    if index == 0 {
        return Err(ObjError::invalid_content(format!(
            "line {line_no}: face indices are 1-based"
        )));
    }
    if index > vertex_count {
        return Err(ObjError::invalid_content(format!(
            "line {line_no}: face index {index} out of range (mesh has {vertex_count} vertices)"
        )));
    }

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    Ok((index - 1) as u32)
}
