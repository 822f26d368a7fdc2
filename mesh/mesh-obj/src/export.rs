//! Combined OBJ + MTL export.

use std::path::{Path, PathBuf};

use mesh_material::Material;
use mesh_types::{IndexedMesh, MeshTopology};
use tracing::info;

use crate::error::ObjResult;
use crate::mtl::save_mtl;
use crate::obj::save_obj;

/// Paths written by [`export_mesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Path of the OBJ geometry file.
    pub geometry_path: PathBuf,
    /// Path of the MTL material file.
    pub material_path: PathBuf,
}

/// Export a mesh as a Wavefront OBJ + MTL file pair.
///
/// Writes `<prefix>.obj` and `<prefix>.mtl`, appending the extensions to
/// the prefix as given. The OBJ references the MTL by file name, so the
/// pair can be moved together to any directory.
///
/// The geometry file is written first. If the material file then fails,
/// the geometry file is left in place.
///
/// # Arguments
///
/// * `mesh` - The mesh to export
/// * `material` - Material applied to every face
/// * `prefix` - Output path without extension
///
/// # Errors
///
/// Returns [`ObjError::Io`](crate::ObjError::Io) if either file cannot be
/// created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_material::Material;
/// use mesh_obj::export_mesh;
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let paths = export_mesh(&mesh, &Material::default(), "output/model").unwrap();
/// println!("wrote {}", paths.geometry_path.display());
/// ```
pub fn export_mesh<P: AsRef<Path>>(
    mesh: &IndexedMesh,
    material: &Material,
    prefix: P,
) -> ObjResult<ExportPaths> {
    let prefix = prefix.as_ref();
    let geometry_path = append_extension(prefix, "obj");
    let material_path = append_extension(prefix, "mtl");

    save_obj(mesh, material, &geometry_path)?;
    save_mtl(material, &material_path)?;

    info!(
        "Exported {} triangles to {} with material {:?}",
        mesh.face_count(),
        geometry_path.display(),
        material.name
    );

    Ok(ExportPaths {
        geometry_path,
        material_path,
    })
}

/// Append an extension to a prefix without replacing any existing one.
fn append_extension(prefix: &Path, extension: &str) -> PathBuf {
    let mut os = prefix.as_os_str().to_os_string();
    os.push(".");
    os.push(extension);
    PathBuf::from(os)
}
