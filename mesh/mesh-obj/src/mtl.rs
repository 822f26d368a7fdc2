//! Wavefront MTL material writing and parsing.
//!
//! A material library holds one `newmtl` block per material with ambient
//! (`Ka`), diffuse (`Kd`) and specular (`Ks`) colors, a shininess exponent
//! (`Ns`) and an opacity (`d`). Colors are written in `[0, 1]` floats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_material::Material;
use mesh_types::VertexColor;
use tracing::info;

use crate::error::{ObjError, ObjResult};

/// Save a material to a Wavefront MTL file.
///
/// Writes a single `newmtl` block. The diffuse color is the material's
/// 8-bit color scaled to `[0, 1]`.
///
/// # Errors
///
/// Returns [`ObjError::Io`] if the file cannot be created or written.
pub fn save_mtl<P: AsRef<Path>>(material: &Material, path: P) -> ObjResult<()> {
    let path = path.as_ref();
    info!("Saving material {:?} to {}", material.name, path.display());

    let file = File::create(path).map_err(|e| ObjError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_mtl(&mut writer, material).map_err(|e| ObjError::io(path, e))?;
    writer.flush().map_err(|e| ObjError::io(path, e))?;

    Ok(())
}

/// Write MTL content to a writer.
fn write_mtl<W: Write>(writer: &mut W, material: &Material) -> std::io::Result<()> {
    let (kd_r, kd_g, kd_b) = material.diffuse.to_float();

    writeln!(writer, "# Wavefront MTL generated by mesh-obj")?;
    writeln!(writer)?;
    writeln!(writer, "newmtl {}", material.name)?;
    writeln!(
        writer,
        "Ka {:.6} {:.6} {:.6}",
        material.ambient[0], material.ambient[1], material.ambient[2]
    )?;
    writeln!(writer, "Kd {kd_r:.6} {kd_g:.6} {kd_b:.6}")?;
    writeln!(
        writer,
        "Ks {:.6} {:.6} {:.6}",
        material.specular[0], material.specular[1], material.specular[2]
    )?;
    writeln!(writer, "Ns {:.6}", material.shininess)?;
    writeln!(writer, "d {:.6}", material.opacity)?;

    Ok(())
}

/// Load materials from a Wavefront MTL file.
///
/// Parses `newmtl` blocks with their `Ka`/`Kd`/`Ks`/`Ns`/`d` statements.
/// Unknown statements (`illum`, texture maps) are ignored. Materials are
/// returned in file order.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A statement is malformed or appears before any `newmtl`
pub fn load_mtl<P: AsRef<Path>>(path: P) -> ObjResult<Vec<Material>> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|e| ObjError::open(path, e))?;
    let materials = parse_mtl(&text)?;

    info!(
        "Loaded {} materials from {}",
        materials.len(),
        path.display()
    );
    Ok(materials)
}

/// Parse MTL text into a list of materials.
fn parse_mtl(text: &str) -> ObjResult<Vec<Material>> {
    let mut materials: Vec<Material> = Vec::new();
    let mut current: Option<Material> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "newmtl" => {
                if parts.len() < 2 {
                    return Err(ObjError::invalid_content(format!(
                        "line {line_no}: newmtl is missing a name"
                    )));
                }
                if let Some(done) = current.take() {
                    materials.push(done);
                }
                current = Some(Material {
                    name: parts[1].to_string(),
                    ..Material::default()
                });
            }
            "Ka" => {
                let material = current_material(&mut current, "Ka", line_no)?;
                material.ambient = parse_triple(&parts, line_no)?;
            }
            "Kd" => {
                let material = current_material(&mut current, "Kd", line_no)?;
                let kd = parse_triple(&parts, line_no)?;
                #[allow(clippy::cast_possible_truncation)]
                // Truncation: MTL colors fit comfortably in f32
                let color = VertexColor::from_float(kd[0] as f32, kd[1] as f32, kd[2] as f32);
                material.diffuse = color;
            }
            "Ks" => {
                let material = current_material(&mut current, "Ks", line_no)?;
                material.specular = parse_triple(&parts, line_no)?;
            }
            "Ns" => {
                let material = current_material(&mut current, "Ns", line_no)?;
                material.shininess = parse_statement_scalar(&parts, line_no)?;
            }
            "d" => {
                let material = current_material(&mut current, "d", line_no)?;
                material.opacity = parse_statement_scalar(&parts, line_no)?;
            }
            _ => {
                // illum, texture maps and anything else are ignored
            }
        }
    }

    if let Some(done) = current.take() {
        materials.push(done);
    }

    Ok(materials)
}

/// Get the material under construction, or fail if none has been started.
fn current_material<'a>(
    current: &'a mut Option<Material>,
    keyword: &str,
    line_no: usize,
) -> ObjResult<&'a mut Material> {
    current.as_mut().ok_or_else(|| {
        ObjError::invalid_content(format!("line {line_no}: {keyword} before any newmtl"))
    })
}

/// Parse the three values of a color statement.
fn parse_triple(parts: &[&str], line_no: usize) -> ObjResult<[f64; 3]> {
    if parts.len() < 4 {
        return Err(ObjError::invalid_content(format!(
            "line {line_no}: {} has {} values, expected 3",
            parts[0],
            parts.len() - 1
        )));
    }
    Ok([
        parse_scalar(parts[1], line_no)?,
        parse_scalar(parts[2], line_no)?,
        parse_scalar(parts[3], line_no)?,
    ])
}

/// Parse the single value of an `Ns` or `d` statement.
fn parse_statement_scalar(parts: &[&str], line_no: usize) -> ObjResult<f64> {
    if parts.len() < 2 {
        return Err(ObjError::invalid_content(format!(
            "line {line_no}: {} is missing its value",
            parts[0]
        )));
    }
    parse_scalar(parts[1], line_no)
}

fn parse_scalar(token: &str, line_no: usize) -> ObjResult<f64> {
    token.parse().map_err(|_| {
        ObjError::invalid_content(format!("line {line_no}: invalid value {token:?}"))
    })
}
