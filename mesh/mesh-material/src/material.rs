//! Material definition for exported surfaces.

use mesh_types::VertexColor;

/// A surface material in the classic illumination model.
///
/// Fields map directly onto material library directives on export:
/// ambient `Ka`, diffuse `Kd`, specular `Ks`, shininess `Ns` and
/// opacity `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name the geometry file references the material by.
    pub name: String,

    /// Ambient reflectivity, per channel in `[0, 1]`.
    pub ambient: [f64; 3],

    /// Diffuse color.
    pub diffuse: VertexColor,

    /// Specular reflectivity, per channel in `[0, 1]`.
    pub specular: [f64; 3],

    /// Specular exponent.
    pub shininess: f64,

    /// Opacity, `1.0` fully opaque.
    pub opacity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "surface".to_string(),
            ambient: [0.0; 3],
            diffuse: VertexColor::WHITE,
            specular: [0.0; 3],
            shininess: 1.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Create a named material with the given diffuse color.
    ///
    /// The remaining coefficients keep their defaults: black ambient and
    /// specular, shininess `1.0`, fully opaque.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_material::Material;
    /// use mesh_types::VertexColor;
    ///
    /// let material = Material::new("shell", VertexColor::new(200, 40, 40));
    /// assert_eq!(material.name, "shell");
    /// assert_eq!(material.diffuse.r, 200);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, diffuse: VertexColor) -> Self {
        Self {
            name: name.into(),
            diffuse,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material() {
        let material = Material::default();

        assert_eq!(material.name, "surface");
        assert_eq!(material.diffuse, VertexColor::WHITE);
        assert_eq!(material.ambient, [0.0; 3]);
        assert_eq!(material.specular, [0.0; 3]);
        assert!((material.shininess - 1.0).abs() < f64::EPSILON);
        assert!((material.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_sets_name_and_diffuse() {
        let material = Material::new("tube", VertexColor::new(10, 20, 30));

        assert_eq!(material.name, "tube");
        assert_eq!(material.diffuse, VertexColor::new(10, 20, 30));
        assert_eq!(material.ambient, [0.0; 3]);
    }
}
