//! Random color and material assignment.

use mesh_types::VertexColor;
use rand::prelude::*;
use tracing::debug;

use crate::material::Material;

/// Draw a random color, each channel uniform over the full 8-bit range.
///
/// The three channels are drawn independently; consecutive calls on the
/// same generator produce independent colors.
#[must_use]
pub fn random_color(rng: &mut dyn RngCore) -> VertexColor {
    VertexColor::new(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}

/// Create a named material with a freshly drawn random diffuse color.
///
/// # Example
///
/// ```
/// use mesh_material::random_material;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let material = random_material("surface", &mut rng);
///
/// assert_eq!(material.name, "surface");
/// assert!((material.opacity - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn random_material(name: impl Into<String>, rng: &mut dyn RngCore) -> Material {
    let material = Material::new(name, random_color(rng));
    debug!(
        name = %material.name,
        r = material.diffuse.r,
        g = material.diffuse.g,
        b = material.diffuse.b,
        "assigned random material"
    );
    material
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..8 {
            assert_eq!(random_color(&mut rng1), random_color(&mut rng2));
        }
    }

    #[test]
    fn different_seeds_draw_different_sequences() {
        let mut rng1 = StdRng::seed_from_u64(1);
        let mut rng2 = StdRng::seed_from_u64(2);

        let seq1: Vec<_> = (0..8).map(|_| random_color(&mut rng1)).collect();
        let seq2: Vec<_> = (0..8).map(|_| random_color(&mut rng2)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn channels_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [[0_usize; 256]; 3];

        for _ in 0..1000 {
            let color = random_color(&mut rng);
            counts[0][usize::from(color.r)] += 1;
            counts[1][usize::from(color.g)] += 1;
            counts[2][usize::from(color.b)] += 1;
        }

        // Expected frequency is ~3.9 per value; anything above 5x that
        // would indicate a badly skewed draw
        for channel in &counts {
            for &count in channel.iter() {
                assert!(count <= 20, "channel value drawn {count} times");
            }
        }
    }

    #[test]
    fn random_material_uses_drawn_color() {
        let mut color_rng = StdRng::seed_from_u64(99);
        let expected = random_color(&mut color_rng);

        let mut material_rng = StdRng::seed_from_u64(99);
        let material = random_material("surface", &mut material_rng);

        assert_eq!(material.diffuse, expected);
        assert_eq!(material.ambient, [0.0; 3]);
        assert_eq!(material.specular, [0.0; 3]);
    }
}
