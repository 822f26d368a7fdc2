//! Material assignment for exported meshes.
//!
//! Provides the [`Material`] description written to material library files
//! and the random diffuse-color assignment used by the conversion pipeline.
//! Colors are drawn through an injected random source, so callers can seed
//! for reproducibility or pass a thread-local generator for fresh colors
//! on every run.
//!
//! # Example
//!
//! ```
//! use mesh_material::{random_color, random_material};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // Same seed, same color
//! let color = random_color(&mut rng);
//! let again = random_color(&mut StdRng::seed_from_u64(7));
//! assert_eq!(color, again);
//! ```

mod material;
mod random;

pub use material::Material;
pub use random::{random_color, random_material};
