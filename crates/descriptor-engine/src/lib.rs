//! Compound Descriptor Engine
//!
//! Scalar descriptors derived from a formula and elemental property tables:
//! the valence electron count (VEC) and the concentration-weighted spread of
//! electronegativity across the constituent elements.

mod dispersion;
mod engine;
mod error;
mod valence_count;

pub use dispersion::electronegativity_dispersion;
pub use engine::{CompoundDescriptors, DescriptorEngine};
pub use error::DescriptorError;
pub use valence_count::valence_electron_count;
