//! Descriptor Engine Implementation

use crate::dispersion::electronegativity_dispersion;
use crate::error::DescriptorError;
use crate::valence_count::valence_electron_count;
use element_data::{ElementPropertyTable, ValenceSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalar descriptors for one compound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundDescriptors {
    /// Valence electron count
    pub vec: f64,
    /// Electronegativity dispersion
    pub en_dispersion: f64,
}

impl CompoundDescriptors {
    /// Column names, in the order of [`CompoundDescriptors::values`]
    pub const COLUMNS: [&'static str; 2] = ["vec", "en_dispersion"];

    pub fn values(&self) -> [f64; 2] {
        [self.vec, self.en_dispersion]
    }
}

/// Computes descriptors against shared, read-only property sources
#[derive(Clone, Copy)]
pub struct DescriptorEngine<'a> {
    electronegativity: &'a ElementPropertyTable,
    valence: &'a dyn ValenceSource,
}

impl<'a> DescriptorEngine<'a> {
    pub fn new(electronegativity: &'a ElementPropertyTable, valence: &'a dyn ValenceSource) -> Self {
        Self {
            electronegativity,
            valence,
        }
    }

    /// Valence electron count; 0.0 for a formula with no atoms
    pub fn vec(&self, formula: &str) -> Result<f64, DescriptorError> {
        valence_electron_count(formula, self.valence)
    }

    /// Electronegativity dispersion; fails on a formula with no atoms
    pub fn en_dispersion(&self, formula: &str) -> Result<f64, DescriptorError> {
        electronegativity_dispersion(formula, self.electronegativity)
    }

    /// Both descriptors, failing if either does
    pub fn describe(&self, formula: &str) -> Result<CompoundDescriptors, DescriptorError> {
        let descriptors = CompoundDescriptors {
            vec: self.vec(formula)?,
            en_dispersion: self.en_dispersion(formula)?,
        };
        debug!(
            "Descriptors for '{}': vec={:.4}, en_dispersion={:.4}",
            formula, descriptors.vec, descriptors.en_dispersion
        );
        Ok(descriptors)
    }
}
