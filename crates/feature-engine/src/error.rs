//! Featurization Error Types

use descriptor_engine::DescriptorError;
use formula_parser::FormulaError;
use thiserror::Error;

/// Reasons a single compound cannot be featurized
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeaturizeError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Element absent from the elemental data table
    #[error("No elemental data for element: {0}")]
    UnknownElement(String),
}
