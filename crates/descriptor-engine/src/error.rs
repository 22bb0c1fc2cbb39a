//! Descriptor Error Types

use formula_parser::FormulaError;
use thiserror::Error;

/// Errors that abort descriptor computation for a compound
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    /// Formula has no atoms to normalize
    #[error(transparent)]
    InvalidFormula(#[from] FormulaError),

    /// Element has no valence count in the valence source
    #[error("Valence data not found for element: {element}")]
    MissingValenceData { element: String },
}
