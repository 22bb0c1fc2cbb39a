//! Formula Error Types

use thiserror::Error;

/// Errors raised when a formula cannot support composition arithmetic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Formula parsed to no atoms (empty map or zero total count)
    #[error("Invalid formula '{0}': no atoms to normalize")]
    InvalidFormula(String),
}
