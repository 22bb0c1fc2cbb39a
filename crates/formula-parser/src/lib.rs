//! Formula Parsing and Composition Analysis
//!
//! Turns formula strings such as `Fe2O3` into element/count maps and
//! normalizes them into atomic concentrations.

mod composition;
mod error;
mod formula;

pub use composition::{concentrations, normalize, ConcentrationMap};
pub use error::FormulaError;
pub use formula::{parse, ElementCountMap};
