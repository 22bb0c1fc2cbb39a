//! Atomic Concentrations

use crate::error::FormulaError;
use crate::formula::{parse, ElementCountMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Element symbol to atomic fraction, in the order of the source count map.
///
/// Only built by [`normalize`], so fractions always sum to 1.0 within
/// floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationMap {
    fractions: Vec<(String, f64)>,
}

impl ConcentrationMap {
    /// Fraction for a symbol, if present
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.fractions
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
    }

    /// Iterate over `(symbol, fraction)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fractions.iter().map(|(s, c)| (s.as_str(), *c))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.fractions.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// Divide every count by the total atom count.
///
/// Fails with [`FormulaError::InvalidFormula`] when the total is zero, which
/// covers both an empty map and one whose counts are all zero.
pub fn normalize(counts: &ElementCountMap) -> Result<ConcentrationMap, FormulaError> {
    let total = counts.total();
    if total <= 0.0 || !total.is_finite() {
        return Err(FormulaError::InvalidFormula(counts.to_string()));
    }

    let fractions = counts
        .iter()
        .map(|(symbol, count)| (symbol.to_string(), count / total))
        .collect();

    Ok(ConcentrationMap { fractions })
}

/// Parse a formula and normalize it into atomic concentrations
pub fn concentrations(formula: &str) -> Result<ConcentrationMap, FormulaError> {
    let counts = parse(formula);
    debug!("Parsed '{}' into {} elements", formula, counts.len());
    normalize(&counts).map_err(|_| FormulaError::InvalidFormula(formula.to_string()))
}
