//! Electronegativity Dispersion

use crate::error::DescriptorError;
use element_data::{ElementPropertyTable, PropertyLookup};
use formula_parser::concentrations;
use tracing::debug;

/// Concentration-weighted population standard deviation of electronegativity.
///
/// With concentrations `c_e` and values `x_e`:
/// `mean = Σ c_e·x_e`, `dispersion = sqrt(Σ c_e·(x_e − mean)²)`.
/// Elements missing from `table` take the table default (0.0) and still
/// carry their concentration weight.
pub fn electronegativity_dispersion(
    formula: &str,
    table: &ElementPropertyTable,
) -> Result<f64, DescriptorError> {
    let conc = concentrations(formula)?;

    let points: Vec<(f64, f64)> = conc
        .iter()
        .map(|(symbol, fraction)| {
            let lookup = table.lookup(symbol);
            if !lookup.is_found() {
                debug!(
                    "No {} for {} in '{}', using {}",
                    table.property(),
                    symbol,
                    formula,
                    PropertyLookup::DEFAULT
                );
            }
            (fraction, lookup.value())
        })
        .collect();

    Ok(weighted_std_dev(&points))
}

/// Weighted population standard deviation of `(weight, value)` pairs whose
/// weights already sum to one
fn weighted_std_dev(points: &[(f64, f64)]) -> f64 {
    let mean: f64 = points.iter().map(|(w, x)| w * x).sum();
    let variance: f64 = points.iter().map(|(w, x)| w * (x - mean).powi(2)).sum();

    // Rounding can push a zero variance slightly negative
    if variance < 0.0 {
        0.0
    } else {
        variance.sqrt()
    }
}
