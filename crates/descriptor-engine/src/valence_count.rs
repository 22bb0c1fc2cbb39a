//! Valence Electron Count

use crate::error::DescriptorError;
use element_data::{ValenceLookup, ValenceSource};
use formula_parser::parse;

/// Count-weighted mean valence electron count of a formula.
///
/// `Σ count·valence / Σ count`, or 0.0 when the total count is zero. Every
/// element must resolve in `valence`; the first one that does not aborts
/// with [`DescriptorError::MissingValenceData`].
pub fn valence_electron_count(
    formula: &str,
    valence: &dyn ValenceSource,
) -> Result<f64, DescriptorError> {
    let mut total_valence = 0.0;
    let mut total_count = 0.0;

    for (symbol, count) in parse(formula).iter() {
        let electrons = match valence.valence(symbol) {
            ValenceLookup::Found(v) => f64::from(v),
            ValenceLookup::Unsupported => {
                return Err(DescriptorError::MissingValenceData {
                    element: symbol.to_string(),
                })
            }
        };
        total_valence += count * electrons;
        total_count += count;
    }

    if total_count == 0.0 {
        return Ok(0.0);
    }
    Ok(total_valence / total_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use element_data::ValenceTable;

    #[test]
    fn test_vec_fe2o3() {
        let table = ValenceTable::builtin();
        let vec = valence_electron_count("Fe2O3", &table).unwrap();
        // (2·8 + 3·6) / 5
        assert!((vec - 6.8).abs() < 1e-12);
    }

    #[test]
    fn test_vec_single_element() {
        let table = ValenceTable::builtin();
        assert_eq!(valence_electron_count("Cu", &table).unwrap(), 11.0);
    }

    #[test]
    fn test_vec_scale_invariant() {
        let table = ValenceTable::builtin();
        let a = valence_electron_count("Fe2O3", &table).unwrap();
        let b = valence_electron_count("Fe4O6", &table).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_vec_empty_formula_is_zero() {
        let table = ValenceTable::builtin();
        assert_eq!(valence_electron_count("", &table).unwrap(), 0.0);
        assert_eq!(valence_electron_count("Fe0", &table).unwrap(), 0.0);
    }

    #[test]
    fn test_vec_missing_valence_aborts() {
        let table = ValenceTable::from_pairs([("Fe", 8u32)]);
        assert_eq!(
            valence_electron_count("FeXx2", &table),
            Err(DescriptorError::MissingValenceData {
                element: "Xx".to_string()
            })
        );
    }

    #[test]
    fn test_vec_uses_last_repeated_count() {
        let table = ValenceTable::builtin();
        // FeFe3O parses to {Fe: 3, O: 1}
        let vec = valence_electron_count("FeFe3O", &table).unwrap();
        assert!((vec - (3.0 * 8.0 + 6.0) / 4.0).abs() < 1e-12);
    }
}
