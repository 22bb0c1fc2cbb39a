//! Batch-level guarantees of the feature matrix builder

use element_data::{ElementalDataTable, PROPERTY_COUNT};
use feature_engine::{Compound, ElementPropertyFeaturizer, FeatureConfig, FeatureMatrixBuilder};
use proptest::prelude::*;

const KNOWN: &[&str] = &["Fe", "O", "Na", "Cl", "Cu"];

fn data() -> ElementalDataTable {
    ElementalDataTable::from_rows(
        KNOWN
            .iter()
            .enumerate()
            .map(|(i, s)| (*s, [i as f64; PROPERTY_COUNT])),
    )
}

/// Mix of valid formulas, unknown elements and strings with no atoms
fn formula() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..KNOWN.len(), 1u32..9, 0..KNOWN.len())
            .prop_map(|(a, n, b)| format!("{}{}{}", KNOWN[a], n, KNOWN[b])),
        Just("Zr2O".to_string()),
        Just(String::new()),
        "[a-z0-9 ]{0,6}",
    ]
}

proptest! {
    #[test]
    fn rows_plus_skipped_equals_input(formulas in prop::collection::vec(formula(), 0..40)) {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let builder = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default());
        let compounds: Vec<Compound> = formulas
            .iter()
            .enumerate()
            .map(|(i, f)| Compound::new(i.to_string(), f.clone()))
            .collect();

        let matrix = builder.build(&compounds);
        prop_assert_eq!(matrix.n_rows() + matrix.skipped_count(), compounds.len());

        let indices: Vec<usize> = matrix.rows().iter().map(|r| r.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for row in matrix.rows() {
            prop_assert_eq!(&row.formula, &formulas[row.index]);
            prop_assert_eq!(row.values.len(), matrix.n_columns());
        }
    }
}
