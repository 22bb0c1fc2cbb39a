//! Elemental Property Featurization

use crate::error::FeaturizeError;
use crate::statistics::{PropertyStats, Statistic};
use element_data::{ElementalDataTable, ElementalProperty, PROPERTY_COUNT};
use formula_parser::ConcentrationMap;
use tracing::trace;

/// Number of features per composition (19 properties × 5 statistics)
pub const FEATURE_DIMENSION: usize = PROPERTY_COUNT * Statistic::ALL.len();

/// Prefix of every elemental feature column
pub const LABEL_PREFIX: &str = "MagpieData";

/// Turns a composition into a fixed-width vector of per-element statistics
pub trait ElementFeaturizer: Send + Sync {
    /// Column labels, one per value returned by [`ElementFeaturizer::featurize`]
    fn feature_labels(&self) -> Vec<String>;

    fn featurize(&self, composition: &ConcentrationMap) -> Result<Vec<f64>, FeaturizeError>;
}

/// Min/max/mean/range/std_dev of every elemental property, weighted by
/// atomic fraction
pub struct ElementPropertyFeaturizer<'a> {
    data: &'a ElementalDataTable,
}

impl<'a> ElementPropertyFeaturizer<'a> {
    pub fn new(data: &'a ElementalDataTable) -> Self {
        Self { data }
    }
}

impl ElementFeaturizer for ElementPropertyFeaturizer<'_> {
    fn feature_labels(&self) -> Vec<String> {
        ElementalProperty::ALL
            .iter()
            .flat_map(|property| {
                Statistic::ALL
                    .iter()
                    .map(move |stat| format!("{} {} {}", LABEL_PREFIX, stat, property))
            })
            .collect()
    }

    fn featurize(&self, composition: &ConcentrationMap) -> Result<Vec<f64>, FeaturizeError> {
        let mut rows = Vec::with_capacity(composition.len());
        let mut weights = Vec::with_capacity(composition.len());
        for (symbol, fraction) in composition.iter() {
            let row = self
                .data
                .row(symbol)
                .ok_or_else(|| FeaturizeError::UnknownElement(symbol.to_string()))?;
            rows.push(row);
            weights.push(fraction);
        }

        let mut values = Vec::with_capacity(FEATURE_DIMENSION);
        let mut column = Vec::with_capacity(rows.len());
        for (idx, property) in ElementalProperty::ALL.iter().enumerate() {
            column.clear();
            column.extend(rows.iter().map(|row| row[idx]));
            let stats = PropertyStats::compute(&column, &weights);
            trace!("{}: {:?}", property, stats);
            values.extend(Statistic::ALL.iter().map(|stat| stats.get(*stat)));
        }

        Ok(values)
    }
}
