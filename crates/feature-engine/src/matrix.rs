//! Feature Matrix Assembly

use crate::error::FeaturizeError;
use crate::features::ElementFeaturizer;
use descriptor_engine::{CompoundDescriptors, DescriptorEngine};
use formula_parser::concentrations;
use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One input compound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Caller-supplied identifier
    pub id: String,
    pub formula: String,
}

impl Compound {
    pub fn new(id: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            formula: formula.into(),
        }
    }
}

/// Builder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Featurize rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// A successfully featurized compound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Position in the input batch
    pub index: usize,
    pub id: String,
    pub formula: String,
    pub values: Vec<f64>,
}

/// A compound left out of the matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Position in the input batch
    pub index: usize,
    pub id: String,
    pub formula: String,
    pub reason: String,
}

/// Rows of named features in input order, plus the rows that failed
#[derive(Debug, Clone, Serialize)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    rows: Vec<FeatureRow>,
    skipped: Vec<SkippedRow>,
}

impl FeatureMatrix {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of a named feature in the `row`-th output row
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.values.get(idx).copied())
    }

    /// `(column, value)` pairs of one output row
    pub fn row_map(&self, row: usize) -> Option<Vec<(&str, f64)>> {
        self.rows.get(row).map(|r| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(r.values.iter().copied())
                .collect()
        })
    }

    /// Dense `n_rows × n_columns` copy of the feature values
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.n_rows(), self.n_columns()), |(i, j)| {
            self.rows[i].values[j]
        })
    }

    /// Select the labels of the rows that were kept, in row order.
    ///
    /// `labels` must be indexed like the input batch; rows whose index is
    /// out of range are dropped with a warning.
    pub fn align<T: Clone>(&self, labels: &[T]) -> Vec<T> {
        if labels.len() != self.rows.len() + self.skipped.len() {
            warn!(
                "Aligning {} labels to a batch of {} compounds",
                labels.len(),
                self.rows.len() + self.skipped.len()
            );
        }
        self.rows
            .iter()
            .filter_map(|r| labels.get(r.index).cloned())
            .collect()
    }
}

/// Featurizes a batch of compounds, isolating per-row failures
pub struct FeatureMatrixBuilder<'a> {
    featurizer: &'a dyn ElementFeaturizer,
    descriptors: Option<DescriptorEngine<'a>>,
    config: FeatureConfig,
}

impl<'a> FeatureMatrixBuilder<'a> {
    pub fn new(featurizer: &'a dyn ElementFeaturizer, config: FeatureConfig) -> Self {
        Self {
            featurizer,
            descriptors: None,
            config,
        }
    }

    /// Append the `vec` and `en_dispersion` columns to every row
    pub fn with_descriptors(mut self, engine: DescriptorEngine<'a>) -> Self {
        self.descriptors = Some(engine);
        self
    }

    /// Output column names
    pub fn columns(&self) -> Vec<String> {
        let mut columns = self.featurizer.feature_labels();
        if self.descriptors.is_some() {
            columns.extend(CompoundDescriptors::COLUMNS.iter().map(|c| c.to_string()));
        }
        columns
    }

    /// Featurize every compound.
    ///
    /// A compound that fails is recorded in [`FeatureMatrix::skipped`] and
    /// the batch continues; kept rows stay in input order.
    pub fn build(&self, compounds: &[Compound]) -> FeatureMatrix {
        info!(
            "Featurizing {} compounds (parallel={}, descriptors={})",
            compounds.len(),
            self.config.parallel,
            self.descriptors.is_some()
        );

        let outcomes: Vec<Result<Vec<f64>, FeaturizeError>> = if self.config.parallel {
            compounds.par_iter().map(|c| self.featurize(c)).collect()
        } else {
            compounds.iter().map(|c| self.featurize(c)).collect()
        };

        let mut rows = Vec::with_capacity(compounds.len());
        let mut skipped = Vec::new();
        for (index, (compound, outcome)) in compounds.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(values) => rows.push(FeatureRow {
                    index,
                    id: compound.id.clone(),
                    formula: compound.formula.clone(),
                    values,
                }),
                Err(e) => {
                    warn!("Skipping compound {} ('{}'): {}", compound.id, compound.formula, e);
                    skipped.push(SkippedRow {
                        index,
                        id: compound.id.clone(),
                        formula: compound.formula.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        metrics::counter!("featurize_rows_total").increment(compounds.len() as u64);
        metrics::counter!("featurize_rows_skipped_total").increment(skipped.len() as u64);
        info!("Featurized {} rows, skipped {}", rows.len(), skipped.len());

        FeatureMatrix {
            columns: self.columns(),
            rows,
            skipped,
        }
    }

    /// Feature values for a single compound
    pub fn featurize(&self, compound: &Compound) -> Result<Vec<f64>, FeaturizeError> {
        let composition = concentrations(&compound.formula)?;
        let mut values = self.featurizer.featurize(&composition)?;

        if let Some(engine) = &self.descriptors {
            values.extend(engine.describe(&compound.formula)?.values());
        }

        debug!("Featurized {} into {} values", compound.id, values.len());
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{ElementPropertyFeaturizer, FEATURE_DIMENSION};
    use element_data::{ElementPropertyTable, ElementalDataTable, ValenceTable, PROPERTY_COUNT};

    fn data() -> ElementalDataTable {
        ElementalDataTable::from_rows([
            ("Fe", [26.0; PROPERTY_COUNT]),
            ("O", [8.0; PROPERTY_COUNT]),
            ("Na", [11.0; PROPERTY_COUNT]),
            ("Cl", [17.0; PROPERTY_COUNT]),
        ])
    }

    fn batch() -> Vec<Compound> {
        vec![
            Compound::new("a", "Fe2O3"),
            Compound::new("b", ""),
            Compound::new("c", "NaCl"),
            Compound::new("d", "FeZn"),
            Compound::new("e", "O2"),
        ]
    }

    #[test]
    fn test_build_skips_failures() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let builder = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default());

        let matrix = builder.build(&batch());
        assert_eq!(matrix.n_rows() + matrix.skipped_count(), 5);
        assert_eq!(matrix.n_columns(), FEATURE_DIMENSION);

        let ids: Vec<&str> = matrix.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
        let skipped: Vec<usize> = matrix.skipped().iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 3]);
        assert_eq!(matrix.skipped()[1].reason, "No elemental data for element: Zn");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let compounds: Vec<Compound> = (0..200)
            .map(|i| Compound::new(i.to_string(), format!("Fe{}O{}", i % 7 + 1, i % 5 + 1)))
            .collect();

        let parallel = FeatureMatrixBuilder::new(&featurizer, FeatureConfig { parallel: true })
            .build(&compounds);
        let sequential = FeatureMatrixBuilder::new(&featurizer, FeatureConfig { parallel: false })
            .build(&compounds);
        assert_eq!(parallel.rows(), sequential.rows());
        for (i, row) in parallel.rows().iter().enumerate() {
            assert_eq!(row.index, i);
        }
    }

    #[test]
    fn test_descriptor_columns() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let en = ElementPropertyTable::from_pairs(
            "Electronegativity",
            [("Fe", 1.83), ("O", 3.44), ("Na", 0.93), ("Cl", 3.16)],
        );
        let valence = ValenceTable::builtin();
        let builder = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default())
            .with_descriptors(DescriptorEngine::new(&en, &valence));

        let matrix = builder.build(&batch());
        assert_eq!(matrix.n_columns(), FEATURE_DIMENSION + 2);
        assert_eq!(matrix.columns().last().map(String::as_str), Some("en_dispersion"));
        assert!((matrix.value(0, "vec").unwrap() - 6.8).abs() < 1e-12);
        assert_eq!(matrix.value(2, "en_dispersion"), Some(0.0));
    }

    #[test]
    fn test_descriptor_failure_skips_row() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let en = ElementPropertyTable::default();
        let valence = ValenceTable::from_pairs([("Fe", 8u32), ("O", 6u32)]);
        let builder = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default())
            .with_descriptors(DescriptorEngine::new(&en, &valence));

        let matrix = builder.build(&[Compound::new("x", "NaCl"), Compound::new("y", "FeO")]);
        assert_eq!(matrix.n_rows(), 1);
        assert_eq!(matrix.rows()[0].id, "y");
        assert_eq!(
            matrix.skipped()[0].reason,
            "Valence data not found for element: Na"
        );
    }

    #[test]
    fn test_dense_export_and_alignment() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let matrix = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default()).build(&batch());

        let array = matrix.to_array();
        assert_eq!(array.shape(), &[3, FEATURE_DIMENSION]);
        assert_eq!(array[[1, 0]], 11.0);

        let labels = [1u8, 0, 0, 1, 0];
        assert_eq!(matrix.align(&labels), vec![1, 0, 0]);
    }

    #[test]
    fn test_row_map() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let matrix = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default())
            .build(&[Compound::new("fe", "Fe")]);

        let row = matrix.row_map(0).unwrap();
        assert_eq!(row.len(), FEATURE_DIMENSION);
        assert_eq!(row[0], ("MagpieData minimum Number", 26.0));
        assert!(matrix.row_map(1).is_none());
    }

    #[test]
    fn test_value_lookup_bounds() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let matrix = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default())
            .build(&[Compound::new("fe", "Fe")]);

        assert_eq!(matrix.value(0, "MagpieData minimum Number"), Some(26.0));
        assert_eq!(matrix.value(0, "vec"), None);
        assert_eq!(matrix.value(1, "MagpieData minimum Number"), None);
    }

    #[test]
    fn test_empty_batch() {
        let data = data();
        let featurizer = ElementPropertyFeaturizer::new(&data);
        let matrix = FeatureMatrixBuilder::new(&featurizer, FeatureConfig::default()).build(&[]);
        assert_eq!(matrix.n_rows(), 0);
        assert_eq!(matrix.to_array().shape(), &[0, FEATURE_DIMENSION]);
    }
}
