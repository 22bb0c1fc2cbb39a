//! Composition Dataset Loading

use crate::settings::DataConfig;
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use feature_engine::Compound;
use std::fs::File;
use std::io::Read;
use tracing::{info, warn};

/// Compounds to featurize and, when the source has band gaps, their labels
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub compounds: Vec<Compound>,
    /// `1` for metals (zero band gap), `0` otherwise; indexed like `compounds`
    pub labels: Option<Vec<u8>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

/// Metal label for an experimental band gap
pub fn is_metal(gap: f64) -> u8 {
    u8::from(gap == 0.0)
}

/// Load the dataset named by `config.dataset_path`
pub fn load(config: &DataConfig) -> Result<Dataset> {
    let path = &config.dataset_path;
    info!("Loading dataset from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open dataset: {}", path.display()))?;
    let dataset = from_reader(file, config)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    info!(
        "Loaded {} compounds ({})",
        dataset.len(),
        if dataset.labels.is_some() { "labelled" } else { "unlabelled" }
    );
    Ok(dataset)
}

/// Read a dataset from CSV using the column names in `config`
pub fn from_reader<R: Read>(reader: R, config: &DataConfig) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let Some(formula_idx) = position(&config.formula_column) else {
        bail!("Missing formula column '{}'", config.formula_column);
    };
    let id_idx = match &config.id_column {
        Some(name) => match position(name) {
            Some(idx) => Some(idx),
            None => bail!("Missing id column '{}'", name),
        },
        None => None,
    };
    let gap_idx = position(&config.gap_column);
    if gap_idx.is_none() {
        warn!("No '{}' column; dataset is unlabelled", config.gap_column);
    }

    let mut compounds = Vec::new();
    let mut labels = gap_idx.map(|_| Vec::new());
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let id = id_idx.map_or_else(|| row.to_string(), |idx| field(idx).to_string());
        compounds.push(Compound::new(id, field(formula_idx)));

        if let (Some(idx), Some(labels)) = (gap_idx, labels.as_mut()) {
            let raw = field(idx);
            let gap: f64 = raw.parse().with_context(|| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                format!("Invalid band gap '{}' at line {}", raw, line)
            })?;
            labels.push(is_metal(gap));
        }
    }

    Ok(Dataset { compounds, labels })
}
