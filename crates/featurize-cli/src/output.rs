//! Feature Matrix Output

use anyhow::{ensure, Context, Result};
use feature_engine::{FeatureMatrix, SkippedRow};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Name of the label column in the output CSV
pub const LABEL_COLUMN: &str = "is_metal";

/// Outcome of a featurization run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub compounds: usize,
    pub rows: usize,
    pub columns: usize,
    pub skipped: Vec<SkippedRow>,
}

impl From<&FeatureMatrix> for RunSummary {
    fn from(matrix: &FeatureMatrix) -> Self {
        Self {
            compounds: matrix.n_rows() + matrix.skipped_count(),
            rows: matrix.n_rows(),
            columns: matrix.n_columns(),
            skipped: matrix.skipped().to_vec(),
        }
    }
}

/// Write `id, formula, [is_metal,] features...` rows.
///
/// `labels`, when given, must already be aligned to the matrix rows.
pub fn write_csv<W: Write>(matrix: &FeatureMatrix, labels: Option<&[u8]>, writer: W) -> Result<()> {
    if let Some(labels) = labels {
        ensure!(
            labels.len() == matrix.n_rows(),
            "{} labels for {} feature rows",
            labels.len(),
            matrix.n_rows()
        );
    }

    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["id", "formula"];
    if labels.is_some() {
        header.push(LABEL_COLUMN);
    }
    header.extend(matrix.columns().iter().map(String::as_str));
    writer.write_record(&header)?;

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut record = vec![row.id.clone(), row.formula.clone()];
        if let Some(labels) = labels {
            record.push(labels[i].to_string());
        }
        record.extend(row.values.iter().map(f64::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the matrix CSV to `path`
pub fn write_csv_file(matrix: &FeatureMatrix, labels: Option<&[u8]>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_csv(matrix, labels, file)?;
    info!(
        "Wrote {} × {} feature matrix to {}",
        matrix.n_rows(),
        matrix.n_columns(),
        path.display()
    );
    Ok(())
}

/// Write the run summary as pretty JSON
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create summary file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
