//! Feature Matrix Builder CLI
//!
//! Loads the elemental tables and a composition dataset, featurizes every
//! compound and writes the matrix with aligned metal labels.

pub mod cli;
pub mod dataset;
pub mod output;
pub mod settings;

use anyhow::{Context, Result};
use descriptor_engine::DescriptorEngine;
use element_data::{ElementPropertyTable, ElementalDataTable, ValenceTable};
use feature_engine::{ElementPropertyFeaturizer, FeatureConfig, FeatureMatrix, FeatureMatrixBuilder};
use output::RunSummary;
use settings::{LoggingConfig, Settings};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.level.parse::<Level>().unwrap_or_else(|_| {
        eprintln!("Unknown log level '{}', using info", config.level);
        Level::INFO
    });

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set tracing subscriber")
}

/// Electronegativity and valence tables, loaded only when descriptors are on
struct DescriptorTables {
    electronegativity: ElementPropertyTable,
    valence: ValenceTable,
}

impl DescriptorTables {
    fn load(settings: &Settings) -> Result<Self> {
        let data = &settings.data;
        let electronegativity = ElementPropertyTable::load_column(
            &data.electronegativity_path,
            &data.electronegativity_column,
        )
        .with_context(|| {
            format!(
                "Failed to load electronegativity from {}",
                data.electronegativity_path.display()
            )
        })?;

        let valence = match &data.valence_path {
            Some(path) => ValenceTable::load(path)
                .with_context(|| format!("Failed to load valence data from {}", path.display()))?,
            None => ValenceTable::builtin(),
        };

        Ok(Self {
            electronegativity,
            valence,
        })
    }
}

/// Build the feature matrix for the configured dataset
pub fn featurize(settings: &Settings, dataset: &dataset::Dataset) -> Result<FeatureMatrix> {
    let elemental = ElementalDataTable::load(&settings.data.elemental_data_path).with_context(|| {
        format!(
            "Failed to load elemental data from {}",
            settings.data.elemental_data_path.display()
        )
    })?;
    let tables = if settings.features.include_descriptors {
        Some(DescriptorTables::load(settings)?)
    } else {
        None
    };

    let featurizer = ElementPropertyFeaturizer::new(&elemental);
    let config = FeatureConfig {
        parallel: settings.features.parallel,
    };
    let mut builder = FeatureMatrixBuilder::new(&featurizer, config);
    if let Some(tables) = &tables {
        builder = builder.with_descriptors(DescriptorEngine::new(
            &tables.electronegativity,
            &tables.valence,
        ));
    }

    Ok(builder.build(&dataset.compounds))
}

/// Run the full pipeline: load, featurize, write
pub fn run(settings: &Settings) -> Result<RunSummary> {
    let dataset = dataset::load(&settings.data)?;
    let matrix = featurize(settings, &dataset)?;

    if matrix.skipped_count() > 0 {
        warn!(
            "{} of {} compounds could not be featurized",
            matrix.skipped_count(),
            dataset.len()
        );
    }

    let labels = dataset.labels.as_ref().map(|labels| matrix.align(labels));
    output::write_csv_file(&matrix, labels.as_deref(), &settings.data.output_path)?;

    let summary = RunSummary::from(&matrix);
    if let Some(path) = &settings.data.summary_path {
        output::write_summary(&summary, path)?;
        info!("Wrote run summary to {}", path.display());
    }

    Ok(summary)
}
