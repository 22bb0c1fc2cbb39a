//! Run Settings

use config::{Config, ConfigError, Environment, File};
use element_data::ELECTRONEGATIVITY_COLUMN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `FEATURIZE__DATA__DATASET_PATH`
const ENV_PREFIX: &str = "FEATURIZE";

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV with `element` and an electronegativity column
    pub electronegativity_path: PathBuf,
    /// Property column read from `electronegativity_path`
    pub electronegativity_column: String,
    /// CSV with `element` and the 19 elemental property columns
    pub elemental_data_path: PathBuf,
    /// CSV with `element` and `valence`; the built-in table when unset
    pub valence_path: Option<PathBuf>,
    /// Composition dataset
    pub dataset_path: PathBuf,
    /// Dataset column holding formulas
    pub formula_column: String,
    /// Dataset column holding band gaps; no labels when absent from the file
    pub gap_column: String,
    /// Dataset column holding compound ids; row numbers when unset
    pub id_column: Option<String>,
    /// Feature matrix CSV
    pub output_path: PathBuf,
    /// Optional JSON run summary
    pub summary_path: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            electronegativity_path: PathBuf::from("data/magpiery.csv"),
            electronegativity_column: ELECTRONEGATIVITY_COLUMN.to_string(),
            elemental_data_path: PathBuf::from("data/magpie.csv"),
            valence_path: None,
            dataset_path: PathBuf::from("data/matbench_expt_gap.csv"),
            formula_column: "composition".to_string(),
            gap_column: "gap expt".to_string(),
            id_column: None,
            output_path: PathBuf::from("features.csv"),
            summary_path: None,
        }
    }
}

/// Feature selection and execution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Append `vec` and `en_dispersion` columns
    pub include_descriptors: bool,
    /// Featurize rows in parallel
    pub parallel: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            include_descriptors: true,
            parallel: true,
        }
    }
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Defaults, overlaid by `path` (if given) and then by environment
    /// variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data.formula_column, "composition");
        assert_eq!(settings.data.electronegativity_column, "Electronegativity");
        assert!(settings.features.include_descriptors);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[data]\ndataset_path = \"compounds.csv\"\n\n[features]\nparallel = false\n"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.data.dataset_path, PathBuf::from("compounds.csv"));
        assert!(!settings.features.parallel);
        // Untouched keys keep their defaults
        assert_eq!(settings.data.gap_column, "gap expt");
        assert!(settings.features.include_descriptors);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }
}
