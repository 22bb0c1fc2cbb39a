use std::path::PathBuf;

use clap::Parser;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "featurize",
    about = "Build a compound feature matrix from chemical formulas",
    version
)]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Composition dataset CSV
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Feature matrix CSV to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a JSON run summary
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Leave out the VEC and electronegativity dispersion columns
    #[arg(long)]
    pub no_descriptors: bool,

    /// Featurize on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.data.dataset_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.data.output_path = output.clone();
        }
        if let Some(summary) = &self.summary {
            settings.data.summary_path = Some(summary.clone());
        }
        if self.no_descriptors {
            settings.features.include_descriptors = false;
        }
        if self.sequential {
            settings.features.parallel = false;
        }
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
