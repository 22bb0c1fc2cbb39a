//! Feature matrix builder entry point

use featurize_cli::{cli, init_logging, run, settings::Settings};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = cli::parse();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut settings);

    if let Err(e) = init_logging(&settings.logging) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    info!("=== Compound featurizer v{} ===", env!("CARGO_PKG_VERSION"));

    match run(&settings) {
        Ok(summary) => {
            info!(
                "Done: {} rows × {} columns, {} skipped of {} compounds",
                summary.rows,
                summary.columns,
                summary.skipped.len(),
                summary.compounds
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
