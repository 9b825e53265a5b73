//! EAD command implementation
//!
//! Loads a trade file, runs the full SA-CCR pipeline and renders the report.

use std::path::Path;

use adapter_loader::{load_instruments, resolve_trade_path};
use pricer_saccr::{SaCcr, SaCcrReport};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::render::render;
use crate::{CliError, Result};

/// Run the ead command
pub fn run(
    config: &CliConfig,
    file: &str,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let format = format.unwrap_or(config.format);
    let report = compute(config, file)?;
    let rendered = render(&report, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Resolve `file`, build its instruments and compute the report.
pub fn compute(config: &CliConfig, file: &str) -> Result<SaCcrReport> {
    let path = resolve_trade_path(file, &config.data_dir);
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    info!("Computing EAD for {}", path.display());
    let book = load_instruments(&path, &config.params.market)?;
    let computed = SaCcr::new(book.instruments, config.params.supervisory)?.finalize()?;
    Ok(computed.report(book.name))
}
