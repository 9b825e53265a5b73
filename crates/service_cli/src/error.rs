//! CLI error types.

use adapter_loader::LoaderError;
use pricer_saccr::SaCcrError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `saccr` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trade file could not be loaded.
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// SA-CCR computation failed.
    #[error(transparent)]
    SaCcr(#[from] SaCcrError),

    /// Report could not be rendered.
    #[error("Render error: {0}")]
    Render(String),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
