//! Params command implementation
//!
//! Prints the effective market and supervisory parameters as TOML.

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the params command
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", to_toml(config)?);
    Ok(())
}

fn to_toml(config: &CliConfig) -> Result<String> {
    let mut root = toml::Table::new();
    let params = toml::Value::try_from(config.params).map_err(|e| CliError::Render(e.to_string()))?;
    root.insert("params".to_string(), params);
    toml::to_string_pretty(&root).map_err(|e| CliError::Render(e.to_string()))
}
