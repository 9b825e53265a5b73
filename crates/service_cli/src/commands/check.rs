//! Check command implementation
//!
//! Loads a trade file and builds its instruments without aggregating,
//! reporting hedging-set sizes.

use adapter_loader::{load_instruments, resolve_trade_path};
use pricer_saccr::{HedgingSets, SaCcrError, MAX_HEDGING_SET_SIZE};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Per-currency summary produced by the check command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Data set label
    pub name: String,
    /// `(currency, instrument count)` in first-appearance order
    pub hedging_sets: Vec<(String, usize)>,
}

/// Run the check command
pub fn run(config: &CliConfig, file: &str) -> Result<()> {
    let summary = inspect(config, file)?;

    println!("{}", summary.name);
    println!("┌──────────┬─────────────┐");
    println!("│ Currency │ Instruments │");
    println!("├──────────┼─────────────┤");
    for (currency, count) in &summary.hedging_sets {
        println!("│ {:<8} │ {:>11} │", currency, count);
    }
    println!("└──────────┴─────────────┘");

    if let Some((currency, count)) = summary
        .hedging_sets
        .iter()
        .find(|(_, count)| *count > MAX_HEDGING_SET_SIZE)
    {
        return Err(SaCcrError::HedgingSetArity {
            currency: currency.clone(),
            count: *count,
            max: MAX_HEDGING_SET_SIZE,
        }
        .into());
    }

    info!("Check complete");
    Ok(())
}

/// Load `file` and count instruments per currency.
pub fn inspect(config: &CliConfig, file: &str) -> Result<CheckSummary> {
    let path = resolve_trade_path(file, &config.data_dir);
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let book = load_instruments(&path, &config.params.market)?;
    let sets = HedgingSets::partition(&book.instruments);

    Ok(CheckSummary {
        name: book.name,
        hedging_sets: sets
            .iter()
            .map(|set| (set.currency().to_string(), set.len()))
            .collect(),
    })
}
