//! Reportable results of an SA-CCR run.
//!
//! These are plain data snapshots handed to the service layer for rendering;
//! they carry no behaviour beyond serialisation.

use serde::Serialize;

use crate::ids::{CurrencyCode, TradeId};
use crate::instrument::{LegType, TimeBucket};

/// Per-instrument metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstrumentMetrics {
    /// Trade identifier
    pub id: TradeId,
    /// Contract type label as given in the record
    pub contract_type: String,
    /// Currency code
    pub currency: CurrencyCode,
    /// Maturity in years
    pub maturity: f64,
    /// Maturity bucket (1, 2 or 3)
    pub time_bucket: TimeBucket,
    /// Notional amount
    pub notional: f64,
    /// Pay leg type
    pub payment_leg: LegType,
    /// Receive leg type
    pub receive_leg: LegType,
    /// Dirty mark-to-market value
    pub mtm_dirty: f64,
    /// Discounted notional
    pub adjusted_notional: f64,
    /// Supervisory delta
    pub delta: f64,
    /// Delta-weighted adjusted notional
    pub effective_notional: f64,
}

/// Aggregate effective notional of one hedging set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HedgingSetNotional {
    /// Currency code of the hedging set
    pub currency: CurrencyCode,
    /// Number of instruments in the set
    pub instrument_count: usize,
    /// Correlation-combined effective notional
    pub notional: f64,
}

/// Finalised SA-CCR result for a basket of trades.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaCcrReport {
    /// Label of the input data set
    pub label: String,
    /// Metrics of every instrument, in input order
    pub instruments: Vec<InstrumentMetrics>,
    /// Basket-wide replacement cost
    pub replacement_cost: f64,
    /// Hedging-set aggregates, in first-appearance order of the currency
    pub hedging_sets: Vec<HedgingSetNotional>,
    /// Potential future exposure add-on
    pub add_on: f64,
    /// Exposure at default
    pub ead: f64,
}
