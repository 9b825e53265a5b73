//! # Pricer SA-CCR (L2: Exposure)
//!
//! Exposure at Default for baskets of interest-rate swaps and swaptions
//! under a simplified Standardised Approach for Counterparty Credit Risk.
//!
//! This crate provides:
//! - FIRE trade record schema ([`TradeRecord`])
//! - Per-trade metrics: maturity, bucket, delta, adjusted and effective notional ([`Instrument`])
//! - Currency hedging sets and the correlation-adjusted notional combination
//! - Replacement cost, add-on and EAD through a type-state aggregator ([`SaCcr`])
//! - Explicit market and supervisory parameters ([`SaCcrParams`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pricer_saccr (L2)             │
//! ├─────────────────────────────────────────┤
//! │  record      - FIRE trade record        │
//! │  instrument/ - Instrument, delta, MF    │
//! │  aggregator/ - HedgingSets, SaCcr       │
//! │  params      - Market/Supervisory       │
//! │  report      - SaCcrReport              │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_core (L1)             │
//! │  Timestamp, year fractions, DateError   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_saccr::{Instrument, SaCcr, SaCcrParams, TradeRecord};
//!
//! let json = r#"[
//!   {"id": "T001", "type": "vanilla_swap", "asset_class": "ir",
//!    "date": "2024-01-01T00:00:00Z", "start_date": "2024-01-01T00:00:00Z",
//!    "end_date": "2029-01-01T00:00:00Z", "trade_date": "2023-12-28T00:00:00Z",
//!    "currency_code": "USD", "value_date": "2024-01-01T00:00:00Z",
//!    "mtm_dirty": 100.0, "notional_amount": 1000000,
//!    "payment_type": "floating", "receive_type": "fixed"}
//! ]"#;
//! let records: Vec<TradeRecord> = serde_json::from_str(json).unwrap();
//!
//! let params = SaCcrParams::default();
//! let instruments = records
//!     .iter()
//!     .map(|r| Instrument::from_record(r, &params.market))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let computed = SaCcr::new(instruments, params.supervisory)
//!     .unwrap()
//!     .finalize()
//!     .unwrap();
//! let report = computed.report("example");
//!
//! assert_eq!(report.replacement_cost, 100.0);
//! assert_eq!(report.hedging_sets.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregator;
pub mod error;
pub mod ids;
pub mod instrument;
pub mod params;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use aggregator::{
    calc_notional_amount, Computed, Created, HedgingSet, HedgingSets, Initialized, SaCcr,
    MAX_HEDGING_SET_SIZE,
};
pub use error::{Result, SaCcrError};
pub use ids::{CurrencyCode, TradeId};
pub use instrument::{
    ContractType, Instrument, InstrumentBuilder, LegType, TimeBucket, MATURITY_FACTOR,
};
pub use params::{MarketParams, SaCcrParams, SupervisoryParams};
pub use record::TradeRecord;
pub use report::{HedgingSetNotional, InstrumentMetrics, SaCcrReport};
