//! Basket-level SA-CCR aggregation.
//!
//! [`SaCcr`] is a type-state pipeline. Each stage consumes the previous one,
//! so aggregate-dependent quantities cannot be requested before the data they
//! need exists:
//!
//! ```text
//! SaCcr<Created> --initialize()--> SaCcr<Initialized>
//!                --effective_notional_amount()--> SaCcr<Computed> --ead()/report()
//! ```
//!
//! Replacement cost does not depend on the partition and is available in
//! every state.
//!
//! # Example
//!
//! ```
//! use pricer_core::types::Timestamp;
//! use pricer_saccr::{Instrument, LegType, SaCcr, SupervisoryParams};
//!
//! let as_of = Timestamp::from_ymd(2024, 1, 1).unwrap();
//! let swap = Instrument::builder()
//!     .id("T001")
//!     .currency("USD")
//!     .as_of(as_of)
//!     .start_date(as_of)
//!     .end_date(as_of.add_days(3 * 365))
//!     .notional(1_000_000.0)
//!     .mtm_dirty(150.0)
//!     .payment_leg(LegType::Fixed)
//!     .build()
//!     .unwrap();
//!
//! let computed = SaCcr::new(vec![swap], SupervisoryParams::default())
//!     .unwrap()
//!     .initialize()
//!     .effective_notional_amount()
//!     .unwrap();
//!
//! assert_eq!(computed.replacement_cost(), 150.0);
//! assert!(computed.ead() > 1.4 * 60.0);
//! ```

mod hedging_set;
mod notional;

pub use hedging_set::{HedgingSet, HedgingSets};
pub use notional::{calc_notional_amount, MAX_HEDGING_SET_SIZE};

use tracing::{debug, info};

use crate::error::{Result, SaCcrError};
use crate::instrument::Instrument;
use crate::params::SupervisoryParams;
use crate::report::{HedgingSetNotional, SaCcrReport};

/// Instruments loaded, no partition yet.
#[derive(Clone, Debug)]
pub struct Created;

/// Hedging sets built.
#[derive(Clone, Debug)]
pub struct Initialized {
    hedging_sets: HedgingSets,
}

/// Hedging-set aggregates computed.
#[derive(Clone, Debug)]
pub struct Computed {
    hedging_sets: HedgingSets,
    effective_notionals: Vec<HedgingSetNotional>,
}

/// SA-CCR aggregator over a basket of instruments.
#[derive(Clone, Debug)]
pub struct SaCcr<S = Created> {
    instruments: Vec<Instrument>,
    params: SupervisoryParams,
    state: S,
}

impl<S> SaCcr<S> {
    /// Instruments in input order.
    #[inline]
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Mutable access to the instruments, e.g. to overwrite mark-to-market
    /// values before recomputing the replacement cost.
    #[inline]
    pub fn instruments_mut(&mut self) -> &mut [Instrument] {
        &mut self.instruments
    }

    /// Supervisory parameters.
    #[inline]
    pub fn params(&self) -> &SupervisoryParams {
        &self.params
    }

    /// Basket-wide replacement cost: `max(Σ mtm_dirty, 0)`.
    pub fn replacement_cost(&self) -> f64 {
        self.instruments
            .iter()
            .map(Instrument::mtm_dirty)
            .sum::<f64>()
            .max(0.0)
    }
}

impl SaCcr<Created> {
    /// Creates an aggregator over a non-empty instrument collection.
    ///
    /// # Errors
    ///
    /// - `SaCcrError::EmptyPortfolio` when `instruments` is empty
    /// - `SaCcrError::InvalidParams` when `params` fails validation
    pub fn new(instruments: Vec<Instrument>, params: SupervisoryParams) -> Result<Self> {
        if instruments.is_empty() {
            return Err(SaCcrError::EmptyPortfolio);
        }
        params.validate()?;
        Ok(Self {
            instruments,
            params,
            state: Created,
        })
    }

    /// Partitions the instruments into currency hedging sets.
    pub fn initialize(self) -> SaCcr<Initialized> {
        let hedging_sets = HedgingSets::partition(&self.instruments);
        debug!(
            instruments = self.instruments.len(),
            hedging_sets = hedging_sets.len(),
            "Hedging sets built"
        );
        SaCcr {
            instruments: self.instruments,
            params: self.params,
            state: Initialized { hedging_sets },
        }
    }

    /// Runs the whole pipeline: partition, then hedging-set aggregation.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SaCcr::effective_notional_amount`].
    pub fn finalize(self) -> Result<SaCcr<Computed>> {
        self.initialize().effective_notional_amount()
    }

    /// Runs the whole pipeline and returns the exposure at default.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SaCcr::effective_notional_amount`].
    pub fn get_ead(self) -> Result<f64> {
        Ok(self.finalize()?.ead())
    }
}

impl SaCcr<Initialized> {
    /// Hedging sets built by [`SaCcr::initialize`].
    #[inline]
    pub fn hedging_sets(&self) -> &HedgingSets {
        &self.state.hedging_sets
    }

    /// Combines the effective notionals of each hedging set.
    ///
    /// # Errors
    ///
    /// Returns `SaCcrError::HedgingSetArity` when a hedging set holds more
    /// than [`MAX_HEDGING_SET_SIZE`] instruments.
    pub fn effective_notional_amount(self) -> Result<SaCcr<Computed>> {
        let mut effective_notionals = Vec::with_capacity(self.state.hedging_sets.len());

        for set in &self.state.hedging_sets {
            let values: Vec<f64> = set
                .instruments(&self.instruments)
                .map(Instrument::effective_notional)
                .collect();

            let notional = calc_notional_amount(&values).map_err(|_| {
                SaCcrError::HedgingSetArity {
                    currency: set.currency().to_string(),
                    count: set.len(),
                    max: MAX_HEDGING_SET_SIZE,
                }
            })?;

            debug!(
                currency = %set.currency(),
                instruments = set.len(),
                notional,
                "Hedging set aggregated"
            );

            effective_notionals.push(HedgingSetNotional {
                currency: set.currency().clone(),
                instrument_count: set.len(),
                notional,
            });
        }

        Ok(SaCcr {
            instruments: self.instruments,
            params: self.params,
            state: Computed {
                hedging_sets: self.state.hedging_sets,
                effective_notionals,
            },
        })
    }
}

impl SaCcr<Computed> {
    /// Hedging sets the aggregates were computed over.
    #[inline]
    pub fn hedging_sets(&self) -> &HedgingSets {
        &self.state.hedging_sets
    }

    /// Aggregate effective notional per hedging set, in hedging-set order.
    #[inline]
    pub fn effective_notionals(&self) -> &[HedgingSetNotional] {
        &self.state.effective_notionals
    }

    /// Add-on: `Σ aggregate * supervisory_factor` over all hedging sets.
    pub fn add_on(&self) -> f64 {
        let factor = self.params.supervisory_factor;
        self.state
            .effective_notionals
            .iter()
            .map(|set| set.notional * factor)
            .sum()
    }

    /// Exposure at default: `alpha * (pfe_floor + multiplier * add_on)`.
    pub fn ead(&self) -> f64 {
        let p = &self.params;
        p.alpha * (p.pfe_floor + p.multiplier * self.add_on())
    }

    /// Collects every reportable figure of the run.
    pub fn report(&self, label: impl Into<String>) -> SaCcrReport {
        let report = SaCcrReport {
            label: label.into(),
            instruments: self.instruments.iter().map(Instrument::metrics).collect(),
            replacement_cost: self.replacement_cost(),
            hedging_sets: self.state.effective_notionals.clone(),
            add_on: self.add_on(),
            ead: self.ead(),
        };

        info!(
            label = %report.label,
            instruments = report.instruments.len(),
            hedging_sets = report.hedging_sets.len(),
            replacement_cost = report.replacement_cost,
            add_on = report.add_on,
            ead = report.ead,
            "SA-CCR run finalised"
        );

        report
    }
}
