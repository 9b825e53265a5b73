//! Per-trade SA-CCR risk metrics.
//!
//! An [`Instrument`] is built from one trade record and derives, at
//! construction time, its maturity, maturity bucket, call/put sign and
//! delta. Adjusted and effective notionals are computed on demand.
//!
//! # Formulas
//!
//! With `r` the discount rate, `S` and `E` the start and end dates measured
//! in years from the as-of date, and `T` the maturity:
//!
//! ```text
//! adjusted_notional  = N * (exp(-r*S) - exp(-r*E)) / r
//! delta (swap)       = is_call
//! delta (swaption)   = is_call * phi * (ln(pay/receive) + 0.5*sigma^2*T) / (sigma*sqrt(T))
//! effective_notional = delta * adjusted_notional * maturity_factor
//! ```

mod types;

pub use types::{ContractType, LegType, TimeBucket};

use pricer_core::types::{year_fraction, Timestamp};
use tracing::{debug, warn};

use crate::error::{Result, SaCcrError};
use crate::ids::{CurrencyCode, TradeId};
use crate::params::MarketParams;
use crate::record::TradeRecord;
use crate::report::InstrumentMetrics;

/// Maturity factor for unmargined trades.
pub const MATURITY_FACTOR: f64 = 1.0;

/// One interest-rate derivative trade with its derived risk metrics.
///
/// Everything except the mark-to-market value is fixed at construction.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Timestamp;
/// use pricer_saccr::{ContractType, Instrument, LegType, TimeBucket};
///
/// let start = Timestamp::from_ymd(2024, 1, 1).unwrap();
/// let swap = Instrument::builder()
///     .id("T001")
///     .contract_type(ContractType::VanillaSwap)
///     .currency("USD")
///     .as_of(start)
///     .start_date(start)
///     .end_date(start.add_days(180))
///     .notional(1_000_000.0)
///     .payment_leg(LegType::Floating)
///     .build()
///     .unwrap();
///
/// assert_eq!(swap.delta(), -1.0);
/// assert_eq!(swap.time_bucket(), TimeBucket::UnderOneYear);
/// ```
#[derive(Clone, Debug)]
pub struct Instrument {
    id: TradeId,
    type_label: String,
    contract_type: ContractType,
    asset_class: String,
    as_of: Timestamp,
    start_date: Timestamp,
    end_date: Timestamp,
    trade_date: Timestamp,
    value_date: Timestamp,
    currency: CurrencyCode,
    mtm_dirty: f64,
    notional: f64,
    payment_leg: LegType,
    receive_leg: LegType,
    market: MarketParams,
    maturity: f64,
    time_bucket: TimeBucket,
    is_call: f64,
    delta: f64,
}

impl Instrument {
    /// Returns a builder for constructing instruments directly.
    pub fn builder() -> InstrumentBuilder {
        InstrumentBuilder::new()
    }

    /// Builds an instrument from a raw trade record.
    ///
    /// # Errors
    ///
    /// - `SaCcrError::InvalidField` for an unparseable timestamp or leg type,
    ///   naming the trade and the field
    /// - `SaCcrError::DegenerateMaturity` for a swaption whose maturity is
    ///   not strictly positive
    /// - `SaCcrError::InvalidParams` when `market` fails validation
    pub fn from_record(record: &TradeRecord, market: &MarketParams) -> Result<Self> {
        let id = record.id.as_str();

        let contract_type = ContractType::from_label(&record.contract_type);
        if !contract_type.is_linear() && record.contract_type != "swaption" {
            warn!(
                trade_id = id,
                label = %record.contract_type,
                "Unrecognised contract type, treating as swaption"
            );
        }

        let fields = InstrumentFields {
            id: TradeId::new(id),
            type_label: record.contract_type.clone(),
            contract_type,
            asset_class: record.asset_class.clone(),
            as_of: parse_timestamp(id, "date", &record.date)?,
            start_date: parse_timestamp(id, "start_date", &record.start_date)?,
            end_date: parse_timestamp(id, "end_date", &record.end_date)?,
            trade_date: parse_timestamp(id, "trade_date", &record.trade_date)?,
            value_date: parse_timestamp(id, "value_date", &record.value_date)?,
            currency: CurrencyCode::new(record.currency_code.as_str()),
            mtm_dirty: parse_amount(id, "mtm_dirty", record.mtm_dirty)?,
            notional: parse_amount(id, "notional_amount", record.notional_amount)?,
            payment_leg: parse_leg(id, "payment_type", &record.payment_type)?,
            receive_leg: parse_leg(id, "receive_type", &record.receive_type)?,
        };

        Self::new(fields, *market)
    }

    fn new(fields: InstrumentFields, market: MarketParams) -> Result<Self> {
        market.validate()?;

        let maturity = year_fraction(fields.start_date, fields.end_date, market.days_per_year);
        let time_bucket = TimeBucket::from_maturity(maturity);

        let (pay_rate, receive_rate) = market.leg_rates(fields.payment_leg);
        let is_call = if receive_rate > pay_rate { 1.0 } else { -1.0 };

        let delta = match fields.contract_type {
            ContractType::VanillaSwap => is_call,
            ContractType::Swaption => {
                if !(maturity.is_finite() && maturity > 0.0) {
                    return Err(SaCcrError::DegenerateMaturity {
                        trade_id: fields.id.to_string(),
                        maturity,
                    });
                }
                let sigma = market.volatility;
                is_call
                    * market.delta_scaling
                    * ((pay_rate / receive_rate).ln() + 0.5 * sigma.powi(2) * maturity)
                    / (sigma * maturity.sqrt())
            }
        };

        debug!(
            trade_id = %fields.id,
            contract_type = %fields.contract_type,
            maturity,
            bucket = time_bucket.number(),
            is_call,
            delta,
            "Instrument constructed"
        );

        Ok(Self {
            id: fields.id,
            type_label: fields.type_label,
            contract_type: fields.contract_type,
            asset_class: fields.asset_class,
            as_of: fields.as_of,
            start_date: fields.start_date,
            end_date: fields.end_date,
            trade_date: fields.trade_date,
            value_date: fields.value_date,
            currency: fields.currency,
            mtm_dirty: fields.mtm_dirty,
            notional: fields.notional,
            payment_leg: fields.payment_leg,
            receive_leg: fields.receive_leg,
            market,
            maturity,
            time_bucket,
            is_call,
            delta,
        })
    }

    /// Trade identifier.
    #[inline]
    pub fn id(&self) -> &TradeId {
        &self.id
    }

    /// Contract type label exactly as given in the record.
    #[inline]
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Contract type used for the delta dispatch.
    #[inline]
    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    /// Asset class label.
    #[inline]
    pub fn asset_class(&self) -> &str {
        &self.asset_class
    }

    /// Reference as-of timestamp.
    #[inline]
    pub fn as_of(&self) -> Timestamp {
        self.as_of
    }

    /// Contract start timestamp.
    #[inline]
    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    /// Contract end timestamp.
    #[inline]
    pub fn end_date(&self) -> Timestamp {
        self.end_date
    }

    /// Trade timestamp.
    #[inline]
    pub fn trade_date(&self) -> Timestamp {
        self.trade_date
    }

    /// Value timestamp.
    #[inline]
    pub fn value_date(&self) -> Timestamp {
        self.value_date
    }

    /// Currency code of the trade.
    #[inline]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Dirty mark-to-market value.
    #[inline]
    pub fn mtm_dirty(&self) -> f64 {
        self.mtm_dirty
    }

    /// Overwrites the dirty mark-to-market value.
    ///
    /// Derived metrics do not depend on it; only the replacement cost changes.
    #[inline]
    pub fn set_mtm_dirty(&mut self, mtm_dirty: f64) {
        self.mtm_dirty = mtm_dirty;
    }

    /// Notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Pay leg type.
    #[inline]
    pub fn payment_leg(&self) -> LegType {
        self.payment_leg
    }

    /// Receive leg type.
    #[inline]
    pub fn receive_leg(&self) -> LegType {
        self.receive_leg
    }

    /// Maturity in years: whole days from start to end over the day basis.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Maturity bucket.
    #[inline]
    pub fn time_bucket(&self) -> TimeBucket {
        self.time_bucket
    }

    /// `+1.0` when the receive-leg rate strictly exceeds the pay-leg rate,
    /// `-1.0` otherwise (equal rates included).
    #[inline]
    pub fn is_call(&self) -> f64 {
        self.is_call
    }

    /// Supervisory delta.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Maturity factor; always 1 without margining.
    #[inline]
    pub fn maturity_factor(&self) -> f64 {
        MATURITY_FACTOR
    }

    /// Continuously discounted notional over the remaining life of the trade.
    ///
    /// Start and end are measured in years from the as-of date and may be
    /// negative. Returns zero when start equals end.
    pub fn adjusted_notional(&self) -> f64 {
        let basis = self.market.days_per_year;
        let rate = self.market.discount_rate;
        let s = year_fraction(self.as_of, self.start_date, basis);
        let e = year_fraction(self.as_of, self.end_date, basis);
        self.notional * ((-rate * s).exp() - (-rate * e).exp()) / rate
    }

    /// `delta * adjusted_notional * maturity_factor`.
    pub fn effective_notional(&self) -> f64 {
        self.delta * self.adjusted_notional() * MATURITY_FACTOR
    }

    /// Snapshot of the reportable metrics of this instrument.
    pub fn metrics(&self) -> InstrumentMetrics {
        InstrumentMetrics {
            id: self.id.clone(),
            contract_type: self.type_label.clone(),
            currency: self.currency.clone(),
            maturity: self.maturity,
            time_bucket: self.time_bucket,
            notional: self.notional,
            payment_leg: self.payment_leg,
            receive_leg: self.receive_leg,
            mtm_dirty: self.mtm_dirty,
            adjusted_notional: self.adjusted_notional(),
            delta: self.delta,
            effective_notional: self.effective_notional(),
        }
    }
}

struct InstrumentFields {
    id: TradeId,
    type_label: String,
    contract_type: ContractType,
    asset_class: String,
    as_of: Timestamp,
    start_date: Timestamp,
    end_date: Timestamp,
    trade_date: Timestamp,
    value_date: Timestamp,
    currency: CurrencyCode,
    mtm_dirty: f64,
    notional: f64,
    payment_leg: LegType,
    receive_leg: LegType,
}

fn parse_timestamp(trade_id: &str, field: &'static str, value: &str) -> Result<Timestamp> {
    Timestamp::parse(value).map_err(|e| SaCcrError::InvalidField {
        trade_id: trade_id.to_string(),
        field,
        reason: e.to_string(),
    })
}

fn parse_leg(trade_id: &str, field: &'static str, value: &str) -> Result<LegType> {
    value.parse().map_err(|reason| SaCcrError::InvalidField {
        trade_id: trade_id.to_string(),
        field,
        reason,
    })
}

fn parse_amount(trade_id: &str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SaCcrError::InvalidField {
            trade_id: trade_id.to_string(),
            field,
            reason: format!("expected a finite number, got {}", value),
        })
    }
}

/// Builder for [`Instrument`].
///
/// `id`, `currency`, `as_of`, `start_date`, `end_date`, `notional` and
/// `payment_leg` are required. The receive leg defaults to the opposite of the
/// pay leg, dates not set default to the as-of date, the contract type
/// defaults to a vanilla swap and market parameters to their defaults.
#[derive(Clone, Debug, Default)]
pub struct InstrumentBuilder {
    id: Option<TradeId>,
    contract_type: Option<ContractType>,
    asset_class: Option<String>,
    as_of: Option<Timestamp>,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
    trade_date: Option<Timestamp>,
    value_date: Option<Timestamp>,
    currency: Option<CurrencyCode>,
    mtm_dirty: f64,
    notional: Option<f64>,
    payment_leg: Option<LegType>,
    receive_leg: Option<LegType>,
    market: Option<MarketParams>,
}

impl InstrumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trade identifier.
    pub fn id(mut self, id: impl Into<TradeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the contract type.
    pub fn contract_type(mut self, contract_type: ContractType) -> Self {
        self.contract_type = Some(contract_type);
        self
    }

    /// Sets the asset class label.
    pub fn asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    /// Sets the reference as-of timestamp.
    pub fn as_of(mut self, as_of: Timestamp) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Sets the contract start timestamp.
    pub fn start_date(mut self, date: Timestamp) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the contract end timestamp.
    pub fn end_date(mut self, date: Timestamp) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the trade timestamp.
    pub fn trade_date(mut self, date: Timestamp) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Sets the value timestamp.
    pub fn value_date(mut self, date: Timestamp) -> Self {
        self.value_date = Some(date);
        self
    }

    /// Sets the currency code.
    pub fn currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the dirty mark-to-market value (default 0).
    pub fn mtm_dirty(mut self, mtm_dirty: f64) -> Self {
        self.mtm_dirty = mtm_dirty;
        self
    }

    /// Sets the notional amount.
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the pay leg type.
    pub fn payment_leg(mut self, leg: LegType) -> Self {
        self.payment_leg = Some(leg);
        self
    }

    /// Sets the receive leg type.
    pub fn receive_leg(mut self, leg: LegType) -> Self {
        self.receive_leg = Some(leg);
        self
    }

    /// Sets the market parameters.
    pub fn market(mut self, market: MarketParams) -> Self {
        self.market = Some(market);
        self
    }

    /// Builds the instrument.
    ///
    /// # Errors
    ///
    /// - `SaCcrError::MissingField` if a required field is not set
    /// - `SaCcrError::InvalidField` if the notional or mtm is not finite
    /// - `SaCcrError::DegenerateMaturity` as for [`Instrument::from_record`]
    pub fn build(self) -> Result<Instrument> {
        let id = self.id.ok_or(SaCcrError::MissingField { field: "id" })?;
        let currency = self
            .currency
            .ok_or(SaCcrError::MissingField { field: "currency" })?;
        let as_of = self.as_of.ok_or(SaCcrError::MissingField { field: "as_of" })?;
        let start_date = self
            .start_date
            .ok_or(SaCcrError::MissingField { field: "start_date" })?;
        let end_date = self
            .end_date
            .ok_or(SaCcrError::MissingField { field: "end_date" })?;
        let notional = self
            .notional
            .ok_or(SaCcrError::MissingField { field: "notional" })?;
        let payment_leg = self
            .payment_leg
            .ok_or(SaCcrError::MissingField { field: "payment_leg" })?;
        let receive_leg = self.receive_leg.unwrap_or(match payment_leg {
            LegType::Fixed => LegType::Floating,
            LegType::Floating => LegType::Fixed,
        });
        let contract_type = self.contract_type.unwrap_or(ContractType::VanillaSwap);
        let mtm_dirty = parse_amount(id.as_str(), "mtm_dirty", self.mtm_dirty)?;
        let notional = parse_amount(id.as_str(), "notional_amount", notional)?;

        let fields = InstrumentFields {
            id,
            type_label: contract_type.label().to_string(),
            contract_type,
            asset_class: self.asset_class.unwrap_or_else(|| "ir".to_string()),
            as_of,
            start_date,
            end_date,
            trade_date: self.trade_date.unwrap_or(as_of),
            value_date: self.value_date.unwrap_or(as_of),
            currency,
            mtm_dirty,
            notional,
            payment_leg,
            receive_leg,
        };

        Instrument::new(fields, self.market.unwrap_or_default())
    }
}
