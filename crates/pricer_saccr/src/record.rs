//! FIRE trade record schema.
//!
//! One [`TradeRecord`] mirrors one element of the `data` array of a FIRE
//! derivatives file. Fields are kept as raw strings and numbers; interpretation
//! (timestamps, leg types, contract type) happens in
//! [`Instrument::from_record`](crate::Instrument::from_record) so failures can
//! name the trade and field involved.

use serde::{Deserialize, Serialize};

/// Raw trade record as it appears in the input file.
///
/// All listed fields are required; fields not listed here are ignored.
///
/// # Examples
///
/// ```
/// use pricer_saccr::TradeRecord;
///
/// let json = r#"{
///     "id": "IRS001", "type": "vanilla_swap", "asset_class": "ir",
///     "date": "2018-06-29T00:00:00Z", "start_date": "2018-07-02T00:00:00Z",
///     "end_date": "2023-07-02T00:00:00Z", "trade_date": "2018-06-28T00:00:00Z",
///     "currency_code": "USD", "value_date": "2018-06-29T00:00:00Z",
///     "mtm_dirty": 1250.5, "notional_amount": 10000000,
///     "payment_type": "floating", "receive_type": "fixed"
/// }"#;
/// let record: TradeRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.contract_type, "vanilla_swap");
/// assert_eq!(record.notional_amount, 10_000_000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Trade identifier
    pub id: String,
    /// Contract type label (`vanilla_swap`, `swaption`, ...)
    #[serde(rename = "type")]
    pub contract_type: String,
    /// Asset class label, carried through unchanged
    pub asset_class: String,
    /// Reference as-of timestamp
    pub date: String,
    /// Contract start timestamp
    pub start_date: String,
    /// Contract end timestamp
    pub end_date: String,
    /// Trade timestamp
    pub trade_date: String,
    /// Currency code (hedging-set key)
    pub currency_code: String,
    /// Value timestamp
    pub value_date: String,
    /// Dirty mark-to-market value
    pub mtm_dirty: f64,
    /// Notional amount
    pub notional_amount: f64,
    /// Pay leg type (`fixed` or `floating`)
    pub payment_type: String,
    /// Receive leg type (`fixed` or `floating`)
    pub receive_type: String,
}
