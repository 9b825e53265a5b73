//! Identifier types for trades and hedging-set keys.
//!
//! Newtypes keep trade identifiers and currency codes from being mixed up
//! with each other or with free-form labels.

use serde::Serialize;
use std::fmt;

/// Unique identifier for a trade.
///
/// # Examples
///
/// ```
/// use pricer_saccr::TradeId;
///
/// let id = TradeId::new("IRS001");
/// assert_eq!(id.as_str(), "IRS001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new trade ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TradeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Currency code used as the hedging-set partition key.
///
/// Codes are kept exactly as they appear in the trade record; `"usd"` and
/// `"USD"` are different hedging sets.
///
/// # Examples
///
/// ```
/// use pricer_saccr::CurrencyCode;
///
/// let ccy = CurrencyCode::new("EUR");
/// assert_eq!(ccy.to_string(), "EUR");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new currency code.
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_is_case_sensitive() {
        assert_ne!(CurrencyCode::new("usd"), CurrencyCode::new("USD"));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&TradeId::from("T001")).unwrap();
        assert_eq!(json, "\"T001\"");
        let json = serde_json::to_string(&CurrencyCode::from("GBP")).unwrap();
        assert_eq!(json, "\"GBP\"");
    }
}
