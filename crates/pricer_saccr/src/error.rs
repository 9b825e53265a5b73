//! SA-CCR error types.
//!
//! This module provides structured error types for instrument construction
//! and exposure aggregation using `thiserror` for derivation.

use thiserror::Error;

/// Errors that can occur while building instruments or aggregating exposure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaCcrError {
    /// A trade record field could not be interpreted.
    #[error("Invalid field '{field}' on trade {trade_id}: {reason}")]
    InvalidField {
        /// Identifier of the offending trade
        trade_id: String,
        /// Name of the record field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Required builder field was not set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Swaption delta is undefined for a non-positive maturity.
    #[error("Degenerate maturity for swaption {trade_id}: T = {maturity}")]
    DegenerateMaturity {
        /// Identifier of the offending trade
        trade_id: String,
        /// Maturity in years
        maturity: f64,
    },

    /// Market or supervisory parameters are out of range.
    #[error("Invalid parameters: {}", .0.join("; "))]
    InvalidParams(Vec<String>),

    /// The notional combination formula received too many values.
    #[error("Notional formula accepts at most {max} values, got {count}")]
    FormulaArity {
        /// Number of values supplied
        count: usize,
        /// Maximum number of values supported
        max: usize,
    },

    /// A hedging set holds more instruments than the notional formula supports.
    #[error("Hedging set {currency} holds {count} instruments, at most {max} are supported")]
    HedgingSetArity {
        /// Currency code of the hedging set
        currency: String,
        /// Number of instruments in the set
        count: usize,
        /// Maximum number of instruments supported
        max: usize,
    },

    /// Aggregation was requested for an empty instrument collection.
    #[error("Portfolio is empty")]
    EmptyPortfolio,
}

/// Result alias for SA-CCR operations.
pub type Result<T> = std::result::Result<T, SaCcrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_field() {
        let err = SaCcrError::InvalidField {
            trade_id: "IRS001".to_string(),
            field: "start_date",
            reason: "bad date".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid field 'start_date' on trade IRS001: bad date"
        );
    }

    #[test]
    fn test_error_display_invalid_params_joins_messages() {
        let err = SaCcrError::InvalidParams(vec![
            "volatility must be positive".to_string(),
            "alpha must be positive".to_string(),
        ]);
        assert_eq!(
            format!("{}", err),
            "Invalid parameters: volatility must be positive; alpha must be positive"
        );
    }

    #[test]
    fn test_error_display_hedging_set_arity() {
        let err = SaCcrError::HedgingSetArity {
            currency: "USD".to_string(),
            count: 4,
            max: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Hedging set USD holds 4 instruments, at most 3 are supported"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(SaCcrError::EmptyPortfolio);
        assert!(err.to_string().contains("empty"));
    }
}
