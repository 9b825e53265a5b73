//! Market and supervisory parameters for the SA-CCR calculation.
//!
//! Every constant the exposure formulas depend on lives here rather than
//! inline, so alternative market scenarios can be supplied from configuration.
//! The defaults reproduce the standard example values:
//!
//! | Parameter            | Default        |
//! |----------------------|----------------|
//! | floating rate        | 0.06           |
//! | fixed rate           | 0.05           |
//! | volatility           | 0.50           |
//! | discount rate        | 0.05           |
//! | delta scaling        | (1 + √5) / 2   |
//! | days per year        | 365            |
//! | supervisory factor   | 0.005          |
//! | multiplier           | 1              |
//! | PFE floor            | 60             |
//! | alpha                | 1.4            |

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaCcrError};
use crate::instrument::LegType;

/// Reference rates and model constants used per instrument.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketParams {
    /// Reference rate of a floating leg.
    pub floating_rate: f64,
    /// Reference rate of a fixed leg.
    pub fixed_rate: f64,
    /// Volatility used by the swaption delta.
    pub volatility: f64,
    /// Continuous rate used to discount the adjusted notional.
    pub discount_rate: f64,
    /// Scaling constant applied to the swaption delta term.
    pub delta_scaling: f64,
    /// Day basis for converting whole days into years.
    pub days_per_year: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            floating_rate: 0.06,
            fixed_rate: 0.05,
            volatility: 0.5,
            discount_rate: 0.05,
            delta_scaling: (1.0 + 5.0_f64.sqrt()) / 2.0,
            days_per_year: 365.0,
        }
    }
}

impl MarketParams {
    /// Returns `(pay_rate, receive_rate)` for a trade with the given pay leg.
    ///
    /// A floating pay leg pays the floating rate and receives the fixed rate;
    /// any other pay leg is the mirror image.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_saccr::{LegType, MarketParams};
    ///
    /// let market = MarketParams::default();
    /// assert_eq!(market.leg_rates(LegType::Floating), (0.06, 0.05));
    /// assert_eq!(market.leg_rates(LegType::Fixed), (0.05, 0.06));
    /// ```
    #[inline]
    pub fn leg_rates(&self, payment_leg: LegType) -> (f64, f64) {
        match payment_leg {
            LegType::Floating => (self.floating_rate, self.fixed_rate),
            LegType::Fixed => (self.fixed_rate, self.floating_rate),
        }
    }

    /// Validates the market constants, reporting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `SaCcrError::InvalidParams` listing each out-of-range value.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    fn collect_errors(&self, errors: &mut Vec<String>) {
        // Both rates feed ln(pay / receive).
        positive(errors, "market.floating_rate", self.floating_rate);
        positive(errors, "market.fixed_rate", self.fixed_rate);
        positive(errors, "market.volatility", self.volatility);
        positive(errors, "market.discount_rate", self.discount_rate);
        positive(errors, "market.days_per_year", self.days_per_year);
        finite(errors, "market.delta_scaling", self.delta_scaling);
    }
}

/// Regulatory constants owned by the aggregator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupervisoryParams {
    /// Supervisory factor applied to each hedging-set aggregate.
    pub supervisory_factor: f64,
    /// PFE multiplier; 1 in the absence of margining.
    pub multiplier: f64,
    /// Fixed add-on offset inside the EAD formula.
    pub pfe_floor: f64,
    /// Regulatory alpha applied to the whole exposure.
    pub alpha: f64,
}

impl Default for SupervisoryParams {
    fn default() -> Self {
        Self {
            supervisory_factor: 0.005,
            multiplier: 1.0,
            pfe_floor: 60.0,
            alpha: 1.4,
        }
    }
}

impl SupervisoryParams {
    /// Validates the aggregation constants.
    ///
    /// # Errors
    ///
    /// Returns `SaCcrError::InvalidParams` listing each out-of-range value.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    fn collect_errors(&self, errors: &mut Vec<String>) {
        positive(errors, "supervisory.supervisory_factor", self.supervisory_factor);
        if !(self.multiplier.is_finite() && self.multiplier > 0.0 && self.multiplier <= 1.0) {
            errors.push(format!(
                "supervisory.multiplier must be in (0, 1], got {}",
                self.multiplier
            ));
        }
        finite(errors, "supervisory.pfe_floor", self.pfe_floor);
        positive(errors, "supervisory.alpha", self.alpha);
    }
}

/// Complete parameter set for one SA-CCR run.
///
/// # Examples
///
/// ```
/// use pricer_saccr::SaCcrParams;
///
/// let params = SaCcrParams::default();
/// assert!(params.validate().is_ok());
/// assert_eq!(params.supervisory.alpha, 1.4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaCcrParams {
    /// Per-instrument market constants.
    pub market: MarketParams,
    /// Aggregation constants.
    pub supervisory: SupervisoryParams,
}

impl SaCcrParams {
    /// Validates every parameter, reporting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `SaCcrError::InvalidParams` listing each out-of-range value.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        self.market.collect_errors(&mut errors);
        self.supervisory.collect_errors(&mut errors);
        into_result(errors)
    }
}

fn into_result(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SaCcrError::InvalidParams(errors))
    }
}

fn positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{} must be positive and finite, got {}", name, value));
    }
}

fn finite(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{} must be finite, got {}", name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_validate() {
        assert!(SaCcrParams::default().validate().is_ok());
    }

    #[test]
    fn test_default_delta_scaling_is_golden_ratio() {
        let market = MarketParams::default();
        assert!((market.delta_scaling - 1.618_033_988_749_895).abs() < 1e-15);
        // phi^2 = phi + 1
        let phi = market.delta_scaling;
        assert!((phi * phi - phi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_non_positive_rates() {
        let mut params = SaCcrParams::default();
        params.market.fixed_rate = 0.0;
        params.market.floating_rate = -0.01;

        match params.validate() {
            Err(SaCcrError::InvalidParams(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("market.fixed_rate")));
                assert!(errors.iter().any(|e| e.contains("market.floating_rate")));
            }
            other => panic!("Expected InvalidParams, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_volatility() {
        let mut params = SaCcrParams::default();
        params.market.volatility = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_multiplier_range() {
        let mut params = SaCcrParams::default();
        params.supervisory.multiplier = 1.5;

        match params.validate() {
            Err(SaCcrError::InvalidParams(errors)) => {
                assert!(errors[0].contains("supervisory.multiplier"));
            }
            other => panic!("Expected InvalidParams, got {:?}", other),
        }

        params.supervisory.multiplier = 0.8;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_multiple_errors() {
        let mut params = SaCcrParams::default();
        params.market.discount_rate = 0.0;
        params.supervisory.alpha = -1.0;
        params.supervisory.pfe_floor = f64::INFINITY;

        match params.validate() {
            Err(SaCcrError::InvalidParams(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected InvalidParams, got {:?}", other),
        }
    }

    #[test]
    fn test_market_and_supervisory_validate_separately() {
        let market = MarketParams {
            volatility: 0.0,
            ..MarketParams::default()
        };
        let supervisory = SupervisoryParams {
            alpha: f64::NAN,
            ..SupervisoryParams::default()
        };

        match market.validate() {
            Err(SaCcrError::InvalidParams(errors)) => {
                assert_eq!(errors, vec!["market.volatility must be positive and finite, got 0"]);
            }
            other => panic!("Expected InvalidParams, got {:?}", other),
        }
        match supervisory.validate() {
            Err(SaCcrError::InvalidParams(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("supervisory.alpha"));
            }
            other => panic!("Expected InvalidParams, got {:?}", other),
        }
        assert!(MarketParams::default().validate().is_ok());
        assert!(SupervisoryParams::default().validate().is_ok());
    }

    #[test]
    fn test_partial_deserialisation_keeps_defaults() {
        let json = r#"{ "market": { "volatility": 0.3 } }"#;
        let params: SaCcrParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.market.volatility, 0.3);
        assert_eq!(params.market.fixed_rate, 0.05);
        assert_eq!(params.supervisory, SupervisoryParams::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{ "market": { "volatilty": 0.3 } }"#;
        assert!(serde_json::from_str::<SaCcrParams>(json).is_err());
    }
}
