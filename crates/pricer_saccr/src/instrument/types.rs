//! Enumerations describing a single trade.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Contract type of an interest-rate trade.
///
/// The delta formula is dispatched on this type: vanilla swaps are linear,
/// everything else goes through the swaption formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Plain fixed/floating interest rate swap.
    VanillaSwap,
    /// Option on a swap, and any other non-linear label.
    Swaption,
}

impl ContractType {
    /// Maps a record label onto a contract type.
    ///
    /// Only `vanilla_swap` is linear; any other label is treated as
    /// swaption-like.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_saccr::ContractType;
    ///
    /// assert_eq!(ContractType::from_label("vanilla_swap"), ContractType::VanillaSwap);
    /// assert_eq!(ContractType::from_label("swaption"), ContractType::Swaption);
    /// assert_eq!(ContractType::from_label("cap"), ContractType::Swaption);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label {
            "vanilla_swap" => ContractType::VanillaSwap,
            _ => ContractType::Swaption,
        }
    }

    /// Returns the canonical record label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::VanillaSwap => "vanilla_swap",
            ContractType::Swaption => "swaption",
        }
    }

    /// Whether the delta of this contract is ±1.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, ContractType::VanillaSwap)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rate type of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegType {
    /// Fixed-rate leg.
    Fixed,
    /// Floating-rate leg.
    Floating,
}

impl LegType {
    /// Returns the record label of this leg type.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            LegType::Fixed => "fixed",
            LegType::Floating => "floating",
        }
    }
}

impl fmt::Display for LegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses the exact lowercase labels `fixed` and `floating`.
///
/// Matching is case-sensitive: `"Floating"` is rejected rather than read as
/// either leg, since a wrong guess would flip the trade's direction.
impl FromStr for LegType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(LegType::Fixed),
            "floating" => Ok(LegType::Floating),
            _ => Err(format!(
                "Unknown leg type: '{}'. Supported: fixed, floating",
                s
            )),
        }
    }
}

/// Residual maturity bucket.
///
/// Breakpoints are exactly 1 and 5 years; a maturity equal to a breakpoint
/// falls into the longer bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeBucket {
    /// Maturity below one year (bucket 1).
    UnderOneYear = 1,
    /// Maturity from one up to five years (bucket 2).
    OneToFiveYears = 2,
    /// Maturity of five years or more (bucket 3).
    OverFiveYears = 3,
}

impl TimeBucket {
    /// Classifies a maturity in years.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_saccr::TimeBucket;
    ///
    /// assert_eq!(TimeBucket::from_maturity(0.99).number(), 1);
    /// assert_eq!(TimeBucket::from_maturity(1.0).number(), 2);
    /// assert_eq!(TimeBucket::from_maturity(5.0).number(), 3);
    /// ```
    pub fn from_maturity(maturity: f64) -> Self {
        if maturity < 1.0 {
            TimeBucket::UnderOneYear
        } else if maturity < 5.0 {
            TimeBucket::OneToFiveYears
        } else {
            TimeBucket::OverFiveYears
        }
    }

    /// Returns the bucket number (1, 2 or 3).
    #[inline]
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl Serialize for TimeBucket {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leg_type_from_str() {
        assert_eq!("fixed".parse::<LegType>().unwrap(), LegType::Fixed);
        assert_eq!("floating".parse::<LegType>().unwrap(), LegType::Floating);
        assert!("Floating".parse::<LegType>().is_err());
        assert!("FIXED".parse::<LegType>().is_err());
        assert!(" fixed".parse::<LegType>().is_err());
        let err = "variable".parse::<LegType>().unwrap_err();
        assert!(err.contains("variable"));
    }

    #[test]
    fn test_contract_type_label_roundtrip() {
        for ct in [ContractType::VanillaSwap, ContractType::Swaption] {
            assert_eq!(ContractType::from_label(ct.label()), ct);
        }
        assert!(ContractType::VanillaSwap.is_linear());
        assert!(!ContractType::Swaption.is_linear());
    }

    #[test]
    fn test_time_bucket_breakpoints() {
        assert_eq!(TimeBucket::from_maturity(-0.5), TimeBucket::UnderOneYear);
        assert_eq!(TimeBucket::from_maturity(0.0), TimeBucket::UnderOneYear);
        assert_eq!(
            TimeBucket::from_maturity(1.0 - f64::EPSILON),
            TimeBucket::UnderOneYear
        );
        assert_eq!(TimeBucket::from_maturity(1.0), TimeBucket::OneToFiveYears);
        assert_eq!(TimeBucket::from_maturity(4.999), TimeBucket::OneToFiveYears);
        assert_eq!(TimeBucket::from_maturity(5.0), TimeBucket::OverFiveYears);
        assert_eq!(TimeBucket::from_maturity(30.0), TimeBucket::OverFiveYears);
    }

    #[test]
    fn test_serialisation_labels() {
        assert_eq!(
            serde_json::to_string(&ContractType::VanillaSwap).unwrap(),
            "\"vanilla_swap\""
        );
        assert_eq!(serde_json::to_string(&LegType::Floating).unwrap(), "\"floating\"");
        assert_eq!(serde_json::to_string(&TimeBucket::OverFiveYears).unwrap(), "3");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_bucket_is_monotone_step(a in -10.0f64..40.0, b in -10.0f64..40.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let bucket_lo = TimeBucket::from_maturity(lo);
                let bucket_hi = TimeBucket::from_maturity(hi);
                prop_assert!(bucket_lo <= bucket_hi);
                prop_assert!((1..=3).contains(&bucket_lo.number()));
            }
        }
    }
}
