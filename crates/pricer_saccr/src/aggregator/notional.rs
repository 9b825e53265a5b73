//! Correlation-adjusted combination of effective notionals.

use crate::error::{Result, SaCcrError};

/// Largest number of effective notionals the combination formula accepts.
pub const MAX_HEDGING_SET_SIZE: usize = 3;

/// Cross-term weight between the first slot and each of the others.
const LEAD_CROSS_WEIGHT: f64 = 1.4;

/// Cross-term weight between the second and third slots.
const TAIL_CROSS_WEIGHT: f64 = 0.6;

/// Combines up to three effective notionals into one hedging-set aggregate.
///
/// Missing slots are zero:
///
/// ```text
/// sqrt(a² + b² + c² + 1.4ab + 1.4ac + 0.6bc)
/// ```
///
/// The quadratic form is positive definite, so the radicand is never
/// negative. An empty slice yields zero.
///
/// # Errors
///
/// Returns `SaCcrError::FormulaArity` for more than three values.
///
/// # Examples
///
/// ```
/// use pricer_saccr::calc_notional_amount;
///
/// assert_eq!(calc_notional_amount(&[5.0]).unwrap(), 5.0);
/// let two = calc_notional_amount(&[3.0, 4.0]).unwrap();
/// assert!((two - (9.0_f64 + 16.0 + 1.4 * 12.0).sqrt()).abs() < 1e-12);
/// assert!(calc_notional_amount(&[1.0, 2.0, 3.0, 4.0]).is_err());
/// ```
pub fn calc_notional_amount(values: &[f64]) -> Result<f64> {
    if values.len() > MAX_HEDGING_SET_SIZE {
        return Err(SaCcrError::FormulaArity {
            count: values.len(),
            max: MAX_HEDGING_SET_SIZE,
        });
    }

    let slot = |i: usize| values.get(i).copied().unwrap_or(0.0);
    let (a, b, c) = (slot(0), slot(1), slot(2));

    let radicand = a * a
        + b * b
        + c * c
        + LEAD_CROSS_WEIGHT * a * b
        + LEAD_CROSS_WEIGHT * a * c
        + TAIL_CROSS_WEIGHT * b * c;

    Ok(radicand.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference(a: f64, b: f64, c: f64) -> f64 {
        (a * a + b * b + c * c + 1.4 * a * b + 1.4 * a * c + 0.6 * b * c).sqrt()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calc_notional_amount(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_value_is_identity() {
        for a in [0.0, 1.0, 0.125, 4_428_251.155_600_806, 1e12] {
            assert_eq!(calc_notional_amount(&[a]).unwrap(), a);
            assert_eq!(calc_notional_amount(&[a, 0.0, 0.0]).unwrap(), a);
        }
    }

    #[test]
    fn test_single_negative_value_gives_magnitude() {
        assert_eq!(calc_notional_amount(&[-250.0]).unwrap(), 250.0);
    }

    #[test]
    fn test_missing_slots_default_to_zero() {
        let two = calc_notional_amount(&[0.3, 0.7]).unwrap();
        let padded = calc_notional_amount(&[0.3, 0.7, 0.0]).unwrap();
        assert_eq!(two, padded);
    }

    #[test]
    fn test_coefficient_placement() {
        // a-b cross term uses 1.4
        assert_relative_eq!(
            calc_notional_amount(&[1.0, 1.0, 0.0]).unwrap(),
            3.4_f64.sqrt(),
            epsilon = 1e-15
        );
        // a-c cross term uses 1.4
        assert_relative_eq!(
            calc_notional_amount(&[1.0, 0.0, 1.0]).unwrap(),
            3.4_f64.sqrt(),
            epsilon = 1e-15
        );
        // b-c cross term uses 0.6
        assert_relative_eq!(
            calc_notional_amount(&[0.0, 1.0, 1.0]).unwrap(),
            2.6_f64.sqrt(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_swapping_b_and_c_is_symmetric_but_a_is_not() {
        let abc = calc_notional_amount(&[1.0, 2.0, 3.0]).unwrap();
        let acb = calc_notional_amount(&[1.0, 3.0, 2.0]).unwrap();
        let bac = calc_notional_amount(&[2.0, 1.0, 3.0]).unwrap();
        assert_relative_eq!(abc, acb, epsilon = 1e-12);
        assert!((abc - bac).abs() > 1e-6);
    }

    #[test]
    fn test_rejects_fourth_value() {
        let err = calc_notional_amount(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, SaCcrError::FormulaArity { count: 4, max: 3 });
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_matches_closed_form(
                a in -1e7f64..1e7,
                b in -1e7f64..1e7,
                c in -1e7f64..1e7,
            ) {
                let got = calc_notional_amount(&[a, b, c]).unwrap();
                prop_assert!(got >= 0.0);
                prop_assert!((got - reference(a, b, c)).abs() <= 1e-9 * got.max(1.0));
            }

            #[test]
            fn test_single_non_negative_identity(a in 0.0f64..1e12) {
                prop_assert_eq!(calc_notional_amount(&[a, 0.0, 0.0]).unwrap(), a);
            }
        }
    }
}
