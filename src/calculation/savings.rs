//! Savings formulas.
//!
//! Estimates what an organization saves over a three-year horizon by
//! replacing agency hours with staff hired through the program. Two formulas
//! exist; they differ only in whether the agency rate is inflated by 20%
//! before the agency/staff differential is taken.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::FormulaVariant;

/// Annual productive hours per FTE.
pub const ANNUAL_HOURS_PER_FTE: Decimal = Decimal::from_parts(1872, 0, 0, false, 0);

/// Evaluation horizon in years.
pub const HORIZON_YEARS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Fixed program cost per FTE hired.
pub const PROGRAM_COST_PER_FTE: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Combined employer FICA rate (7.65%).
pub const EMPLOYER_FICA_RATE: Decimal = Decimal::from_parts(765, 0, 0, false, 4);

/// Multiplier applied to the agency rate by the alternative formula.
pub const ALT_AGENCY_RATE_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// The three editable inputs of a savings calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInputs {
    /// Hourly cost of staff labor.
    pub staff_rate: Decimal,
    /// Hourly cost of agency labor.
    pub agency_rate: Decimal,
    /// Estimated number of additional RNs needed.
    pub rn_need: Decimal,
}

impl SavingsInputs {
    /// Creates a new set of inputs.
    pub fn new(staff_rate: Decimal, agency_rate: Decimal, rn_need: Decimal) -> Self {
        Self {
            staff_rate,
            agency_rate,
            rn_need,
        }
    }
}

/// Every intermediate term of a savings calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    /// The formula that produced this breakdown.
    pub formula: FormulaVariant,
    /// Agency hours replaced over the horizon.
    pub hours_replaced: Decimal,
    /// Agency rate after any formula adjustment.
    pub effective_agency_rate: Decimal,
    /// Avoided agency premium over staff cost.
    pub agency_cost: Decimal,
    /// Fixed program cost for the hired FTEs.
    pub program_cost: Decimal,
    /// Avoided employer payroll tax.
    pub fica_savings: Decimal,
    /// Net estimated savings.
    pub savings: Decimal,
}

/// Computes estimated savings with the standard formula.
///
/// ```text
/// hours_replaced = rn_need * 1872 * 3
/// agency_cost    = hours_replaced * (agency_rate - staff_rate)
/// program_cost   = rn_need * 50000
/// fica_savings   = staff_rate * 0.0765 * hours_replaced
/// savings        = agency_cost - program_cost + fica_savings
/// ```
///
/// # Examples
///
/// ```
/// use savings_engine::calculation::compute_savings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let savings = compute_savings(
///     Decimal::from_str("40.00").unwrap(),
///     Decimal::from_str("90.00").unwrap(),
///     Decimal::from_str("10.0").unwrap(),
/// );
/// assert_eq!(savings, Decimal::from_str("2479849.60").unwrap());
/// ```
///
/// # Panics
///
/// Panics like `Decimal` arithmetic does when an intermediate term leaves
/// the representable range. Use [`savings_breakdown`] for untrusted input.
pub fn compute_savings(staff_rate: Decimal, agency_rate: Decimal, rn_need: Decimal) -> Decimal {
    let hours_replaced = rn_need * ANNUAL_HOURS_PER_FTE * HORIZON_YEARS;
    hours_replaced * (agency_rate - staff_rate) - rn_need * PROGRAM_COST_PER_FTE
        + staff_rate * EMPLOYER_FICA_RATE * hours_replaced
}

/// Computes estimated savings with the alternative formula.
///
/// Identical to [`compute_savings`] except the agency rate is multiplied by
/// 1.2 first, and panics under the same conditions.
///
/// # Examples
///
/// ```
/// use savings_engine::calculation::compute_savings_alt;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let savings = compute_savings_alt(
///     Decimal::from_str("40.00").unwrap(),
///     Decimal::from_str("90.00").unwrap(),
///     Decimal::from_str("10.0").unwrap(),
/// );
/// assert_eq!(savings, Decimal::from_str("3490729.60").unwrap());
/// ```
pub fn compute_savings_alt(
    staff_rate: Decimal,
    agency_rate: Decimal,
    rn_need: Decimal,
) -> Decimal {
    compute_savings(staff_rate, agency_rate * ALT_AGENCY_RATE_MULTIPLIER, rn_need)
}

/// Computes every term of the savings formula selected by `formula`.
///
/// The caller decides which formula applies; this function takes no
/// per-record flag. Every step is checked, so inputs whose products leave
/// the `Decimal` range yield [`EngineError::InvalidInput`] instead of a panic.
pub fn savings_breakdown(
    inputs: SavingsInputs,
    formula: FormulaVariant,
) -> EngineResult<SavingsBreakdown> {
    checked_breakdown(inputs, formula).ok_or_else(|| EngineError::InvalidInput {
        field: "inputs".to_string(),
        message: format!(
            "savings for staff rate {}, agency rate {} and RN need {} exceed the supported numeric range",
            inputs.staff_rate, inputs.agency_rate, inputs.rn_need
        ),
    })
}

fn checked_breakdown(inputs: SavingsInputs, formula: FormulaVariant) -> Option<SavingsBreakdown> {
    let effective_agency_rate = match formula {
        FormulaVariant::Standard => inputs.agency_rate,
        FormulaVariant::Alt => inputs.agency_rate.checked_mul(ALT_AGENCY_RATE_MULTIPLIER)?,
    };

    let hours_replaced = inputs
        .rn_need
        .checked_mul(ANNUAL_HOURS_PER_FTE)?
        .checked_mul(HORIZON_YEARS)?;
    let agency_cost =
        hours_replaced.checked_mul(effective_agency_rate.checked_sub(inputs.staff_rate)?)?;
    let program_cost = inputs.rn_need.checked_mul(PROGRAM_COST_PER_FTE)?;
    let fica_savings = inputs
        .staff_rate
        .checked_mul(EMPLOYER_FICA_RATE)?
        .checked_mul(hours_replaced)?;
    let savings = agency_cost
        .checked_sub(program_cost)?
        .checked_add(fica_savings)?;

    Some(SavingsBreakdown {
        formula,
        hours_replaced,
        effective_agency_rate,
        agency_cost,
        program_cost,
        fica_savings,
        savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn inputs(staff: &str, agency: &str, rn: &str) -> SavingsInputs {
        SavingsInputs::new(dec(staff), dec(agency), dec(rn))
    }

    #[test]
    fn test_standard_reference_scenario() {
        let result = savings_breakdown(inputs("40.00", "90.00", "10.0"), FormulaVariant::Standard)
            .unwrap();

        assert_eq!(result.hours_replaced, dec("56160"));
        assert_eq!(result.effective_agency_rate, dec("90.00"));
        assert_eq!(result.agency_cost, dec("2808000"));
        assert_eq!(result.program_cost, dec("500000"));
        assert_eq!(result.fica_savings, dec("171849.60"));
        assert_eq!(result.savings, dec("2479849.60"));
    }

    #[test]
    fn test_alt_reference_scenario() {
        let result = savings_breakdown(inputs("40.00", "90.00", "10.0"), FormulaVariant::Alt).unwrap();

        assert_eq!(result.effective_agency_rate, dec("108.00"));
        assert_eq!(result.agency_cost, dec("3818880"));
        assert_eq!(result.program_cost, dec("500000"));
        assert_eq!(result.fica_savings, dec("171849.60"));
        assert_eq!(result.savings, dec("3490729.60"));
    }

    #[test]
    fn test_public_functions_match_breakdown() {
        let i = inputs("52.75", "118.40", "7.3");
        assert_eq!(
            compute_savings(i.staff_rate, i.agency_rate, i.rn_need),
            savings_breakdown(i, FormulaVariant::Standard).unwrap().savings
        );
        assert_eq!(
            compute_savings_alt(i.staff_rate, i.agency_rate, i.rn_need),
            savings_breakdown(i, FormulaVariant::Alt).unwrap().savings
        );
    }

    #[test]
    fn test_zero_rn_need_yields_zero_savings() {
        assert!(compute_savings(dec("40"), dec("90"), Decimal::ZERO).is_zero());
        assert!(compute_savings_alt(dec("40"), dec("90"), Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_equal_rates_leave_only_fica_minus_program_cost() {
        let result =
            savings_breakdown(inputs("45.00", "45.00", "4.0"), FormulaVariant::Standard).unwrap();

        assert!(result.agency_cost.is_zero());
        assert_eq!(result.savings, result.fica_savings - result.program_cost);
    }

    #[test]
    fn test_agency_cheaper_than_staff_can_go_negative() {
        let savings = compute_savings(dec("60.00"), dec("30.00"), dec("2.0"));
        assert!(savings.is_sign_negative());
    }

    #[test]
    fn test_negative_inputs_are_accepted() {
        let savings = compute_savings(dec("-10"), dec("20"), dec("-1"));
        // hours -5616; agency -168480; program -50000; fica 4296.24
        assert_eq!(savings, dec("-114183.76"));
    }

    #[test]
    fn test_out_of_range_inputs_are_rejected() {
        let huge = inputs("40.00", "90.00", "79228162514264337593543950335");

        for formula in [FormulaVariant::Standard, FormulaVariant::Alt] {
            let err = savings_breakdown(huge, formula).unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "inputs"));
        }
    }

    #[test]
    fn test_large_agency_rate_overflows_only_under_alt() {
        let i = inputs("0", "79228162514264337593543950335", "0");

        assert!(savings_breakdown(i, FormulaVariant::Standard).is_ok());
        assert!(savings_breakdown(i, FormulaVariant::Alt).is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(ANNUAL_HOURS_PER_FTE, dec("1872"));
        assert_eq!(HORIZON_YEARS, dec("3"));
        assert_eq!(PROGRAM_COST_PER_FTE, dec("50000"));
        assert_eq!(EMPLOYER_FICA_RATE, dec("0.0765"));
        assert_eq!(ALT_AGENCY_RATE_MULTIPLIER, dec("1.2"));
    }

    fn money() -> impl Strategy<Value = Decimal> {
        (-50_000i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn need() -> impl Strategy<Value = Decimal> {
        (-1_000i64..10_000i64).prop_map(|tenths| Decimal::new(tenths, 1))
    }

    proptest! {
        #[test]
        fn prop_deterministic(s in money(), a in money(), n in need()) {
            prop_assert_eq!(compute_savings(s, a, n), compute_savings(s, a, n));
            prop_assert_eq!(compute_savings_alt(s, a, n), compute_savings_alt(s, a, n));
        }

        #[test]
        fn prop_alt_equals_standard_with_scaled_agency_rate(s in money(), a in money(), n in need()) {
            prop_assert_eq!(
                compute_savings_alt(s, a, n),
                compute_savings(s, a * ALT_AGENCY_RATE_MULTIPLIER, n)
            );
        }

        #[test]
        fn prop_linear_in_rn_need(s in money(), a in money(), n in need()) {
            let two = Decimal::TWO;
            prop_assert_eq!(compute_savings(s, a, two * n), two * compute_savings(s, a, n));
        }

        #[test]
        fn prop_checked_breakdown_matches_plain_formula(s in money(), a in money(), n in need()) {
            let i = SavingsInputs::new(s, a, n);
            prop_assert_eq!(
                savings_breakdown(i, FormulaVariant::Standard).unwrap().savings,
                compute_savings(s, a, n)
            );
            prop_assert_eq!(
                savings_breakdown(i, FormulaVariant::Alt).unwrap().savings,
                compute_savings_alt(s, a, n)
            );
        }

        #[test]
        fn prop_equal_rates_zero_agency_cost(s in money(), n in need()) {
            let result = savings_breakdown(SavingsInputs::new(s, s, n), FormulaVariant::Standard).unwrap();
            prop_assert!(result.agency_cost.is_zero());
            prop_assert_eq!(result.savings, result.fica_savings - result.program_cost);
        }
    }
}
