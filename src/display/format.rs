//! Number formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// The sign follows the dollar sign, so a loss reads `$-1,250.00`.
///
/// # Examples
///
/// ```
/// use savings_engine::display::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("2479849.6").unwrap()), "$2,479,849.60");
/// assert_eq!(format_currency(Decimal::from_str("-1250").unwrap()), "$-1,250.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("${}{}.{}", sign, group_thousands(whole), fraction)
}

/// Formats an RN count with one decimal place.
pub fn format_rn_need(rn_need: Decimal) -> String {
    format!("{:.1}", round_one_decimal(rn_need))
}

/// Rounds half-to-even to one decimal place.
///
/// Ties are resolved on the exact decimal value, so `0.35` and `0.45` both
/// round to `0.4`. Rounding the nearest binary float instead gives `0.3`
/// and `0.5`, so such ties can differ from a float-based display.
pub fn round_one_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
