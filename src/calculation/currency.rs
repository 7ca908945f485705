//! Australian dollar display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole Australian dollars, e.g. `$67,200`.
///
/// The magnitude is always displayed; callers decide how to word a negative
/// difference ("more" or "less") before formatting it.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(67200)), "$67,200");
/// assert_eq!(format_currency(dec!(1055.92)), "$1,056");
/// assert_eq!(format_currency(dec!(-13567.36)), "$13,567");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let dollars = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc()
        .to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3 + 1);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}", grouped)
}
