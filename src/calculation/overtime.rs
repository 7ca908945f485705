//! Overtime multiplier lookup and annual overtime pay.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::OvertimeMultiplier;

/// The fixed set of overtime multipliers.
pub static OVERTIME_MULTIPLIERS: [OvertimeMultiplier; 3] = [
    OvertimeMultiplier {
        id: "1.5x",
        name: "Time and a Half",
        rate: dec!(1.5),
        description: "First hours of weekday overtime",
    },
    OvertimeMultiplier {
        id: "2x",
        name: "Double Time",
        rate: dec!(2.0),
        description: "Extended weekday overtime and Sundays",
    },
    OvertimeMultiplier {
        id: "2.5x",
        name: "Double Time and a Half",
        rate: dec!(2.5),
        description: "Public holidays",
    },
];

/// Looks up a multiplier by exact id.
pub fn get_overtime_multiplier(id: &str) -> Option<&'static OvertimeMultiplier> {
    OVERTIME_MULTIPLIERS
        .iter()
        .find(|multiplier| multiplier.id == id)
}

/// Calculates annual overtime pay.
///
/// `overtime_hours * hourly_rate * multiplier * weeks_per_year`, or zero when
/// no overtime is worked or the multiplier id is not recognised. The product
/// saturates at `Decimal::MAX` rather than overflowing.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_overtime_pay;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_overtime_pay(dec!(40), dec!(5), "1.5x", dec!(48)), dec!(14400));
/// assert_eq!(calculate_overtime_pay(dec!(40), dec!(0), "1.5x", dec!(48)), dec!(0));
/// ```
pub fn calculate_overtime_pay(
    hourly_rate: Decimal,
    overtime_hours: Decimal,
    multiplier_id: &str,
    weeks_per_year: Decimal,
) -> Decimal {
    if overtime_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match get_overtime_multiplier(multiplier_id) {
        Some(multiplier) => overtime_hours
            .saturating_mul(multiplier.loaded_rate(hourly_rate))
            .saturating_mul(weeks_per_year),
        None => Decimal::ZERO,
    }
}
