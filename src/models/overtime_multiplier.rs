//! Overtime rate multiplier model.

use rust_decimal::Decimal;
use serde::Serialize;

/// A named overtime rate, e.g. time and a half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeMultiplier {
    /// Lookup key, e.g. "1.5x".
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Multiple of the ordinary hourly rate.
    pub rate: Decimal,
    /// Short description for display.
    pub description: &'static str,
}

impl OvertimeMultiplier {
    /// Returns the loaded hourly rate for overtime worked at this multiplier.
    ///
    /// ```
    /// use wage_engine::models::OvertimeMultiplier;
    /// use rust_decimal_macros::dec;
    ///
    /// let double_time = OvertimeMultiplier {
    ///     id: "2x",
    ///     name: "Double Time",
    ///     rate: dec!(2.0),
    ///     description: "",
    /// };
    /// assert_eq!(double_time.loaded_rate(dec!(40)), dec!(80.0));
    /// ```
    pub fn loaded_rate(&self, hourly_rate: Decimal) -> Decimal {
        hourly_rate.saturating_mul(self.rate)
    }
}
