//! Progressive income tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive income tax table.
///
/// Brackets are contiguous and ordered from zero upwards. `base_tax` is the
/// cumulative tax payable from every lower bracket, so the tax on an income
/// inside this bracket only needs this bracket's rate.
///
/// # Example
///
/// ```
/// use wage_engine::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = TaxBracket {
///     min: dec!(18201),
///     max: Some(dec!(45000)),
///     rate: dec!(0.16),
///     base_tax: dec!(0),
/// };
///
/// assert!(!bracket.is_tax_free());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    /// The lowest taxable income (in whole dollars) that falls in this bracket.
    pub min: Decimal,
    /// The highest taxable income in this bracket, or `None` for the top bracket.
    pub max: Option<Decimal>,
    /// The marginal rate applied inside this bracket (e.g. 0.30 for 30%).
    pub rate: Decimal,
    /// Tax accumulated across all lower brackets.
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns true if this bracket carries no tax at all.
    pub fn is_tax_free(&self) -> bool {
        self.rate.is_zero() && self.base_tax.is_zero()
    }
}
