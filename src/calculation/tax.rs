//! Income tax, Low Income Tax Offset and Medicare levy.
//!
//! These are the 2024-25 resident rates as wired into the live calculator.
//! Every function is total: non-positive income yields zero rather than an
//! error.
//!
//! ## Bracket formula
//!
//! Tax inside a bracket is `base_tax + (income - min + 1) * rate`. The `+1`
//! counts the bracket's first whole dollar as taxable, so tax jumps by one
//! dollar's worth of the new rate at each boundary. Figures are reproduced
//! exactly as the calculator publishes them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

/// 2024-25 resident individual income tax rates.
pub static TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        min: dec!(0),
        max: Some(dec!(18200)),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxBracket {
        min: dec!(18201),
        max: Some(dec!(45000)),
        rate: dec!(0.16),
        base_tax: dec!(0),
    },
    TaxBracket {
        min: dec!(45001),
        max: Some(dec!(135000)),
        rate: dec!(0.30),
        base_tax: dec!(4288),
    },
    TaxBracket {
        min: dec!(135001),
        max: Some(dec!(190000)),
        rate: dec!(0.37),
        base_tax: dec!(31288),
    },
    TaxBracket {
        min: dec!(190001),
        max: None,
        rate: dec!(0.45),
        base_tax: dec!(51638),
    },
];

/// The financial year the embedded rates apply to.
pub const TAX_YEAR: &str = "2024-25";

/// Full LITO available at or below [`LITO_FULL_THRESHOLD`].
pub const LITO_MAX_OFFSET: Decimal = dec!(700);

/// Income up to which the full LITO applies.
pub const LITO_FULL_THRESHOLD: Decimal = dec!(37500);

/// Income at which LITO is cut to zero.
pub const LITO_CUTOFF: Decimal = dec!(45000);

/// LITO reduction per dollar above [`LITO_FULL_THRESHOLD`].
pub const LITO_PHASE_OUT_RATE: Decimal = dec!(0.05);

/// Income at or below which no Medicare levy is payable.
pub const MEDICARE_LEVY_THRESHOLD: Decimal = dec!(26000);

/// Medicare levy rate applied to the whole income above the threshold.
pub const MEDICARE_LEVY_RATE: Decimal = dec!(0.02);

/// Calculates bracket income tax before any offsets.
///
/// The highest bracket whose `min` is at or below the income applies.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_income_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_income_tax(dec!(18200)), dec!(0));
/// assert_eq!(calculate_income_tax(dec!(45000)), dec!(4288));
/// assert_eq!(calculate_income_tax(dec!(67200)), dec!(10948));
/// ```
pub fn calculate_income_tax(taxable_income: Decimal) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let Some(bracket) = TAX_BRACKETS
        .iter()
        .rev()
        .find(|bracket| bracket.min <= taxable_income)
    else {
        return Decimal::ZERO;
    };

    if bracket.is_tax_free() {
        return Decimal::ZERO;
    }

    bracket.base_tax + (taxable_income - bracket.min + Decimal::ONE) * bracket.rate
}

/// Calculates the Low Income Tax Offset.
///
/// - At or below $37,500: the full $700.
/// - Between $37,500 and $45,000: $700 less 5 cents per dollar above $37,500.
/// - At or above $45,000: nothing. This is a hard cutoff; the phase-out line
///   alone would still leave $325 at $45,000.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_lito;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_lito(dec!(37500)), dec!(700));
/// assert_eq!(calculate_lito(dec!(41250)), dec!(512.5));
/// assert_eq!(calculate_lito(dec!(45000)), dec!(0));
/// ```
pub fn calculate_lito(taxable_income: Decimal) -> Decimal {
    if taxable_income <= LITO_FULL_THRESHOLD {
        return LITO_MAX_OFFSET;
    }

    if taxable_income >= LITO_CUTOFF {
        return Decimal::ZERO;
    }

    let reduction = (taxable_income - LITO_FULL_THRESHOLD) * LITO_PHASE_OUT_RATE;
    (LITO_MAX_OFFSET - reduction).max(Decimal::ZERO)
}

/// Calculates the Medicare levy.
///
/// No levy at or below $26,000; above it, a flat 2% of the whole income.
/// There is no shading-in band.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_medicare_levy;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_medicare_levy(dec!(26000)), dec!(0));
/// assert_eq!(calculate_medicare_levy(dec!(26001)), dec!(520.02));
/// ```
pub fn calculate_medicare_levy(taxable_income: Decimal) -> Decimal {
    if taxable_income <= MEDICARE_LEVY_THRESHOLD {
        return Decimal::ZERO;
    }

    taxable_income * MEDICARE_LEVY_RATE
}

/// Income tax after LITO, floored at zero. Excludes the Medicare levy.
pub fn calculate_total_tax(taxable_income: Decimal) -> Decimal {
    (calculate_income_tax(taxable_income) - calculate_lito(taxable_income)).max(Decimal::ZERO)
}
