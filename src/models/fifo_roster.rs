//! FIFO (fly-in fly-out) roster models.
//!
//! Rosters are static configuration: they are defined once as constants and
//! looked up by id, never built or mutated at runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of calendar weeks a roster cycle is spread over.
pub const WEEKS_PER_YEAR: u32 = 52;

/// A named weeks-on / weeks-off rotation.
///
/// # Example
///
/// ```
/// use wage_engine::models::FifoRoster;
///
/// const ROSTER: FifoRoster = FifoRoster::new(
///     "2-1",
///     "2 weeks on / 1 week off",
///     2,
///     1,
///     "Short swing",
/// );
/// assert_eq!(ROSTER.working_weeks_per_year, 35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoRoster {
    /// Lookup key, e.g. "2-1".
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Consecutive weeks on site.
    pub weeks_on: u32,
    /// Consecutive weeks at home.
    pub weeks_off: u32,
    /// `round(weeks_on / (weeks_on + weeks_off) * 52)`.
    pub working_weeks_per_year: u32,
    /// Short description for display.
    pub description: &'static str,
}

impl FifoRoster {
    /// Defines a roster, deriving its annual working weeks from the cycle.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        weeks_on: u32,
        weeks_off: u32,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            weeks_on,
            weeks_off,
            working_weeks_per_year: working_weeks_per_year(weeks_on, weeks_off),
            description,
        }
    }
}

/// `weeks_on / (weeks_on + weeks_off) * 52`, rounded half up in integer arithmetic.
const fn working_weeks_per_year(weeks_on: u32, weeks_off: u32) -> u32 {
    let cycle = weeks_on + weeks_off;
    if cycle == 0 {
        return 0;
    }
    (2 * weeks_on * WEEKS_PER_YEAR + cycle) / (2 * cycle)
}

/// The tax-free living-away-from-home allowance for one roster year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LafhaBreakdown {
    /// Days on site across the year.
    pub working_days: Decimal,
    /// Accommodation component.
    pub accommodation: Decimal,
    /// Meals component.
    pub meals: Decimal,
    /// Accommodation plus meals.
    pub total: Decimal,
}

impl LafhaBreakdown {
    /// An allowance of zero, used when no recognised roster applies.
    pub const ZERO: Self = Self {
        working_days: Decimal::ZERO,
        accommodation: Decimal::ZERO,
        meals: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// FIFO travel and accommodation expenses a contractor can deduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoDeductionBreakdown {
    /// Flights and transfers.
    pub travel: Decimal,
    /// Camp or off-site accommodation.
    pub accommodation: Decimal,
    /// Travel plus accommodation.
    pub total: Decimal,
}

impl FifoDeductionBreakdown {
    /// No FIFO deductions.
    pub const ZERO: Self = Self {
        travel: Decimal::ZERO,
        accommodation: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}
