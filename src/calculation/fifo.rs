//! FIFO roster lookup, living-away-from-home allowance and contractor
//! FIFO deductions.
//!
//! ## Rosters
//!
//! | id    | cycle                     | working weeks |
//! |-------|---------------------------|---------------|
//! | `2-1` | 2 weeks on / 1 week off   | 35            |
//! | `3-1` | 3 weeks on / 1 week off   | 39            |
//! | `4-2` | 4 weeks on / 2 weeks off  | 35            |
//! | `8-6` | 8 weeks on / 6 weeks off  | 30            |
//!
//! Unknown roster ids are not an error. Working weeks fall back to
//! [`DEFAULT_WORKING_WEEKS`] and the allowance and deductions fall back to
//! zero, so an unknown id cannot be told apart from FIFO being off.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FifoDeductionBreakdown, FifoRoster, LafhaBreakdown};

/// The fixed set of FIFO rosters.
pub static FIFO_ROSTERS: [FifoRoster; 4] = [
    FifoRoster::new(
        "2-1",
        "2 weeks on / 1 week off",
        2,
        1,
        "Short swing common on construction and shutdown work",
    ),
    FifoRoster::new(
        "3-1",
        "3 weeks on / 1 week off",
        3,
        1,
        "Longer swing with a single week at home",
    ),
    FifoRoster::new(
        "4-2",
        "4 weeks on / 2 weeks off",
        4,
        2,
        "Balanced swing typical of mine site projects",
    ),
    FifoRoster::new(
        "8-6",
        "8 weeks on / 6 weeks off",
        8,
        6,
        "Extended remote swing with long breaks",
    ),
];

/// Working weeks assumed when a roster id is not recognised.
pub const DEFAULT_WORKING_WEEKS: u32 = 48;

/// Ordinary hours that make up one site day.
pub const HOURS_PER_SITE_DAY: Decimal = dec!(8);

/// Site days per week can never exceed a full week.
pub const MAX_SITE_DAYS_PER_WEEK: Decimal = dec!(7);

/// Tax-free accommodation allowance per site day.
pub const LAFHA_ACCOMMODATION_PER_DAY: Decimal = dec!(280);

/// Tax-free meal allowance per site day.
pub const LAFHA_MEALS_PER_DAY: Decimal = dec!(120);

/// Deductible FIFO travel as a share of contractor gross.
pub const FIFO_TRAVEL_RATE: Decimal = dec!(0.08);

/// Deductible FIFO accommodation as a share of contractor gross.
pub const FIFO_ACCOMMODATION_RATE: Decimal = dec!(0.12);

/// Looks up a roster by exact id.
///
/// ```
/// use wage_engine::calculation::get_fifo_roster;
///
/// assert_eq!(get_fifo_roster("3-1").map(|r| r.working_weeks_per_year), Some(39));
/// assert!(get_fifo_roster("2:1").is_none());
/// ```
pub fn get_fifo_roster(id: &str) -> Option<&'static FifoRoster> {
    FIFO_ROSTERS.iter().find(|roster| roster.id == id)
}

/// Returns the roster's annual working weeks, or 48 for an unknown id.
pub fn calculate_fifo_working_weeks(roster_id: &str) -> u32 {
    get_fifo_roster(roster_id)
        .map(|roster| roster.working_weeks_per_year)
        .unwrap_or(DEFAULT_WORKING_WEEKS)
}

/// Breaks the annual living-away-from-home allowance into its components.
///
/// Site days per week are `hours_per_week / 8`, capped at 7. Each site day
/// attracts $280 accommodation and $120 meals.
pub fn calculate_lafha_breakdown(roster_id: &str, hours_per_week: Decimal) -> LafhaBreakdown {
    let Some(roster) = get_fifo_roster(roster_id) else {
        return LafhaBreakdown::ZERO;
    };

    let days_per_week =
        (hours_per_week.max(Decimal::ZERO) / HOURS_PER_SITE_DAY).min(MAX_SITE_DAYS_PER_WEEK);
    let working_days = Decimal::from(roster.working_weeks_per_year) * days_per_week;
    let accommodation = working_days * LAFHA_ACCOMMODATION_PER_DAY;
    let meals = working_days * LAFHA_MEALS_PER_DAY;

    LafhaBreakdown {
        working_days,
        accommodation,
        meals,
        total: accommodation + meals,
    }
}

/// Returns the annual tax-free LAFHA value, or zero for an unknown roster.
///
/// ```
/// use wage_engine::calculation::calculate_lafha_value;
/// use rust_decimal_macros::dec;
///
/// // 35 weeks x 5 days x $400
/// assert_eq!(calculate_lafha_value("2-1", dec!(40)), dec!(70000));
/// ```
pub fn calculate_lafha_value(roster_id: &str, hours_per_week: Decimal) -> Decimal {
    calculate_lafha_breakdown(roster_id, hours_per_week).total
}

/// Breaks the contractor's FIFO deductions into travel and accommodation.
pub fn calculate_fifo_deduction_breakdown(
    gross_annual: Decimal,
    roster_id: &str,
) -> FifoDeductionBreakdown {
    if get_fifo_roster(roster_id).is_none() {
        return FifoDeductionBreakdown::ZERO;
    }

    let gross_annual = gross_annual.max(Decimal::ZERO);
    let travel = gross_annual * FIFO_TRAVEL_RATE;
    let accommodation = gross_annual * FIFO_ACCOMMODATION_RATE;

    FifoDeductionBreakdown {
        travel,
        accommodation,
        total: travel + accommodation,
    }
}

/// Returns the contractor's deductible FIFO travel and accommodation.
pub fn calculate_fifo_deductions(gross_annual: Decimal, roster_id: &str) -> Decimal {
    calculate_fifo_deduction_breakdown(gross_annual, roster_id).total
}
