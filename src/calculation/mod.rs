//! Calculation logic for the wage comparison engine.
//!
//! This module contains the tax primitives (bracket tax, LITO, Medicare
//! levy), the FIFO and overtime tables, the TFN and ABN scenario composers,
//! and the side-by-side comparison built from them.

mod abn_scenario;
mod common;
mod comparison;
mod currency;
mod fifo;
mod overtime;
mod tax;
mod tfn_scenario;

pub use abn_scenario::{
    GST_RATE, INCOME_PROTECTION_RATE, PUBLIC_LIABILITY_INSURANCE, calculate_abn_scenario,
};
pub use common::{SUPER_GUARANTEE_RATE, TAKE_HOME_WEEKS, effective_tax_rate, weekly_take_home};
pub use comparison::{compare_scenarios, comparison_summary};
pub use currency::format_currency;
pub use fifo::{
    DEFAULT_WORKING_WEEKS, FIFO_ACCOMMODATION_RATE, FIFO_ROSTERS, FIFO_TRAVEL_RATE,
    HOURS_PER_SITE_DAY, LAFHA_ACCOMMODATION_PER_DAY, LAFHA_MEALS_PER_DAY, MAX_SITE_DAYS_PER_WEEK,
    calculate_fifo_deduction_breakdown, calculate_fifo_deductions, calculate_fifo_working_weeks,
    calculate_lafha_breakdown, calculate_lafha_value, get_fifo_roster,
};
pub use overtime::{OVERTIME_MULTIPLIERS, calculate_overtime_pay, get_overtime_multiplier};
pub use tax::{
    LITO_CUTOFF, LITO_FULL_THRESHOLD, LITO_MAX_OFFSET, LITO_PHASE_OUT_RATE, MEDICARE_LEVY_RATE,
    MEDICARE_LEVY_THRESHOLD, TAX_BRACKETS, TAX_YEAR, calculate_income_tax, calculate_lito,
    calculate_medicare_levy, calculate_total_tax,
};
pub use tfn_scenario::{
    ANNUAL_LEAVE_WEEKS, PUBLIC_HOLIDAY_DAYS, SICK_LEAVE_DAYS, WORKING_DAYS_PER_WEEK,
    calculate_tfn_scenario,
};
