//! Core data models for the Wage Comparison Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod comparison;
mod fifo_roster;
mod overtime_multiplier;
mod scenario;
mod scenario_result;
mod tax_bracket;

pub use comparison::{Arrangement, ComparisonRow, WageComparison};
pub use fifo_roster::{FifoDeductionBreakdown, FifoRoster, LafhaBreakdown, WEEKS_PER_YEAR};
pub use overtime_multiplier::OvertimeMultiplier;
pub use scenario::{
    AbnOptions, ComparisonInput, DEFAULT_BUSINESS_EXPENSE_RATE, FifoOption, OvertimeOption,
    TfnOptions,
};
pub use scenario_result::{AbnScenarioResult, AuditStep, TfnScenarioResult};
pub use tax_bracket::TaxBracket;
