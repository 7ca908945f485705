//! Scenario options passed into the TFN and ABN composers.
//!
//! Optional features are modelled as optional sub-records: a scenario either
//! carries a [`FifoOption`] or it is not a FIFO scenario, rather than pairing
//! an `enabled` flag with a roster id that may or may not be meaningful.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default share of gross income a contractor spends on business expenses.
pub const DEFAULT_BUSINESS_EXPENSE_RATE: Decimal = dec!(0.15);

/// FIFO settings for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoOption {
    /// Roster id, e.g. "2-1". Unknown ids fall back to 48 working weeks.
    pub roster_id: String,
}

impl FifoOption {
    /// Creates FIFO settings for the given roster.
    pub fn new(roster_id: impl Into<String>) -> Self {
        Self {
            roster_id: roster_id.into(),
        }
    }
}

/// Overtime settings for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeOption {
    /// Extra hours worked per week.
    pub hours: Decimal,
    /// Multiplier id, e.g. "1.5x".
    pub multiplier_id: String,
}

impl OvertimeOption {
    /// Creates overtime settings.
    pub fn new(hours: Decimal, multiplier_id: impl Into<String>) -> Self {
        Self {
            hours,
            multiplier_id: multiplier_id.into(),
        }
    }
}

/// Options for an employee (PAYG) scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfnOptions {
    /// FIFO roster, if the role is fly-in fly-out.
    #[serde(default)]
    pub fifo: Option<FifoOption>,
    /// Weekly overtime, if any.
    #[serde(default)]
    pub overtime: Option<OvertimeOption>,
}

/// Options for a contractor (ABN) scenario.
///
/// # Example
///
/// ```
/// use wage_engine::models::{AbnOptions, DEFAULT_BUSINESS_EXPENSE_RATE};
///
/// let options = AbnOptions::default();
/// assert!(options.include_super_contribution);
/// assert_eq!(options.business_expense_rate, DEFAULT_BUSINESS_EXPENSE_RATE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnOptions {
    /// FIFO roster, if the role is fly-in fly-out.
    #[serde(default)]
    pub fifo: Option<FifoOption>,
    /// Weekly overtime, if any.
    #[serde(default)]
    pub overtime: Option<OvertimeOption>,
    /// Whether the contractor pays themselves super (deductible).
    #[serde(default = "default_include_super")]
    pub include_super_contribution: bool,
    /// Share of gross spent on business expenses.
    #[serde(default = "default_business_expense_rate")]
    pub business_expense_rate: Decimal,
}

fn default_include_super() -> bool {
    true
}

fn default_business_expense_rate() -> Decimal {
    DEFAULT_BUSINESS_EXPENSE_RATE
}

impl Default for AbnOptions {
    fn default() -> Self {
        Self {
            fifo: None,
            overtime: None,
            include_super_contribution: true,
            business_expense_rate: DEFAULT_BUSINESS_EXPENSE_RATE,
        }
    }
}

/// Everything needed to run both scenarios side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    /// Ordinary hourly rate.
    pub hourly_rate: Decimal,
    /// Ordinary hours per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year when not on a FIFO roster.
    pub weeks_per_year: Decimal,
    /// FIFO roster shared by both scenarios.
    #[serde(default)]
    pub fifo: Option<FifoOption>,
    /// Overtime shared by both scenarios.
    #[serde(default)]
    pub overtime: Option<OvertimeOption>,
    /// ABN only: self-funded super.
    #[serde(default = "default_include_super")]
    pub include_super_contribution: bool,
    /// ABN only: business expense share of gross.
    #[serde(default = "default_business_expense_rate")]
    pub business_expense_rate: Decimal,
}

impl ComparisonInput {
    /// Creates an input with no FIFO, no overtime and default ABN settings.
    pub fn new(hourly_rate: Decimal, hours_per_week: Decimal, weeks_per_year: Decimal) -> Self {
        Self {
            hourly_rate,
            hours_per_week,
            weeks_per_year,
            fifo: None,
            overtime: None,
            include_super_contribution: true,
            business_expense_rate: DEFAULT_BUSINESS_EXPENSE_RATE,
        }
    }

    /// The employee-side options.
    pub fn tfn_options(&self) -> TfnOptions {
        TfnOptions {
            fifo: self.fifo.clone(),
            overtime: self.overtime.clone(),
        }
    }

    /// The contractor-side options.
    pub fn abn_options(&self) -> AbnOptions {
        AbnOptions {
            fifo: self.fifo.clone(),
            overtime: self.overtime.clone(),
            include_super_contribution: self.include_super_contribution,
            business_expense_rate: self.business_expense_rate,
        }
    }
}
