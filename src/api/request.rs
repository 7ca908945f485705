//! Request types for the wage comparison API.
//!
//! The request mirrors the calculator form: FIFO and overtime are switched
//! on with flags, and anything left out is filled from the service defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComparisonInput, FifoOption, OvertimeOption};

/// Request body for the `/compare`, `/tfn` and `/abn` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Ordinary hourly rate.
    pub hourly_rate: Decimal,
    /// Ordinary hours per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year; defaults from configuration.
    #[serde(default)]
    pub weeks_per_year: Option<Decimal>,
    /// Whether the work is on a FIFO roster.
    #[serde(default)]
    pub fifo_enabled: bool,
    /// Roster id; defaults from configuration when FIFO is enabled.
    #[serde(default)]
    pub fifo_roster: Option<String>,
    /// Whether regular overtime is worked.
    #[serde(default)]
    pub overtime_enabled: bool,
    /// Overtime hours per week.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Overtime multiplier id; defaults from configuration.
    #[serde(default)]
    pub overtime_multiplier: Option<String>,
    /// ABN only: whether the contractor funds their own super.
    #[serde(default)]
    pub include_super_contribution: Option<bool>,
    /// ABN only: business expenses as a share of gross.
    #[serde(default)]
    pub business_expense_rate: Option<Decimal>,
}

impl CompareRequest {
    /// Creates a request with only the required fields set.
    pub fn new(hourly_rate: Decimal, hours_per_week: Decimal) -> Self {
        Self {
            hourly_rate,
            hours_per_week,
            weeks_per_year: None,
            fifo_enabled: false,
            fifo_roster: None,
            overtime_enabled: false,
            overtime_hours: None,
            overtime_multiplier: None,
            include_super_contribution: None,
            business_expense_rate: None,
        }
    }

    /// Validates the request against the configured limits and fills in
    /// defaults, producing the engine input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first field that is
    /// out of range.
    pub fn into_input(self, config: &ConfigLoader) -> EngineResult<ComparisonInput> {
        let defaults = config.defaults();
        let limits = config.limits();

        let weeks_per_year = self.weeks_per_year.unwrap_or(defaults.weeks_per_year);
        let business_expense_rate = self
            .business_expense_rate
            .unwrap_or(defaults.business_expense_rate);

        within("hourlyRate", self.hourly_rate, limits.max_hourly_rate)?;
        within("hoursPerWeek", self.hours_per_week, limits.max_hours_per_week)?;
        within("weeksPerYear", weeks_per_year, limits.max_weeks_per_year)?;

        if business_expense_rate < Decimal::ZERO || business_expense_rate > Decimal::ONE {
            return Err(invalid("businessExpenseRate", "must be between 0 and 1"));
        }

        let fifo = self.fifo_enabled.then(|| {
            FifoOption::new(
                self.fifo_roster
                    .unwrap_or_else(|| defaults.fifo_roster.clone()),
            )
        });

        let overtime = if self.overtime_enabled {
            let hours = self.overtime_hours.unwrap_or(Decimal::ZERO);
            if hours < Decimal::ZERO {
                return Err(invalid("overtimeHours", "must not be negative"));
            }
            if hours > limits.max_overtime_hours {
                return Err(invalid(
                    "overtimeHours",
                    format!("must not exceed {}", limits.max_overtime_hours),
                ));
            }
            Some(OvertimeOption::new(
                hours,
                self.overtime_multiplier
                    .unwrap_or_else(|| defaults.overtime_multiplier.clone()),
            ))
        } else {
            None
        };

        Ok(ComparisonInput {
            hourly_rate: self.hourly_rate,
            hours_per_week: self.hours_per_week,
            weeks_per_year,
            fifo,
            overtime,
            include_super_contribution: self
                .include_super_contribution
                .unwrap_or(defaults.include_super_contribution),
            business_expense_rate,
        })
    }
}

fn within(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(invalid(field, "must be greater than zero"));
    }
    if value > max {
        return Err(invalid(field, format!("must not exceed {}", max)));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}
