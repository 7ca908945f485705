//! Configuration types for the wage comparison service.
//!
//! These are deserialized from `service.yaml`. Tax tables, rosters and
//! multipliers are fixed in code; configuration only covers how the service
//! runs and what it fills in when a request leaves a field out.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Where and under what name the service runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSettings {
    /// Name reported by the health endpoint.
    pub name: String,
    /// Socket address to listen on, e.g. `0.0.0.0:3000`.
    pub bind_address: String,
}

/// Values used when a request omits an optional field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioDefaults {
    /// Weeks worked per year when not on a FIFO roster.
    pub weeks_per_year: Decimal,
    /// Contractor business expenses as a share of gross.
    pub business_expense_rate: Decimal,
    /// Whether contractors fund their own super.
    pub include_super_contribution: bool,
    /// Overtime multiplier id.
    pub overtime_multiplier: String,
    /// FIFO roster id.
    pub fifo_roster: String,
}

/// Upper bounds on request inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputLimits {
    /// Highest accepted hourly rate.
    pub max_hourly_rate: Decimal,
    /// Highest accepted ordinary hours per week.
    pub max_hours_per_week: Decimal,
    /// Highest accepted weeks per year.
    pub max_weeks_per_year: Decimal,
    /// Highest accepted overtime hours per week.
    pub max_overtime_hours: Decimal,
}

/// The complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Service settings.
    pub service: ServiceSettings,
    /// Request defaults.
    pub defaults: ScenarioDefaults,
    /// Request limits.
    pub limits: InputLimits,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings {
                name: "wage-engine".to_string(),
                bind_address: "0.0.0.0:3000".to_string(),
            },
            defaults: ScenarioDefaults {
                weeks_per_year: dec!(48),
                business_expense_rate: dec!(0.15),
                include_super_contribution: true,
                overtime_multiplier: "1.5x".to_string(),
                fifo_roster: "2-1".to_string(),
            },
            limits: InputLimits {
                max_hourly_rate: dec!(1000),
                max_hours_per_week: dec!(100),
                max_weeks_per_year: dec!(52),
                max_overtime_hours: dec!(60),
            },
        }
    }
}
