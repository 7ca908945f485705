//! Pieces shared by the TFN and ABN composers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AuditStep, FifoOption, OvertimeOption};

use super::fifo::calculate_fifo_working_weeks;
use super::overtime::calculate_overtime_pay;

/// Weekly take-home is always spread over 52 weeks so the two arrangements
/// compare like for like, whatever the roster.
pub const TAKE_HOME_WEEKS: Decimal = dec!(52);

/// Superannuation guarantee rate for 2024-25.
pub const SUPER_GUARANTEE_RATE: Decimal = dec!(0.115);

pub(crate) const SCENARIO_INPUTS_REF: &str = "Scenario inputs";
pub(crate) const ATO_RATES_REF: &str = "ATO 2024-25 resident tax rates";

/// Highest hourly rate the composers work with; larger rates are clamped.
pub const MAX_HOURLY_RATE: Decimal = dec!(1000000);

/// Hours in a week. Ordinary and overtime hours are each clamped to this.
pub const MAX_HOURS_PER_WEEK: Decimal = dec!(168);

/// Weeks in a year. `weeks_per_year` is clamped to this.
pub const MAX_WEEKS_PER_YEAR: Decimal = dec!(52);

/// Floors a value at zero.
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Clamps a value into `[0, max]`.
///
/// With every composer input bounded this way gross income stays below
/// $31 billion, far inside `Decimal` range, so no later product overflows.
pub(crate) fn bounded(value: Decimal, max: Decimal) -> Decimal {
    non_negative(value).min(max)
}

/// Net take-home spread over [`TAKE_HOME_WEEKS`].
pub fn weekly_take_home(net_take_home: Decimal) -> Decimal {
    net_take_home / TAKE_HOME_WEEKS
}

/// `(tax + levy) / gross * 100`, or zero when there is no gross income.
///
/// ```
/// use wage_engine::calculation::effective_tax_rate;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(effective_tax_rate(dec!(9000), dec!(1000), dec!(50000)), dec!(20));
/// assert_eq!(effective_tax_rate(dec!(0), dec!(0), dec!(0)), dec!(0));
/// ```
pub fn effective_tax_rate(tax_payable: Decimal, medicare_levy: Decimal, gross: Decimal) -> Decimal {
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (tax_payable + medicare_levy) / gross * dec!(100)
}

/// Sequentially numbered audit steps for one scenario.
#[derive(Debug, Default)]
pub(crate) struct AuditTrail {
    steps: Vec<AuditStep>,
}

impl AuditTrail {
    pub(crate) fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        reference: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            reference: reference.to_string(),
            input,
            output,
            reasoning,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}

/// Income earned from hours worked, identical for both arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkedIncome {
    pub effective_weeks: Decimal,
    pub base: Decimal,
    pub overtime_hours: Decimal,
    pub overtime_pay: Decimal,
    pub gross: Decimal,
}

/// Works out effective weeks, base pay and overtime, recording each step.
///
/// FIFO replaces `weeks_per_year` with the roster's working weeks, and
/// overtime is paid over those same effective weeks.
pub(crate) fn worked_income(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    fifo: Option<&FifoOption>,
    overtime: Option<&OvertimeOption>,
    trail: &mut AuditTrail,
) -> WorkedIncome {
    let effective_weeks = match fifo {
        Some(fifo) => Decimal::from(calculate_fifo_working_weeks(&fifo.roster_id)),
        None => weeks_per_year,
    };

    trail.record(
        "working_weeks",
        "Working Weeks",
        SCENARIO_INPUTS_REF,
        serde_json::json!({
            "weeks_per_year": weeks_per_year.normalize().to_string(),
            "fifo_roster": fifo.map(|f| f.roster_id.as_str()),
        }),
        serde_json::json!({
            "effective_weeks": effective_weeks.normalize().to_string(),
        }),
        match fifo {
            Some(fifo) => format!(
                "FIFO roster '{}' gives {} working weeks",
                fifo.roster_id,
                effective_weeks.normalize()
            ),
            None => format!("{} weeks worked per year", effective_weeks.normalize()),
        },
    );

    let base = hourly_rate * hours_per_week * effective_weeks;

    let (overtime_hours, overtime_pay) = match overtime {
        Some(overtime) => {
            let hours = bounded(overtime.hours, MAX_HOURS_PER_WEEK);
            let pay = calculate_overtime_pay(
                hourly_rate,
                hours,
                &overtime.multiplier_id,
                effective_weeks,
            );
            (hours, pay)
        }
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    let gross = base + overtime_pay;

    trail.record(
        "gross_income",
        "Gross Income",
        SCENARIO_INPUTS_REF,
        serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "effective_weeks": effective_weeks.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_multiplier": overtime.map(|o| o.multiplier_id.as_str()),
        }),
        serde_json::json!({
            "base": base.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "gross_annual": gross.normalize().to_string(),
        }),
        format!(
            "${} x {} hours x {} weeks = ${}, plus ${} overtime = ${}",
            hourly_rate.normalize(),
            hours_per_week.normalize(),
            effective_weeks.normalize(),
            base.normalize(),
            overtime_pay.normalize(),
            gross.normalize()
        ),
    );

    WorkedIncome {
        effective_weeks,
        base,
        overtime_hours,
        overtime_pay,
        gross,
    }
}
