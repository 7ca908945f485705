//! Employee (TFN / PAYG) scenario composer.
//!
//! Builds the full annual breakdown for an employee: wages and overtime,
//! income tax and Medicare levy on gross, employer super on top, notional
//! leave entitlements, and tax-free LAFHA for FIFO rosters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{LafhaBreakdown, TfnOptions, TfnScenarioResult};

use super::common::{
    ATO_RATES_REF, AuditTrail, MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, MAX_WEEKS_PER_YEAR,
    SCENARIO_INPUTS_REF, SUPER_GUARANTEE_RATE, bounded, effective_tax_rate,
    weekly_take_home, worked_income,
};
use super::fifo::calculate_lafha_breakdown;
use super::tax::{calculate_income_tax, calculate_lito, calculate_medicare_levy, calculate_total_tax};

/// Weeks of paid annual leave.
pub const ANNUAL_LEAVE_WEEKS: Decimal = dec!(4);

/// Days of paid personal/sick leave.
pub const SICK_LEAVE_DAYS: Decimal = dec!(10);

/// Paid public holidays.
pub const PUBLIC_HOLIDAY_DAYS: Decimal = dec!(10);

/// Days a working week is spread over when valuing a day of leave.
pub const WORKING_DAYS_PER_WEEK: Decimal = dec!(5);

/// Calculates the annual breakdown for an employee.
///
/// # Arguments
///
/// * `hourly_rate` - Ordinary hourly rate
/// * `hours_per_week` - Ordinary hours per week
/// * `weeks_per_year` - Weeks worked when not on a FIFO roster
/// * `options` - FIFO roster and overtime, both optional
///
/// # Behaviour
///
/// Negative rate, hours or weeks are treated as zero, and values above
/// [`MAX_HOURLY_RATE`], [`MAX_HOURS_PER_WEEK`] or [`MAX_WEEKS_PER_YEAR`] are
/// clamped to those ceilings. An unknown roster id gives 48 working weeks
/// and no LAFHA; an unknown overtime multiplier gives no overtime. Nothing is
/// rejected.
///
/// Leave entitlements are valued from the ordinary rate and hours only, so
/// FIFO and overtime do not change them.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_tfn_scenario;
/// use wage_engine::models::TfnOptions;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &TfnOptions::default());
///
/// assert_eq!(result.gross_annual, dec!(67200));
/// assert_eq!(result.tax_payable, dec!(10948));
/// assert_eq!(result.medicare_levy, dec!(1344));
/// assert_eq!(result.net_take_home, dec!(54908));
/// ```
pub fn calculate_tfn_scenario(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    options: &TfnOptions,
) -> TfnScenarioResult {
    let hourly_rate = bounded(hourly_rate, MAX_HOURLY_RATE);
    let hours_per_week = bounded(hours_per_week, MAX_HOURS_PER_WEEK);
    let weeks_per_year = bounded(weeks_per_year, MAX_WEEKS_PER_YEAR);

    let mut trail = AuditTrail::default();
    let income = worked_income(
        hourly_rate,
        hours_per_week,
        weeks_per_year,
        options.fifo.as_ref(),
        options.overtime.as_ref(),
        &mut trail,
    );
    let gross_annual = income.gross;

    // Employees are taxed on gross; LAFHA is excluded from the taxable base.
    let taxable_income = gross_annual;
    let income_tax = calculate_income_tax(taxable_income);
    let lito_offset = calculate_lito(taxable_income);
    let tax_payable = calculate_total_tax(taxable_income);

    trail.record(
        "income_tax",
        "Income Tax",
        ATO_RATES_REF,
        serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
        }),
        serde_json::json!({
            "income_tax": income_tax.normalize().to_string(),
            "lito_offset": lito_offset.normalize().to_string(),
            "tax_payable": tax_payable.normalize().to_string(),
        }),
        format!(
            "Bracket tax ${} less LITO ${} = ${} payable",
            income_tax.normalize(),
            lito_offset.normalize(),
            tax_payable.normalize()
        ),
    );

    let medicare_levy = calculate_medicare_levy(taxable_income);

    trail.record(
        "medicare_levy",
        "Medicare Levy",
        ATO_RATES_REF,
        serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
        }),
        serde_json::json!({
            "medicare_levy": medicare_levy.normalize().to_string(),
        }),
        if medicare_levy.is_zero() {
            "Taxable income at or below the Medicare levy threshold".to_string()
        } else {
            format!(
                "2% of ${} = ${}",
                taxable_income.normalize(),
                medicare_levy.normalize()
            )
        },
    );

    let super_contribution = gross_annual * SUPER_GUARANTEE_RATE;

    trail.record(
        "employer_super",
        "Employer Superannuation",
        "Superannuation guarantee 11.5%",
        serde_json::json!({
            "gross_annual": gross_annual.normalize().to_string(),
        }),
        serde_json::json!({
            "super_contribution": super_contribution.normalize().to_string(),
        }),
        format!(
            "11.5% of ${} = ${} paid by the employer on top of wages",
            gross_annual.normalize(),
            super_contribution.normalize()
        ),
    );

    let weekly_value = hourly_rate * hours_per_week;
    let daily_value = weekly_value / WORKING_DAYS_PER_WEEK;
    let annual_leave_value = weekly_value * ANNUAL_LEAVE_WEEKS;
    let sick_leave_value = daily_value * SICK_LEAVE_DAYS;
    let public_holiday_value = daily_value * PUBLIC_HOLIDAY_DAYS;
    let leave_entitlements_value = annual_leave_value + sick_leave_value + public_holiday_value;

    trail.record(
        "leave_entitlements",
        "Leave Entitlements",
        "National Employment Standards",
        serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
        }),
        serde_json::json!({
            "annual_leave_value": annual_leave_value.normalize().to_string(),
            "sick_leave_value": sick_leave_value.normalize().to_string(),
            "public_holiday_value": public_holiday_value.normalize().to_string(),
            "leave_entitlements_value": leave_entitlements_value.normalize().to_string(),
        }),
        format!(
            "4 weeks annual leave, 10 days sick leave and 10 public holidays valued at ${}",
            leave_entitlements_value.normalize()
        ),
    );

    let lafha = match &options.fifo {
        Some(fifo) => {
            let lafha = calculate_lafha_breakdown(&fifo.roster_id, hours_per_week);
            trail.record(
                "lafha",
                "Living Away From Home Allowance",
                SCENARIO_INPUTS_REF,
                serde_json::json!({
                    "fifo_roster": fifo.roster_id,
                    "hours_per_week": hours_per_week.normalize().to_string(),
                }),
                serde_json::json!({
                    "working_days": lafha.working_days.normalize().to_string(),
                    "accommodation": lafha.accommodation.normalize().to_string(),
                    "meals": lafha.meals.normalize().to_string(),
                    "lafha_value": lafha.total.normalize().to_string(),
                }),
                format!(
                    "{} site days x $400 = ${} tax-free",
                    lafha.working_days.normalize(),
                    lafha.total.normalize()
                ),
            );
            lafha
        }
        None => LafhaBreakdown::ZERO,
    };

    let net_take_home = gross_annual - tax_payable - medicare_levy + lafha.total;
    let weekly_take_home = weekly_take_home(net_take_home);
    let effective_tax_rate = effective_tax_rate(tax_payable, medicare_levy, gross_annual);
    let total_package_value =
        gross_annual + super_contribution + leave_entitlements_value + lafha.total;

    trail.record(
        "net_take_home",
        "Net Take-Home",
        SCENARIO_INPUTS_REF,
        serde_json::json!({
            "gross_annual": gross_annual.normalize().to_string(),
            "tax_payable": tax_payable.normalize().to_string(),
            "medicare_levy": medicare_levy.normalize().to_string(),
            "lafha_value": lafha.total.normalize().to_string(),
        }),
        serde_json::json!({
            "net_take_home": net_take_home.normalize().to_string(),
            "total_package_value": total_package_value.normalize().to_string(),
        }),
        format!(
            "${} - ${} tax - ${} levy + ${} LAFHA = ${}",
            gross_annual.normalize(),
            tax_payable.normalize(),
            medicare_levy.normalize(),
            lafha.total.normalize(),
            net_take_home.normalize()
        ),
    );

    debug!(
        gross_annual = %gross_annual,
        tax_payable = %tax_payable,
        medicare_levy = %medicare_levy,
        net_take_home = %net_take_home,
        "TFN scenario calculated"
    );

    TfnScenarioResult {
        effective_weeks: income.effective_weeks,
        base_wages: income.base,
        overtime_hours: income.overtime_hours,
        overtime_pay: income.overtime_pay,
        gross_annual,
        taxable_income,
        income_tax,
        lito_offset,
        tax_payable,
        medicare_levy,
        super_contribution,
        annual_leave_value,
        sick_leave_value,
        public_holiday_value,
        leave_entitlements_value,
        lafha_accommodation: lafha.accommodation,
        lafha_meals: lafha.meals,
        lafha_value: lafha.total,
        net_take_home,
        weekly_take_home,
        effective_tax_rate,
        total_package_value,
        fifo_roster: options.fifo.as_ref().map(|fifo| fifo.roster_id.clone()),
        audit_steps: trail.into_steps(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FifoOption, OvertimeOption};

    fn fifo_options(roster_id: &str) -> TfnOptions {
        TfnOptions {
            fifo: Some(FifoOption::new(roster_id)),
            overtime: None,
        }
    }

    #[test]
    fn test_standard_employee() {
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &TfnOptions::default());

        assert_eq!(result.effective_weeks, dec!(48));
        assert_eq!(result.base_wages, dec!(67200));
        assert_eq!(result.gross_annual, dec!(67200));
        assert_eq!(result.taxable_income, dec!(67200));
        assert_eq!(result.income_tax, dec!(10948));
        assert_eq!(result.lito_offset, Decimal::ZERO);
        assert_eq!(result.tax_payable, dec!(10948));
        assert_eq!(result.medicare_levy, dec!(1344));
        assert_eq!(result.super_contribution, dec!(7728));
        assert_eq!(result.net_take_home, dec!(54908));
        assert_eq!(result.weekly_take_home, dec!(54908) / dec!(52));
        assert_eq!(result.lafha_value, Decimal::ZERO);
        assert!(result.fifo_roster.is_none());
    }

    #[test]
    fn test_leave_entitlements_valued_from_ordinary_rate() {
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &TfnOptions::default());

        assert_eq!(result.annual_leave_value, dec!(5600));
        assert_eq!(result.sick_leave_value, dec!(2800));
        assert_eq!(result.public_holiday_value, dec!(2800));
        assert_eq!(result.leave_entitlements_value, dec!(11200));
        assert_eq!(result.total_package_value, dec!(86128));
    }

    #[test]
    fn test_leave_not_affected_by_fifo_or_overtime() {
        let options = TfnOptions {
            fifo: Some(FifoOption::new("8-6")),
            overtime: Some(OvertimeOption::new(dec!(10), "2x")),
        };
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &options);

        assert_eq!(result.leave_entitlements_value, dec!(11200));
    }

    #[test]
    fn test_effective_tax_rate() {
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &TfnOptions::default());
        assert_eq!(
            result.effective_tax_rate,
            (dec!(10948) + dec!(1344)) / dec!(67200) * dec!(100)
        );
    }

    #[test]
    fn test_fifo_uses_roster_weeks_and_adds_lafha_after_tax() {
        let result = calculate_tfn_scenario(dec!(50), dec!(40), dec!(48), &fifo_options("2-1"));

        assert_eq!(result.effective_weeks, dec!(35));
        assert_eq!(result.gross_annual, dec!(70000));
        // 4288 + (70000 - 45001 + 1) * 0.30
        assert_eq!(result.tax_payable, dec!(11788));
        assert_eq!(result.medicare_levy, dec!(1400));
        assert_eq!(result.lafha_accommodation, dec!(49000));
        assert_eq!(result.lafha_meals, dec!(21000));
        assert_eq!(result.lafha_value, dec!(70000));
        assert_eq!(result.taxable_income, dec!(70000));
        assert_eq!(result.net_take_home, dec!(126812));
        assert_eq!(result.fifo_roster.as_deref(), Some("2-1"));
    }

    #[test]
    fn test_unknown_roster_uses_48_weeks_without_lafha() {
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(52), &fifo_options("9-9"));

        assert_eq!(result.effective_weeks, dec!(48));
        assert_eq!(result.gross_annual, dec!(67200));
        assert_eq!(result.lafha_value, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_added_to_gross() {
        let options = TfnOptions {
            fifo: None,
            overtime: Some(OvertimeOption::new(dec!(5), "1.5x")),
        };
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &options);

        assert_eq!(result.overtime_hours, dec!(5));
        assert_eq!(result.overtime_pay, dec!(12600));
        assert_eq!(result.gross_annual, dec!(79800));
    }

    #[test]
    fn test_low_income_gets_lito() {
        // 20 x 25 x 48 = 24000; tax 928 less 700 LITO; below levy threshold
        let result = calculate_tfn_scenario(dec!(20), dec!(25), dec!(48), &TfnOptions::default());

        assert_eq!(result.gross_annual, dec!(24000));
        assert_eq!(result.income_tax, dec!(928));
        assert_eq!(result.lito_offset, dec!(700));
        assert_eq!(result.tax_payable, dec!(228));
        assert_eq!(result.medicare_levy, Decimal::ZERO);
    }

    #[test]
    fn test_zero_hours_degrades_to_zero() {
        let result = calculate_tfn_scenario(dec!(35), dec!(0), dec!(48), &TfnOptions::default());

        assert_eq!(result.gross_annual, Decimal::ZERO);
        assert_eq!(result.tax_payable, Decimal::ZERO);
        assert_eq!(result.net_take_home, Decimal::ZERO);
        assert_eq!(result.effective_tax_rate, Decimal::ZERO);
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let result = calculate_tfn_scenario(dec!(-35), dec!(40), dec!(-48), &TfnOptions::default());

        assert_eq!(result.gross_annual, Decimal::ZERO);
        assert_eq!(result.super_contribution, Decimal::ZERO);
        assert_eq!(result.leave_entitlements_value, Decimal::ZERO);
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let result = calculate_tfn_scenario(dec!(50), dec!(40), dec!(48), &fifo_options("4-2"));

        let rule_ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "working_weeks",
                "gross_income",
                "income_tax",
                "medicare_levy",
                "employer_super",
                "leave_entitlements",
                "lafha",
                "net_take_home",
            ]
        );
        for (index, step) in result.audit_steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
    }

    #[test]
    fn test_no_lafha_step_without_fifo() {
        let result = calculate_tfn_scenario(dec!(35), dec!(40), dec!(48), &TfnOptions::default());
        assert!(result.audit_steps.iter().all(|s| s.rule_id != "lafha"));
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let options = TfnOptions {
            fifo: Some(FifoOption::new("3-1")),
            overtime: Some(OvertimeOption::new(dec!(6), "2x")),
        };
        let first = calculate_tfn_scenario(dec!(48.5), dec!(50), dec!(46), &options);
        let second = calculate_tfn_scenario(dec!(48.5), dec!(50), dec!(46), &options);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_fifo_toggled_off_restores_standard_result() {
        let before = calculate_tfn_scenario(dec!(42), dec!(45), dec!(47), &TfnOptions::default());
        let _with_fifo = calculate_tfn_scenario(dec!(42), dec!(45), dec!(47), &fifo_options("2-1"));
        let after = calculate_tfn_scenario(dec!(42), dec!(45), dec!(47), &TfnOptions::default());

        assert_eq!(before, after);
    }

    #[test]
    fn test_huge_inputs_clamped_to_ceilings() {
        let options = TfnOptions {
            fifo: None,
            overtime: Some(OvertimeOption::new(Decimal::MAX, "2.5x")),
        };
        let result =
            calculate_tfn_scenario(Decimal::MAX, Decimal::MAX, Decimal::MAX, &options);

        // $1,000,000 x 168 hours x 52 weeks
        assert_eq!(result.base_wages, dec!(8736000000));
        // 168 overtime hours x $2,500 x 52 weeks
        assert_eq!(result.overtime_pay, dec!(21840000000));
        assert!(result.net_take_home > Decimal::ZERO);
        assert!(result.net_take_home < result.gross_annual);
    }
}
