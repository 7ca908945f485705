//! Contractor (ABN) scenario composer.
//!
//! A contractor invoices the same hours as an employee but carries their
//! own business expenses, insurance and superannuation. Those costs are
//! deducted before tax and again from take-home pay.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{AbnOptions, AbnScenarioResult, FifoDeductionBreakdown};

use super::common::{
    ATO_RATES_REF, AuditTrail, MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, MAX_WEEKS_PER_YEAR,
    SCENARIO_INPUTS_REF, SUPER_GUARANTEE_RATE, bounded, effective_tax_rate, non_negative,
    weekly_take_home, worked_income,
};
use super::fifo::calculate_fifo_deduction_breakdown;
use super::tax::{calculate_income_tax, calculate_lito, calculate_medicare_levy, calculate_total_tax};

/// GST charged on invoices. Reported only; it is passed on to the ATO.
pub const GST_RATE: Decimal = dec!(0.10);

/// Flat annual public liability premium.
pub const PUBLIC_LIABILITY_INSURANCE: Decimal = dec!(800);

/// Income protection premium as a share of gross.
pub const INCOME_PROTECTION_RATE: Decimal = dec!(0.02);

/// Calculates the annual breakdown for a contractor.
///
/// # Arguments
///
/// * `hourly_rate` - Invoiced hourly rate
/// * `hours_per_week` - Ordinary hours per week
/// * `weeks_per_year` - Weeks worked when not on a FIFO roster
/// * `options` - FIFO, overtime, self-funded super and expense rate
///
/// # Behaviour
///
/// Taxable income is gross less business expenses, FIFO deductions,
/// insurance and self-funded super, floored at zero. The same deductions
/// come out of take-home. Contractors receive no LAFHA.
///
/// Negative inputs, including a negative expense rate, are treated as zero.
/// Rate, hours and weeks are clamped to the same ceilings as for employees,
/// and the expense rate to 100% of gross.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_abn_scenario;
/// use wage_engine::models::AbnOptions;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_abn_scenario(dec!(35), dec!(40), dec!(48), &AbnOptions::default());
///
/// assert_eq!(result.total_deductions, dec!(19952));
/// assert_eq!(result.taxable_income, dec!(47248));
/// assert_eq!(result.net_take_home, dec!(41340.64));
/// ```
pub fn calculate_abn_scenario(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    options: &AbnOptions,
) -> AbnScenarioResult {
    let hourly_rate = bounded(hourly_rate, MAX_HOURLY_RATE);
    let hours_per_week = bounded(hours_per_week, MAX_HOURS_PER_WEEK);
    let weeks_per_year = bounded(weeks_per_year, MAX_WEEKS_PER_YEAR);
    let business_expense_rate = bounded(options.business_expense_rate, Decimal::ONE);

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

    let gst_collected = gross_annual * GST_RATE;

    trail.record(
        "gst",
        "GST Collected",
        "A New Tax System (Goods and Services Tax) Act 1999",
        serde_json::json!({
            "gross_annual": gross_annual.normalize().to_string(),
        }),
        serde_json::json!({
            "gst_collected": gst_collected.normalize().to_string(),
        }),
        format!(
            "10% GST of ${} collected on behalf of the ATO, not income",
            gst_collected.normalize()
        ),
    );

    let business_expenses = gross_annual * business_expense_rate;

    let fifo = match &options.fifo {
        Some(fifo) => calculate_fifo_deduction_breakdown(gross_annual, &fifo.roster_id),
        None => FifoDeductionBreakdown::ZERO,
    };

    let income_protection_insurance = gross_annual * INCOME_PROTECTION_RATE;
    let insurance_costs = PUBLIC_LIABILITY_INSURANCE + income_protection_insurance;

    let self_funded_super = if options.include_super_contribution {
        gross_annual * SUPER_GUARANTEE_RATE
    } else {
        Decimal::ZERO
    };

    let total_deductions = business_expenses + fifo.total + insurance_costs + self_funded_super;

    trail.record(
        "deductions",
        "Business Deductions",
        SCENARIO_INPUTS_REF,
        serde_json::json!({
            "gross_annual": gross_annual.normalize().to_string(),
            "business_expense_rate": business_expense_rate.normalize().to_string(),
            "fifo_roster": options.fifo.as_ref().map(|f| f.roster_id.as_str()),
            "include_super_contribution": options.include_super_contribution,
        }),
        serde_json::json!({
            "business_expenses": business_expenses.normalize().to_string(),
            "fifo_travel": fifo.travel.normalize().to_string(),
            "fifo_accommodation": fifo.accommodation.normalize().to_string(),
            "insurance_costs": insurance_costs.normalize().to_string(),
            "self_funded_super": self_funded_super.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
        }),
        format!(
            "Expenses ${} + FIFO ${} + insurance ${} + super ${} = ${}",
            business_expenses.normalize(),
            fifo.total.normalize(),
            insurance_costs.normalize(),
            self_funded_super.normalize(),
            total_deductions.normalize()
        ),
    );

    let taxable_income = non_negative(gross_annual - total_deductions);
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
            "Bracket tax ${} on ${} taxable, less LITO ${} = ${} payable",
            income_tax.normalize(),
            taxable_income.normalize(),
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

    let net_take_home = gross_annual - tax_payable - medicare_levy - total_deductions;
    let weekly_take_home = weekly_take_home(net_take_home);
    let effective_tax_rate = effective_tax_rate(tax_payable, medicare_levy, gross_annual);

    trail.record(
        "net_take_home",
        "Net Take-Home",
        SCENARIO_INPUTS_REF,
        serde_json::json!({
            "gross_annual": gross_annual.normalize().to_string(),
            "tax_payable": tax_payable.normalize().to_string(),
            "medicare_levy": medicare_levy.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
        }),
        serde_json::json!({
            "net_take_home": net_take_home.normalize().to_string(),
        }),
        format!(
            "${} - ${} tax - ${} levy - ${} deductions = ${}",
            gross_annual.normalize(),
            tax_payable.normalize(),
            medicare_levy.normalize(),
            total_deductions.normalize(),
            net_take_home.normalize()
        ),
    );

    debug!(
        gross_annual = %gross_annual,
        total_deductions = %total_deductions,
        taxable_income = %taxable_income,
        net_take_home = %net_take_home,
        "ABN scenario calculated"
    );

    AbnScenarioResult {
        effective_weeks: income.effective_weeks,
        base_income: income.base,
        overtime_hours: income.overtime_hours,
        overtime_pay: income.overtime_pay,
        gross_annual,
        gst_collected,
        business_expenses,
        fifo_travel: fifo.travel,
        fifo_accommodation: fifo.accommodation,
        fifo_deductions: fifo.total,
        public_liability_insurance: PUBLIC_LIABILITY_INSURANCE,
        income_protection_insurance,
        insurance_costs,
        self_funded_super,
        total_deductions,
        taxable_income,
        income_tax,
        lito_offset,
        tax_payable,
        medicare_levy,
        net_take_home,
        weekly_take_home,
        effective_tax_rate,
        fifo_roster: options.fifo.as_ref().map(|fifo| fifo.roster_id.clone()),
        audit_steps: trail.into_steps(),
    }
}
