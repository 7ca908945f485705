//! Scenario result models for the Wage Comparison Engine.
//!
//! This module contains the [`TfnScenarioResult`] and [`AbnScenarioResult`]
//! records returned by the composers, along with the [`AuditStep`] trail that
//! records how each figure was reached. Field names serialise in camelCase
//! because the presentation layer destructures them by name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The rate schedule or guidance the rule comes from.
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Annual breakdown for an employee paid through PAYG withholding.
///
/// Leave entitlements are a notional benefit reported separately; they are
/// not part of `net_take_home`. LAFHA is tax-free and added after tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfnScenarioResult {
    /// Weeks worked in the year (roster weeks when FIFO applies).
    pub effective_weeks: Decimal,
    /// Ordinary-time wages.
    pub base_wages: Decimal,
    /// Weekly overtime hours applied.
    pub overtime_hours: Decimal,
    /// Annual overtime pay.
    pub overtime_pay: Decimal,
    /// Base wages plus overtime.
    pub gross_annual: Decimal,
    /// Income tax is assessed on gross annual for an employee.
    pub taxable_income: Decimal,
    /// Bracket tax before offsets.
    pub income_tax: Decimal,
    /// Low Income Tax Offset.
    pub lito_offset: Decimal,
    /// Income tax after LITO, never negative.
    pub tax_payable: Decimal,
    /// Medicare levy.
    pub medicare_levy: Decimal,
    /// Employer superannuation guarantee, paid on top of wages.
    pub super_contribution: Decimal,
    /// Four weeks of annual leave.
    pub annual_leave_value: Decimal,
    /// Ten days of personal/sick leave.
    pub sick_leave_value: Decimal,
    /// Ten paid public holidays.
    pub public_holiday_value: Decimal,
    /// Sum of the three leave values.
    pub leave_entitlements_value: Decimal,
    /// LAFHA accommodation component.
    pub lafha_accommodation: Decimal,
    /// LAFHA meals component.
    pub lafha_meals: Decimal,
    /// Total tax-free LAFHA.
    pub lafha_value: Decimal,
    /// Gross less tax and levy, plus LAFHA.
    pub net_take_home: Decimal,
    /// Net take-home spread over 52 weeks.
    pub weekly_take_home: Decimal,
    /// (tax + levy) as a percentage of gross.
    pub effective_tax_rate: Decimal,
    /// Gross, super, leave and LAFHA together.
    pub total_package_value: Decimal,
    /// The FIFO roster id the scenario ran with, if any.
    pub fifo_roster: Option<String>,
    /// How each figure was derived.
    pub audit_steps: Vec<AuditStep>,
}

/// Annual breakdown for a self-employed contractor invoicing under an ABN.
///
/// GST is collected and remitted, so it is reported but never counted as
/// income. Expenses, insurance and self-funded super reduce taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnScenarioResult {
    /// Weeks worked in the year (roster weeks when FIFO applies).
    pub effective_weeks: Decimal,
    /// Ordinary-time income.
    pub base_income: Decimal,
    /// Weekly overtime hours applied.
    pub overtime_hours: Decimal,
    /// Annual overtime income.
    pub overtime_pay: Decimal,
    /// Base income plus overtime.
    pub gross_annual: Decimal,
    /// GST collected on invoices (informational).
    pub gst_collected: Decimal,
    /// General business expenses.
    pub business_expenses: Decimal,
    /// FIFO travel deduction.
    pub fifo_travel: Decimal,
    /// FIFO accommodation deduction.
    pub fifo_accommodation: Decimal,
    /// Total FIFO deductions.
    pub fifo_deductions: Decimal,
    /// Public liability cover.
    pub public_liability_insurance: Decimal,
    /// Income protection cover.
    pub income_protection_insurance: Decimal,
    /// Total insurance.
    pub insurance_costs: Decimal,
    /// Super paid into the contractor's own fund.
    pub self_funded_super: Decimal,
    /// Expenses, FIFO deductions, insurance and super together.
    pub total_deductions: Decimal,
    /// Gross less all deductions, never negative.
    pub taxable_income: Decimal,
    /// Bracket tax before offsets.
    pub income_tax: Decimal,
    /// Low Income Tax Offset.
    pub lito_offset: Decimal,
    /// Income tax after LITO, never negative.
    pub tax_payable: Decimal,
    /// Medicare levy on taxable income.
    pub medicare_levy: Decimal,
    /// Gross less tax, levy and all deductions.
    pub net_take_home: Decimal,
    /// Net take-home spread over 52 weeks.
    pub weekly_take_home: Decimal,
    /// (tax + levy) as a percentage of gross.
    pub effective_tax_rate: Decimal,
    /// The FIFO roster id the scenario ran with, if any.
    pub fifo_roster: Option<String>,
    /// How each figure was derived.
    pub audit_steps: Vec<AuditStep>,
}
