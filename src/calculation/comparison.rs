//! Side-by-side ABN vs TFN comparison.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AbnScenarioResult, Arrangement, ComparisonInput, ComparisonRow, TfnScenarioResult,
    WageComparison,
};

use super::abn_scenario::calculate_abn_scenario;
use super::common::weekly_take_home;
use super::currency::format_currency;
use super::tfn_scenario::calculate_tfn_scenario;

/// Runs both scenarios on the same inputs and lines them up.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compare_scenarios;
/// use wage_engine::models::{Arrangement, ComparisonInput};
/// use rust_decimal_macros::dec;
///
/// let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
///
/// assert_eq!(comparison.annual_difference, dec!(-13567.36));
/// assert_eq!(comparison.better_arrangement, Arrangement::Tfn);
/// ```
pub fn compare_scenarios(input: &ComparisonInput) -> WageComparison {
    let tfn = calculate_tfn_scenario(
        input.hourly_rate,
        input.hours_per_week,
        input.weeks_per_year,
        &input.tfn_options(),
    );
    let abn = calculate_abn_scenario(
        input.hourly_rate,
        input.hours_per_week,
        input.weeks_per_year,
        &input.abn_options(),
    );

    let annual_difference = abn.net_take_home - tfn.net_take_home;
    let better_arrangement = if annual_difference > Decimal::ZERO {
        Arrangement::Abn
    } else if annual_difference < Decimal::ZERO {
        Arrangement::Tfn
    } else {
        Arrangement::Equal
    };

    debug!(
        annual_difference = %annual_difference,
        better_arrangement = ?better_arrangement,
        "Scenarios compared"
    );

    WageComparison {
        rows: comparison_rows(&tfn, &abn),
        tfn,
        abn,
        annual_difference,
        weekly_difference: weekly_take_home(annual_difference),
        better_arrangement,
    }
}

fn comparison_rows(tfn: &TfnScenarioResult, abn: &AbnScenarioResult) -> Vec<ComparisonRow> {
    let zero = Decimal::ZERO;
    vec![
        ComparisonRow::new("Gross Annual Income", tfn.gross_annual, abn.gross_annual),
        ComparisonRow::new("GST Collected", zero, abn.gst_collected),
        ComparisonRow::new("Business Expenses", zero, abn.business_expenses),
        ComparisonRow::new("FIFO Deductions", zero, abn.fifo_deductions),
        ComparisonRow::new("Insurance Costs", zero, abn.insurance_costs),
        ComparisonRow::new("Superannuation", tfn.super_contribution, abn.self_funded_super),
        ComparisonRow::new("Taxable Income", tfn.taxable_income, abn.taxable_income),
        ComparisonRow::new("Income Tax", tfn.tax_payable, abn.tax_payable),
        ComparisonRow::new("Medicare Levy", tfn.medicare_levy, abn.medicare_levy),
        ComparisonRow::new("LAFHA (Tax-Free)", tfn.lafha_value, zero),
        ComparisonRow::new("Net Take-Home", tfn.net_take_home, abn.net_take_home),
        ComparisonRow::new("Weekly Take-Home", tfn.weekly_take_home, abn.weekly_take_home),
    ]
}

/// One-line verdict for display above the comparison table.
///
/// ```
/// use wage_engine::calculation::{compare_scenarios, comparison_summary};
/// use wage_engine::models::ComparisonInput;
/// use rust_decimal_macros::dec;
///
/// let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
/// assert_eq!(
///     comparison_summary(&comparison),
///     "TFN employment pays $13,567 more per year than ABN contracting"
/// );
/// ```
pub fn comparison_summary(comparison: &WageComparison) -> String {
    let amount = format_currency(comparison.annual_difference);
    match comparison.better_arrangement {
        Arrangement::Abn => {
            format!("ABN contracting pays {amount} more per year than TFN employment")
        }
        Arrangement::Tfn => {
            format!("TFN employment pays {amount} more per year than ABN contracting")
        }
        Arrangement::Equal => {
            "ABN contracting and TFN employment pay the same per year".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FifoOption, OvertimeOption};
    use rust_decimal_macros::dec;

    const ROW_LABELS: [&str; 12] = [
        "Gross Annual Income",
        "GST Collected",
        "Business Expenses",
        "FIFO Deductions",
        "Insurance Costs",
        "Superannuation",
        "Taxable Income",
        "Income Tax",
        "Medicare Levy",
        "LAFHA (Tax-Free)",
        "Net Take-Home",
        "Weekly Take-Home",
    ];

    #[test]
    fn test_rows_are_in_display_order() {
        let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
        let labels: Vec<&str> = comparison.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ROW_LABELS);
    }

    #[test]
    fn test_business_expenses_row_is_abn_only() {
        let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
        let row = comparison.row("Business Expenses").unwrap();

        assert_eq!(row.tfn, Decimal::ZERO);
        assert!(row.abn > Decimal::ZERO);
        assert_eq!(row.abn, dec!(10080));
    }

    #[test]
    fn test_abn_taxed_on_smaller_base() {
        let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));

        assert_eq!(comparison.tfn.gross_annual, comparison.abn.gross_annual);
        assert!(comparison.abn.taxable_income < comparison.tfn.taxable_income);
        assert!(comparison.abn.tax_payable < comparison.tfn.tax_payable);
    }

    #[test]
    fn test_difference_and_verdict() {
        let comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));

        assert_eq!(comparison.annual_difference, dec!(41340.64) - dec!(54908));
        assert_eq!(
            comparison.weekly_difference,
            comparison.annual_difference / dec!(52)
        );
        assert_eq!(comparison.better_arrangement, Arrangement::Tfn);
        assert_eq!(
            comparison.row("Net Take-Home").unwrap().difference(),
            comparison.annual_difference
        );
    }

    #[test]
    fn test_lafha_row_is_tfn_only() {
        let mut input = ComparisonInput::new(dec!(50), dec!(40), dec!(48));
        input.fifo = Some(FifoOption::new("2-1"));
        let comparison = compare_scenarios(&input);

        let lafha = comparison.row("LAFHA (Tax-Free)").unwrap();
        assert_eq!(lafha.tfn, dec!(70000));
        assert_eq!(lafha.abn, Decimal::ZERO);
        assert_eq!(comparison.row("FIFO Deductions").unwrap().abn, dec!(14000));
        assert_eq!(comparison.abn.fifo_roster.as_deref(), Some("2-1"));
        assert_eq!(comparison.tfn.fifo_roster.as_deref(), Some("2-1"));
    }

    #[test]
    fn test_both_sides_share_overtime() {
        let mut input = ComparisonInput::new(dec!(35), dec!(40), dec!(48));
        input.overtime = Some(OvertimeOption::new(dec!(5), "1.5x"));
        let comparison = compare_scenarios(&input);

        assert_eq!(comparison.tfn.overtime_pay, dec!(12600));
        assert_eq!(comparison.abn.overtime_pay, dec!(12600));
    }

    #[test]
    fn test_summary_when_contractor_ahead() {
        let mut comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
        comparison.annual_difference = dec!(3120.4);
        comparison.better_arrangement = Arrangement::Abn;

        assert_eq!(
            comparison_summary(&comparison),
            "ABN contracting pays $3,120 more per year than TFN employment"
        );
    }

    #[test]
    fn test_same_rate_never_favours_contractor() {
        for rate in [dec!(20), dec!(60), dec!(150), dec!(400)] {
            let mut input = ComparisonInput::new(rate, dec!(40), dec!(48));
            input.include_super_contribution = false;
            input.business_expense_rate = Decimal::ZERO;
            let comparison = compare_scenarios(&input);

            assert_eq!(comparison.better_arrangement, Arrangement::Tfn);
        }
    }

    #[test]
    fn test_zero_inputs_summary() {
        let comparison = compare_scenarios(&ComparisonInput::new(dec!(0), dec!(0), dec!(0)));
        // The flat public liability premium still applies to the contractor
        assert_eq!(comparison.annual_difference, dec!(-800));
        assert_eq!(
            comparison_summary(&comparison),
            "TFN employment pays $800 more per year than ABN contracting"
        );
    }

    #[test]
    fn test_summary_for_equal_outcome() {
        let mut comparison = compare_scenarios(&ComparisonInput::new(dec!(35), dec!(40), dec!(48)));
        comparison.annual_difference = Decimal::ZERO;
        comparison.better_arrangement = Arrangement::Equal;

        assert_eq!(
            comparison_summary(&comparison),
            "ABN contracting and TFN employment pay the same per year"
        );
    }
}
