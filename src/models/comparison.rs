//! Side-by-side comparison models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AbnScenarioResult, TfnScenarioResult};

/// Which arrangement leaves more money in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// Contractor invoicing under an ABN.
    Abn,
    /// Employee paid under a TFN.
    Tfn,
    /// Both arrangements net the same amount.
    Equal,
}

/// One line of the comparison table.
///
/// Rows that only apply to one arrangement carry zero on the other side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Row label as displayed.
    pub label: String,
    /// Employee value.
    pub tfn: Decimal,
    /// Contractor value.
    pub abn: Decimal,
}

impl ComparisonRow {
    /// Creates a row.
    pub fn new(label: impl Into<String>, tfn: Decimal, abn: Decimal) -> Self {
        Self {
            label: label.into(),
            tfn,
            abn,
        }
    }

    /// ABN minus TFN.
    pub fn difference(&self) -> Decimal {
        self.abn - self.tfn
    }
}

/// ABN and TFN results for the same inputs, with the delta between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageComparison {
    /// Employee breakdown.
    pub tfn: TfnScenarioResult,
    /// Contractor breakdown.
    pub abn: AbnScenarioResult,
    /// ABN net take-home minus TFN net take-home.
    pub annual_difference: Decimal,
    /// Annual difference over 52 weeks.
    pub weekly_difference: Decimal,
    /// The arrangement with the higher net take-home.
    pub better_arrangement: Arrangement,
    /// Ordered table rows.
    pub rows: Vec<ComparisonRow>,
}

impl WageComparison {
    /// Finds a table row by label.
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}
