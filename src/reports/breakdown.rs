//! Spending breakdown by category
//!
//! Category totals ordered for display (largest first) with the share of
//! the overall total each one represents.

use serde::Serialize;

use crate::ledger::TransactionLedger;
use crate::models::{Category, Money};

/// One category's share of spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub total: Money,
    /// Percentage of the overall total (0-100)
    pub percentage: f64,
}

impl CategorySlice {
    /// Percentage label the way the pie chart prints it, e.g. `62.5%`
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Category totals, largest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
    pub total: Money,
}

impl CategoryBreakdown {
    pub fn from_ledger(ledger: &TransactionLedger) -> Self {
        let sums = ledger.group_sum_by_category();
        let total: Money = sums.values().sum();

        let mut slices: Vec<CategorySlice> = sums
            .into_iter()
            .map(|(category, amount)| CategorySlice {
                category,
                total: amount,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        // Largest first; ties fall back to form order
        slices.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
