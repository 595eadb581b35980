//! Dashboard snapshot
//!
//! Everything a renderer needs, computed from the current ledger in one
//! pass. Renderers take a `Dashboard` and never touch the ledger directly,
//! so a redraw after each submission is just `Dashboard::build` again.

use serde::Serialize;

use crate::ledger::TransactionLedger;
use crate::models::{Money, Transaction};

use super::breakdown::CategoryBreakdown;
use super::trend::DailyTrend;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    /// Records, latest date first
    pub records: Vec<Transaction>,
    pub record_count: usize,
    pub total: Money,
    pub daily_trend: DailyTrend,
    pub category_breakdown: CategoryBreakdown,
}

impl Dashboard {
    pub fn build(ledger: &TransactionLedger) -> Self {
        Self {
            records: ledger
                .list_sorted_by_date_desc()
                .into_iter()
                .cloned()
                .collect(),
            record_count: ledger.len(),
            total: ledger.total_amount(),
            daily_trend: DailyTrend::from_ledger(ledger),
            category_breakdown: CategoryBreakdown::from_ledger(ledger),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
