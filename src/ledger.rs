//! The in-memory transaction ledger
//!
//! Holds the records entered during one session and answers the derived
//! queries the dashboard needs. The ledger is append-only: there is no way to
//! edit or remove a record once it has been accepted.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::export::csv as csv_export;
use crate::models::{Category, Money, Transaction};

/// An ordered, append-only collection of expense records
///
/// Invariants: every record satisfies `amount > 0`, and the sum of all
/// amounts fits in `i64` cents, so every total and group sum below is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLedger {
    records: Vec<Transaction>,
}

impl TransactionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    ///
    /// Fails with `LedgerError::Validation` when the amount is zero or
    /// negative, or when it would overflow the running total, in which case
    /// the ledger is left untouched. On success the stored record is
    /// returned as the acknowledgment.
    pub fn add(&mut self, record: Transaction) -> LedgerResult<&Transaction> {
        record.validate()?;
        Self::accumulate(self.total_amount(), &record)?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Append several records, all or nothing
    ///
    /// Returns the number of records appended.
    pub fn extend_validated<I>(&mut self, records: I) -> LedgerResult<usize>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let batch: Vec<Transaction> = records.into_iter().collect();
        let mut running = self.total_amount();
        for record in &batch {
            record.validate()?;
            running = Self::accumulate(running, record)?;
        }
        let count = batch.len();
        self.records.extend(batch);
        Ok(count)
    }

    fn accumulate(running: Money, record: &Transaction) -> LedgerResult<Money> {
        running
            .checked_add(record.amount)
            .ok_or_else(|| LedgerError::total_overflow(record.amount))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been added yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.records.iter()
    }

    /// All records, latest date first
    ///
    /// Records sharing a date keep their insertion order.
    pub fn list_sorted_by_date_desc(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Sum of all amounts
    pub fn total_amount(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Total spent per day, for days with at least one record
    pub fn group_sum_by_day(&self) -> BTreeMap<NaiveDate, Money> {
        let mut by_day = BTreeMap::new();
        for record in &self.records {
            *by_day.entry(record.date).or_insert_with(Money::zero) += record.amount;
        }
        by_day
    }

    /// Total spent per category, for categories with at least one record
    ///
    /// Use `reports::CategoryBreakdown` for the descending display order.
    pub fn group_sum_by_category(&self) -> BTreeMap<Category, Money> {
        let mut by_category = BTreeMap::new();
        for record in &self.records {
            *by_category
                .entry(record.category)
                .or_insert_with(Money::zero) += record.amount;
        }
        by_category
    }

    /// Serialize the ledger to CSV in insertion order
    pub fn export_csv(&self) -> LedgerResult<String> {
        csv_export::records_to_csv(&self.records)
    }
}

impl<'a> IntoIterator for &'a TransactionLedger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
