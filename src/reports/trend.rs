//! Daily spending trend
//!
//! The day→amount series behind the trend chart.

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::TransactionLedger;
use crate::models::Money;

/// Total spent on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total: Money,
}

/// Per-day totals in ascending date order, days without spending omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyTrend {
    pub points: Vec<DailyPoint>,
}

impl DailyTrend {
    pub fn from_ledger(ledger: &TransactionLedger) -> Self {
        let points = ledger
            .group_sum_by_day()
            .into_iter()
            .map(|(date, total)| DailyPoint { date, total })
            .collect();
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// The day with the highest total (earliest on ties)
    pub fn peak(&self) -> Option<&DailyPoint> {
        self.points
            .iter()
            .reduce(|best, p| if p.total > best.total { p } else { best })
    }

    /// Chart coordinates: x is days since the first point, y the total
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        let Some(origin) = self.first_date() else {
            return Vec::new();
        };
        self.points
            .iter()
            .map(|p| ((p.date - origin).num_days() as f64, p.total.as_f64()))
            .collect()
    }

    /// X axis bounds; never zero-width
    pub fn x_bounds(&self) -> [f64; 2] {
        let span = match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => (last - first).num_days() as f64,
            _ => 0.0,
        };
        [0.0, span.max(1.0)]
    }

    /// Y axis bounds with a little headroom above the peak
    pub fn y_bounds(&self) -> [f64; 2] {
        let max = self.peak().map(|p| p.total.as_f64()).unwrap_or(0.0);
        [0.0, if max > 0.0 { max * 1.1 } else { 1.0 }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentMethod, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with(rows: &[(NaiveDate, i64)]) -> TransactionLedger {
        let mut ledger = TransactionLedger::new();
        for (d, cents) in rows {
            ledger
                .add(Transaction::new(
                    *d,
                    Money::from_cents(*cents),
                    Category::Food,
                    PaymentMethod::Cash,
                ))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_trend() {
        let trend = DailyTrend::from_ledger(&TransactionLedger::new());
        assert!(trend.is_empty());
        assert!(trend.chart_points().is_empty());
        assert!(trend.peak().is_none());
        assert_eq!(trend.x_bounds(), [0.0, 1.0]);
        assert_eq!(trend.y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_points_are_sorted_and_merged() {
        let trend = DailyTrend::from_ledger(&ledger_with(&[
            (date(2024, 1, 3), 100),
            (date(2024, 1, 1), 5000),
            (date(2024, 1, 3), 250),
        ]));

        assert_eq!(trend.points.len(), 2);
        assert_eq!(trend.points[0].date, date(2024, 1, 1));
        assert_eq!(trend.points[1].total, Money::from_cents(350));
    }

    #[test]
    fn test_chart_points_use_day_offsets() {
        let trend = DailyTrend::from_ledger(&ledger_with(&[
            (date(2024, 1, 30), 1000),
            (date(2024, 2, 2), 250),
        ]));

        assert_eq!(trend.chart_points(), vec![(0.0, 10.0), (3.0, 2.5)]);
        assert_eq!(trend.x_bounds(), [0.0, 3.0]);
        assert_eq!(trend.peak().unwrap().date, date(2024, 1, 30));
    }
}
