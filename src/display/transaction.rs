//! Record table formatting
//!
//! Renders spending records as a terminal table, newest first when given a
//! dashboard snapshot.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

const NOTE_WIDTH: usize = 24;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "日期")]
    date: String,
    #[tabled(rename = "金额")]
    amount: String,
    #[tabled(rename = "类别")]
    category: &'static str,
    #[tabled(rename = "支付方式")]
    payment_method: &'static str,
    #[tabled(rename = "备注")]
    note: String,
}

impl RecordRow {
    fn new(record: &Transaction, currency_symbol: &str, date_format: &str) -> Self {
        Self {
            date: record.date.format(date_format).to_string(),
            amount: record.amount.format_with_symbol(currency_symbol),
            category: record.category.label(),
            payment_method: record.payment_method.label(),
            note: truncate(&record.note, NOTE_WIDTH),
        }
    }
}

/// Format records as a table in the order given
pub fn format_record_table<'a, I>(records: I, currency_symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<RecordRow> = records
        .into_iter()
        .map(|r| RecordRow::new(r, currency_symbol, date_format))
        .collect();

    if rows.is_empty() {
        return "暂无消费记录。".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// One-line form of a record
pub fn format_record_short(record: &Transaction, currency_symbol: &str) -> String {
    let mut line = format!(
        "{} {} {} {}",
        record.date.format("%Y-%m-%d"),
        record.category.label(),
        record.amount.format_with_symbol(currency_symbol),
        record.payment_method.label()
    );
    if !record.note.is_empty() {
        line.push_str(&format!(" ({})", truncate(&record.note, NOTE_WIDTH)));
    }
    line
}

/// Shorten to `max_chars` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentMethod};
    use chrono::NaiveDate;

    fn lunch() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_cents(5000),
            Category::Food,
            PaymentMethod::Wechat,
        )
        .with_note("午饭")
    }

    #[test]
    fn test_table_has_headers_and_values() {
        let records = vec![lunch()];
        let table = format_record_table(&records, "¥", "%Y-%m-%d");

        for header in ["日期", "金额", "类别", "支付方式", "备注"] {
            assert!(table.contains(header), "missing {}", header);
        }
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("¥50.00"));
        assert!(table.contains("微信"));
        assert!(table.contains("午饭"));
    }

    #[test]
    fn test_empty_table() {
        let records: Vec<Transaction> = Vec::new();
        assert_eq!(format_record_table(&records, "¥", "%Y-%m-%d"), "暂无消费记录。");
    }

    #[test]
    fn test_custom_symbol_and_date_format() {
        let records = vec![lunch()];
        let table = format_record_table(&records, "RMB ", "%d/%m/%Y");
        assert!(table.contains("RMB 50.00"));
        assert!(table.contains("15/01/2025"));
    }

    #[test]
    fn test_short_form() {
        assert_eq!(format_record_short(&lunch(), "¥"), "2025-01-15 餐饮 ¥50.00 微信 (午饭)");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("早餐午餐晚餐", 4), "早餐午…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
