//! CSV export and re-import of ledger records
//!
//! The layout is the one the dashboard has always downloaded:
//! `日期,金额,类别,支付方式,备注`, one row per record in ledger order,
//! amounts as plain decimals and text quoted only where needed.

use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, LabelParseError, Money, PaymentMethod, Transaction};

/// Column headers, in order: date, amount, category, payment method, note
pub const CSV_HEADERS: [&str; 5] = ["日期", "金额", "类别", "支付方式", "备注"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write records as CSV to any writer
pub fn write_records<W: Write>(records: &[Transaction], writer: W) -> LedgerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format(DATE_FORMAT).to_string().as_str(),
                record.amount.to_decimal_string().as_str(),
                record.category.label(),
                record.payment_method.label(),
                record.note.as_str(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Serialize records to a CSV string
pub fn records_to_csv(records: &[Transaction]) -> LedgerResult<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Parse CSV produced by `write_records` back into records
///
/// Amounts are parsed but not validated here; feed the result through
/// `TransactionLedger::extend_validated` to enforce the ledger invariant.
pub fn read_records<R: Read>(reader: R) -> LedgerResult<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LedgerError::import(1, e.to_string()))?
        .clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            LedgerError::import(line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_row(&row, line)?);
    }

    Ok(records)
}

/// Parse a CSV string into records
pub fn parse_csv(text: &str) -> LedgerResult<Vec<Transaction>> {
    read_records(text.as_bytes())
}

fn check_headers(headers: &StringRecord) -> LedgerResult<()> {
    let found: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .map(str::trim)
        .collect();

    if found != CSV_HEADERS {
        return Err(LedgerError::import(
            1,
            format!(
                "expected header '{}', found '{}'",
                CSV_HEADERS.join(","),
                found.join(",")
            ),
        ));
    }
    Ok(())
}

fn parse_row(row: &StringRecord, line: u64) -> LedgerResult<Transaction> {
    let field = |index: usize| {
        row.get(index).ok_or_else(|| {
            LedgerError::import(line, format!("missing column '{}'", CSV_HEADERS[index]))
        })
    };

    let date = NaiveDate::parse_from_str(field(0)?.trim(), DATE_FORMAT)
        .map_err(|e| LedgerError::import(line, format!("invalid date: {}", e)))?;
    let amount = Money::parse(field(1)?).map_err(|e| LedgerError::import(line, e.to_string()))?;
    let category: Category = field(2)?
        .parse()
        .map_err(|e: LabelParseError| LedgerError::import(line, e.to_string()))?;
    let payment_method: PaymentMethod = field(3)?
        .parse()
        .map_err(|e: LabelParseError| LedgerError::import(line, e.to_string()))?;
    let note = row.get(4).unwrap_or_default();

    Ok(Transaction::new(date, amount, category, payment_method).with_note(note))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_records() -> Vec<Transaction> {
        vec![
            Transaction::new(date(2024, 1, 1), Money::from_cents(5000), Category::Food, PaymentMethod::Cash),
            Transaction::new(
                date(2024, 1, 2),
                Money::from_cents(3005),
                Category::Transport,
                PaymentMethod::Card,
            )
            .with_note("地铁, 公交"),
            Transaction::new(
                date(2023, 12, 31),
                Money::from_cents(1),
                Category::Entertainment,
                PaymentMethod::Wechat,
            )
            .with_note("said \"hi\"\nsecond line"),
        ]
    }

    #[test]
    fn test_header_row() {
        let csv = records_to_csv(&[]).unwrap();
        assert_eq!(csv, "日期,金额,类别,支付方式,备注\n");
    }

    #[test]
    fn test_row_layout() {
        let csv = records_to_csv(&sample_records()[..1]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-01-01,50.00,餐饮,现金,");
    }

    #[test]
    fn test_text_fields_are_quoted_when_needed() {
        let csv = records_to_csv(&sample_records()).unwrap();
        assert!(csv.contains("\"地铁, 公交\""));
        assert!(csv.contains("\"said \"\"hi\"\"\nsecond line\""));
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let records = sample_records();
        let csv = records_to_csv(&records).unwrap();
        let parsed = parse_csv(&csv).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_accepts_single_decimal_amounts_and_bom() {
        let text = "\u{feff}日期,金额,类别,支付方式,备注\n2024-02-01,12.5,学习,支付宝,book\n";
        let parsed = parse_csv(text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].amount, Money::from_cents(1250));
        assert_eq!(parsed[0].category, Category::Study);
        assert_eq!(parsed[0].note, "book");
    }

    #[test]
    fn test_rejects_wrong_header() {
        let err = parse_csv("date,amount\n2024-01-01,1\n").unwrap_err();
        assert!(matches!(err, LedgerError::Import { line: 1, .. }));
    }

    #[test]
    fn test_reports_line_of_bad_row() {
        let text = "日期,金额,类别,支付方式,备注\n2024-01-01,1.00,餐饮,现金,\n2024-13-01,1.00,餐饮,现金,\n";
        let err = parse_csv(text).unwrap_err();
        match err {
            LedgerError::Import { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid date"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        let text = "日期,金额,类别,支付方式,备注\n2024-01-01,1.00,零食,现金,\n";
        let err = parse_csv(text).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }
}
