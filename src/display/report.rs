//! Dashboard and report formatting for terminal output
//!
//! Plain-text counterparts of the TUI panels, used by the `summary` and
//! `report` commands.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::transaction::format_record_table;
use crate::reports::{AnalysisReport, Dashboard};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "日期")]
    date: String,
    #[tabled(rename = "金额")]
    amount: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "类别")]
    category: &'static str,
    #[tabled(rename = "金额")]
    amount: String,
    #[tabled(rename = "占比")]
    share: String,
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the whole dashboard: records, total, daily trend and categories
pub fn format_dashboard(dashboard: &Dashboard, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("消费记录 ({} 条)\n", dashboard.record_count));
    output.push_str(&format_record_table(&dashboard.records, currency_symbol, date_format));
    output.push('\n');
    output.push('\n');
    output.push_str(&format!(
        "总支出: {}\n",
        dashboard.total.format_with_symbol(currency_symbol)
    ));

    if dashboard.is_empty() {
        return output;
    }

    let peak = dashboard
        .daily_trend
        .peak()
        .map(|p| p.total.as_f64())
        .unwrap_or(0.0);
    let daily: Vec<DailyRow> = dashboard
        .daily_trend
        .points
        .iter()
        .map(|p| DailyRow {
            date: p.date.format(date_format).to_string(),
            amount: p.total.format_with_symbol(currency_symbol),
            bar: format_bar(p.total.as_f64(), peak, BAR_WIDTH),
        })
        .collect();

    output.push('\n');
    output.push_str("消费趋势\n");
    output.push_str(&Table::new(daily).with(Style::rounded()).to_string());
    output.push('\n');

    let categories: Vec<CategoryRow> = dashboard
        .category_breakdown
        .slices
        .iter()
        .map(|s| CategoryRow {
            category: s.category.label(),
            amount: s.total.format_with_symbol(currency_symbol),
            share: s.percentage_label(),
        })
        .collect();

    output.push('\n');
    output.push_str("类别分布\n");
    output.push_str(&Table::new(categories).with(Style::rounded()).to_string());
    output.push('\n');

    output
}

/// Format the analysis report for the terminal
pub fn format_analysis(report: &AnalysisReport, markdown: bool) -> String {
    if markdown {
        return report.to_markdown();
    }

    let lines = report.to_lines();
    let width = lines.first().map(|l| l.chars().count() * 2).unwrap_or(20);

    let mut output = String::new();
    for (i, line) in lines.iter().enumerate() {
        output.push_str(line);
        output.push('\n');
        if i == 0 {
            output.push_str(&separator(width));
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionLedger;
    use crate::models::{Category, Money, PaymentMethod, Profile, Transaction};
    use chrono::NaiveDate;

    fn dashboard() -> Dashboard {
        let mut ledger = TransactionLedger::new();
        ledger
            .add(Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                Money::from_cents(5000),
                Category::Food,
                PaymentMethod::Cash,
            ))
            .unwrap();
        ledger
            .add(Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                Money::from_cents(3000),
                Category::Transport,
                PaymentMethod::Alipay,
            ))
            .unwrap();
        Dashboard::build(&ledger)
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_dashboard_text() {
        let text = format_dashboard(&dashboard(), "¥", "%Y-%m-%d");
        assert!(text.contains("消费记录 (2 条)"));
        assert!(text.contains("总支出: ¥80.00"));
        assert!(text.contains("消费趋势"));
        assert!(text.contains("62.5%"));
        assert!(text.contains("37.5%"));

        // Newest record is listed first
        let newest = text.find("2024-01-02").unwrap();
        let oldest = text.find("2024-01-01").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_empty_dashboard_text() {
        let text = format_dashboard(&Dashboard::default(), "¥", "%Y-%m-%d");
        assert!(text.contains("总支出: ¥0.00"));
        assert!(!text.contains("类别分布"));
    }

    #[test]
    fn test_format_analysis() {
        let report = AnalysisReport::generate(&Profile::default());
        let plain = format_analysis(&report, false);
        assert!(plain.starts_with(report.title()));
        assert!(plain.contains("─"));

        let markdown = format_analysis(&report, true);
        assert_eq!(markdown, report.to_markdown());
    }
}
