//! CLI command summarizing an exported CSV
//!
//! The file is loaded into a fresh in-memory ledger; nothing is written back.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::{LedgerError, LedgerResult};
use crate::export::read_records;
use crate::ledger::TransactionLedger;
use crate::session::Session;

/// Arguments for `moonlight summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// CSV file previously exported from the dashboard
    pub file: PathBuf,

    /// Print the dashboard as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load an exported CSV into a new session
pub fn load_session(args: &SummaryArgs, settings: &Settings) -> LedgerResult<Session> {
    let file = File::open(&args.file).map_err(|e| {
        LedgerError::Io(format!("Failed to open {}: {}", args.file.display(), e))
    })?;
    let records = read_records(BufReader::new(file))?;

    let mut ledger = TransactionLedger::new();
    let loaded = ledger.extend_validated(records)?;
    info!(file = %args.file.display(), records = loaded, "records loaded");

    Ok(Session::with_ledger(ledger, settings.default_profile))
}

/// Render the summary in the requested format
pub fn render_summary(args: &SummaryArgs, settings: &Settings) -> LedgerResult<String> {
    let dashboard = load_session(args, settings)?.dashboard();

    if args.json {
        let mut json = serde_json::to_string_pretty(&dashboard)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_dashboard(
            &dashboard,
            &settings.currency_symbol,
            &settings.date_format,
        ))
    }
}

/// Handle `moonlight summary`
pub fn handle_summary_command(args: SummaryArgs, settings: &Settings) -> LedgerResult<()> {
    print!("{}", render_summary(&args, settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EXPORTED: &str = "日期,金额,类别,支付方式,备注\n\
                            2024-01-01,50.00,餐饮,现金,\n\
                            2024-01-02,30.00,交通,银行卡,地铁\n";

    fn write_csv(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("消费记录_20240102.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_text_summary() {
        let dir = TempDir::new().unwrap();
        let args = SummaryArgs {
            file: write_csv(&dir, EXPORTED),
            json: false,
        };

        let text = render_summary(&args, &Settings::default()).unwrap();
        assert!(text.contains("总支出: ¥80.00"));
        assert!(text.contains("地铁"));
    }

    #[test]
    fn test_json_summary() {
        let dir = TempDir::new().unwrap();
        let args = SummaryArgs {
            file: write_csv(&dir, EXPORTED),
            json: true,
        };

        let json = render_summary(&args, &Settings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["record_count"], 2);
        assert_eq!(value["total"], 8000);
        assert_eq!(value["records"][0]["date"], "2024-01-02");
    }

    #[test]
    fn test_non_positive_row_rejects_whole_file() {
        let dir = TempDir::new().unwrap();
        let args = SummaryArgs {
            file: write_csv(
                &dir,
                "日期,金额,类别,支付方式,备注\n2024-01-01,50.00,餐饮,现金,\n2024-01-02,0,交通,现金,\n",
            ),
            json: false,
        };

        let err = render_summary(&args, &Settings::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rows_overflowing_total_reject_whole_file() {
        let dir = TempDir::new().unwrap();
        let args = SummaryArgs {
            file: write_csv(
                &dir,
                "日期,金额,类别,支付方式,备注\n\
                 2024-01-01,92233720368547758.00,餐饮,现金,\n\
                 2024-01-02,92233720368547758.00,交通,现金,\n",
            ),
            json: true,
        };

        let err = render_summary(&args, &Settings::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let args = SummaryArgs {
            file: dir.path().join("nope.csv"),
            json: false,
        };

        assert!(matches!(
            render_summary(&args, &Settings::default()),
            Err(LedgerError::Io(_))
        ));
    }
}
