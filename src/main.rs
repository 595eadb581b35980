use anyhow::Result;
use clap::{Parser, Subcommand};

use moonlight_ledger::cli::{
    handle_config_command, handle_report_command, handle_summary_command, ReportArgs,
    SummaryArgs,
};
use moonlight_ledger::config::{paths::MoonlightPaths, settings::Settings};
use moonlight_ledger::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "moonlight",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense ledger for students who run out of money each month",
    long_about = "Moonlight Ledger records daily spending, charts it by day and by \
                  category, and prints a short report on how budgeting and \
                  record-keeping habits relate to running out of money before \
                  the month ends. Records live only for the session; export them \
                  to CSV to keep them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the moonlight analysis report for a profile
    Report(ReportArgs),

    /// Summarize a previously exported CSV file
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MoonlightPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            logging::init(LogTarget::File(&log_file), &settings.log_filter)?;
            moonlight_ledger::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Report(args)) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_report_command(args, &settings)?;
        }
        Some(Commands::Summary(args)) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_summary_command(args, &settings)?;
        }
        Some(Commands::Config) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_config_command(&paths, &settings);
        }
    }

    Ok(())
}
