//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the session and display layers.

pub mod config;
pub mod report;
pub mod summary;

pub use config::handle_config_command;
pub use report::{handle_report_command, ReportArgs};
pub use summary::{handle_summary_command, SummaryArgs};
