//! Display formatting for terminal output
//!
//! Provides utilities for formatting records, the dashboard and the
//! analysis report for the command-line commands.

pub mod report;
pub mod transaction;

pub use report::{format_analysis, format_dashboard};
pub use transaction::{format_record_short, format_record_table};
