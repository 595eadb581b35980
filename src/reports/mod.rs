//! Reports module for Moonlight Ledger
//!
//! Derived views over the session: the templated moonlight analysis, the
//! daily spending trend, the category breakdown, and the dashboard snapshot
//! that bundles them for renderers.

pub mod analysis;
pub mod breakdown;
pub mod dashboard;
pub mod trend;

pub use analysis::{AnalysisReport, HabitPair, Recommendation, RecordKeepingEffect, RiskFocus};
pub use breakdown::{CategoryBreakdown, CategorySlice};
pub use dashboard::Dashboard;
pub use trend::{DailyPoint, DailyTrend};
