//! Moonlight Ledger - a terminal expense ledger for university students
//!
//! Records daily spending for one session, shows it as a table, a daily
//! trend and a category breakdown, exports it to CSV, and prints a templated
//! report relating budgeting and record-keeping habits to "moonlight"
//! behaviour (spending the whole allowance before the month ends).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Records, money, categories and the user profile
//! - `ledger`: The in-memory, append-only record store
//! - `session`: One user's ledger and profile
//! - `reports`: Analysis report, daily trend, category breakdown, dashboard
//! - `export`: CSV writing and reading, export artifacts
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Non-interactive commands
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moonlight_ledger::models::{Category, Money, PaymentMethod, Profile, Transaction};
//! use moonlight_ledger::session::Session;
//!
//! let mut session = Session::new(Profile::default());
//! session
//!     .submit(Transaction::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         Money::from_cents(5000),
//!         Category::Food,
//!         PaymentMethod::Cash,
//!     ))
//!     .unwrap();
//! assert_eq!(session.dashboard().total, Money::from_cents(5000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod session;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
