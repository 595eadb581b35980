//! Core data models for Moonlight Ledger
//!
//! This module contains the data structures of the expense-tracking domain:
//! transactions, money amounts, category and payment enumerations, and the
//! user profile that parameterizes the analysis report.

pub mod category;
pub mod money;
pub mod profile;
pub mod transaction;

pub use category::{Category, LabelParseError, PaymentMethod};
pub use money::{Money, MoneyParseError};
pub use profile::{Gender, Major, Profile};
pub use transaction::{Transaction, TransactionValidationError};
