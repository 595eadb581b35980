//! Transaction model
//!
//! One user-entered expense. Records carry no identifier; two identical
//! submissions are two indistinguishable, equally valid rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, PaymentMethod};
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Amount spent (always positive once accepted by a ledger)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// How it was paid
    pub payment_method: PaymentMethod,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction with an empty note
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            payment_method,
            note: String::new(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.payment_method
        )?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for crate::error::LedgerError {
    fn from(err: TransactionValidationError) -> Self {
        match err {
            TransactionValidationError::NonPositiveAmount(amount) => {
                Self::non_positive_amount(amount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            date(2025, 1, 15),
            Money::from_cents(5000),
            Category::Food,
            PaymentMethod::Cash,
        );
        assert_eq!(txn.date, date(2025, 1, 15));
        assert_eq!(txn.amount.cents(), 5000);
        assert!(txn.note.is_empty());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_and_negative() {
        let zero = Transaction::new(date(2025, 1, 1), Money::zero(), Category::Food, PaymentMethod::Cash);
        assert_eq!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let negative = Transaction::new(
            date(2025, 1, 1),
            Money::from_cents(-1),
            Category::Food,
            PaymentMethod::Cash,
        );
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validation_error_converts_to_ledger_error() {
        let err: crate::error::LedgerError =
            TransactionValidationError::NonPositiveAmount(Money::zero()).into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            date(2025, 1, 15),
            Money::from_cents(5000),
            Category::Food,
            PaymentMethod::Wechat,
        )
        .with_note("午饭");

        assert_eq!(format!("{}", txn), "2025-01-15 餐饮 ¥50.00 微信 (午饭)");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            date(2025, 1, 15),
            Money::from_cents(1999),
            Category::Study,
            PaymentMethod::Alipay,
        )
        .with_note("textbook");

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"category\":\"study\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
