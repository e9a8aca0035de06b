//! Domain types representing ledger transactions.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Direction of a transaction. The amount itself is always positive;
/// the sign of a movement is carried here, never by the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    /// Legacy stores omit the field entirely, and those records are expenses.
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A single income or expense record. Immutable once appended to a ledger;
/// corrections are made by appending a compensating transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Builds a validated transaction. Fails when the amount is not a
    /// strictly positive finite number or the category is empty. When no
    /// date is supplied the record is stamped with today's date.
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Result<Self, TrackerError> {
        let category = category.into();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TrackerError::invalid("amount must be a positive number"));
        }
        if category.is_empty() {
            return Err(TrackerError::invalid("category must not be empty"));
        }
        Ok(Self {
            kind,
            amount,
            category,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        })
    }

    /// Parses raw user input into a positive amount.
    pub fn parse_amount(raw: &str) -> Result<f64, TrackerError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or_else(|| TrackerError::invalid(format!("`{}` is not a positive number", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_amounts() {
        for amount in [0.0, -12.5, f64::NAN, f64::INFINITY] {
            let result = Transaction::new(TransactionKind::Expense, amount, "Food", None);
            assert!(result.is_err(), "amount {amount} should be rejected");
        }
    }

    #[test]
    fn new_rejects_empty_category() {
        let result = Transaction::new(TransactionKind::Income, 10.0, "", None);
        assert!(matches!(result, Err(TrackerError::InvalidInput(_))));
    }

    #[test]
    fn new_defaults_date_to_today() {
        let txn = Transaction::new(TransactionKind::Expense, 5.0, "Coffee", None).unwrap();
        assert_eq!(txn.date, Local::now().date_naive());
    }

    #[test]
    fn parse_amount_accepts_positive_numbers_only() {
        assert_eq!(Transaction::parse_amount(" 42.50 ").unwrap(), 42.5);
        assert!(Transaction::parse_amount("abc").is_err());
        assert!(Transaction::parse_amount("-3").is_err());
        assert!(Transaction::parse_amount("0").is_err());
    }

    #[test]
    fn missing_type_field_deserializes_as_expense() {
        let raw = r#"{"amount": 12.0, "category": "Food", "date": "2024-03-01"}"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, 12.0);
    }

    #[test]
    fn kind_round_trips_through_type_field() {
        let txn = Transaction::new(
            TransactionKind::Income,
            100.0,
            "Salary",
            NaiveDate::from_ymd_opt(2024, 1, 15),
        )
        .unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains(r#""type":"income""#));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
