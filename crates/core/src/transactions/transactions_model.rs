//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, TRANSACTION_KIND_EXPENSE, TRANSACTION_KIND_INCOME};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::decimal_utils::parse_positive_decimal;

/// Direction of a cash movement. The stored amount is always positive;
/// the kind decides whether it adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => TRANSACTION_KIND_INCOME,
            TransactionKind::Expense => TRANSACTION_KIND_EXPENSE,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            TRANSACTION_KIND_INCOME => Ok(TransactionKind::Income),
            TRANSACTION_KIND_EXPENSE => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::InvalidInput(format!(
                "transaction kind must be 'income' or 'expense', got '{}'",
                s
            ))
            .into()),
        }
    }
}

/// Domain model representing a recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Validated transaction ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: i64,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Raw transaction input as received from a front end.
///
/// Every field is text so that malformed values surface as validation
/// errors instead of deserialization failures.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionInput {
    pub kind: String,
    pub category: String,
    pub amount: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewTransactionInput {
    /// Validates the raw input. `today` is used when no date was supplied.
    pub fn validate(self, user_id: i64, today: NaiveDate) -> Result<NewTransaction> {
        let kind: TransactionKind = self.kind.parse()?;
        let amount = parse_positive_decimal("amount", &self.amount)?;
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)?,
        };

        Ok(NewTransaction {
            user_id,
            kind,
            category: self.category,
            amount,
            date,
        })
    }
}
