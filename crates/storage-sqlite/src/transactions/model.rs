//! Database models for transactions.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;

use budgetbook_core::errors::Error;
use budgetbook_core::transactions::{NewTransaction, Transaction, TransactionKind};

use crate::errors::StorageError;

/// Database model for transactions. Amounts are kept as decimal text.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a transaction
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub user_id: i64,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(domain: NewTransaction) -> Self {
        Self {
            user_id: domain.user_id,
            kind: domain.kind.as_str().to_string(),
            category: domain.category,
            amount: domain.amount.to_string(),
            date: domain.date,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let kind = TransactionKind::from_str(&db.kind).map_err(|_| {
            StorageError::SerializationError(format!(
                "transaction {} has unknown kind '{}'",
                db.id, db.kind
            ))
        })?;
        let amount = Decimal::from_str(&db.amount).map_err(|e| {
            StorageError::SerializationError(format!(
                "transaction {} has invalid amount '{}': {}",
                db.id, db.amount, e
            ))
        })?;

        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            kind,
            category: db.category,
            amount,
            date: db.date,
            created_at: db.created_at,
        })
    }
}

pub(crate) fn into_domain(rows: Vec<TransactionDB>) -> budgetbook_core::Result<Vec<Transaction>> {
    rows.into_iter().map(Transaction::try_from).collect()
}
