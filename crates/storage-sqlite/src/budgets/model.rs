//! Database models for budgets.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use budgetbook_core::budgets::{Budget, NewBudget};
use budgetbook_core::errors::Error;

use crate::errors::StorageError;

/// Database model for budgets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub limit_amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for the first budget of a category
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub user_id: i64,
    pub category: String,
    pub limit_amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewBudgetDB {
    pub fn new(domain: NewBudget, now: NaiveDateTime) -> Self {
        Self {
            user_id: domain.user_id,
            category: domain.category,
            limit_amount: domain.limit_amount.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        let limit_amount = Decimal::from_str(&db.limit_amount).map_err(|e| {
            StorageError::SerializationError(format!(
                "budget {} has invalid limit '{}': {}",
                db.id, db.limit_amount, e
            ))
        })?;

        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            limit_amount,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

pub(crate) fn into_domain(rows: Vec<BudgetDB>) -> budgetbook_core::Result<Vec<Budget>> {
    rows.into_iter().map(Budget::try_from).collect()
}
