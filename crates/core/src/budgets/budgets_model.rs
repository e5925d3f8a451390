//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::decimal_utils::parse_decimal;

/// Spending ceiling for one category of one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated budget upsert keyed by `(user_id, category)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub user_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
}

/// Raw budget input as received from a front end
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub category: String,
    pub limit_amount: String,
}

impl BudgetInput {
    /// Any numeric limit is accepted, including zero and negative values.
    pub fn validate(self, user_id: i64) -> Result<NewBudget> {
        let limit_amount = parse_decimal("limitAmount", &self.limit_amount)?;
        Ok(NewBudget {
            user_id,
            category: self.category,
            limit_amount,
        })
    }
}
