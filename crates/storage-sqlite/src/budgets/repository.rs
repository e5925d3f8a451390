use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use budgetbook_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use budgetbook_core::Result;

use super::model::{into_domain, BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn upsert(&self, budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = chrono::Utc::now().naive_utc();

                let existing_id = budgets::table
                    .filter(budgets::user_id.eq(budget.user_id))
                    .filter(budgets::category.eq(&budget.category))
                    .select(budgets::id)
                    .first::<i64>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let result_db = match existing_id {
                    Some(existing_id) => diesel::update(budgets::table.find(existing_id))
                        .set((
                            budgets::limit_amount.eq(budget.limit_amount.to_string()),
                            budgets::updated_at.eq(now),
                        ))
                        .returning(BudgetDB::as_returning())
                        .get_result(conn),
                    None => diesel::insert_into(budgets::table)
                        .values(NewBudgetDB::new(budget, now))
                        .returning(BudgetDB::as_returning())
                        .get_result(conn),
                }
                .map_err(StorageError::from)?;

                Budget::try_from(result_db)
            })
            .await
    }

    fn list_by_user(&self, user_id: i64) -> Result<Vec<Budget>> {
        debug!("Listing budgets for user {}", user_id);
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::category.asc())
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        into_domain(rows)
    }
}
