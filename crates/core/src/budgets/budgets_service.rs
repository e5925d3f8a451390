use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::budgets_model::{Budget, BudgetInput};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn set_budget(&self, user_id: i64, input: BudgetInput) -> Result<Budget> {
        let new_budget = input.validate(user_id)?;
        let budget = self.repository.upsert(new_budget).await?;
        debug!(
            "Budget for '{}' set to {} (user {})",
            budget.category, budget.limit_amount, user_id
        );
        Ok(budget)
    }

    fn list_budgets(&self, user_id: i64) -> Result<Vec<Budget>> {
        self.repository.list_by_user(user_id)
    }
}
