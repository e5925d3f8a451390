use crate::budgets::budgets_model::{Budget, BudgetInput, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Inserts the budget or replaces the limit of the existing
    /// `(user_id, category)` row, atomically.
    async fn upsert(&self, budget: NewBudget) -> Result<Budget>;
    /// Budgets of a user ordered by category.
    fn list_by_user(&self, user_id: i64) -> Result<Vec<Budget>>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn set_budget(&self, user_id: i64, input: BudgetInput) -> Result<Budget>;
    fn list_budgets(&self, user_id: i64) -> Result<Vec<Budget>>;
}
