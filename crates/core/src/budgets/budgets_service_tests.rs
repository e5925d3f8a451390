//! Unit tests for the budget service.

use super::*;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockBudgetRepository {
    budgets: Mutex<Vec<Budget>>,
}

#[async_trait]
impl BudgetRepositoryTrait for MockBudgetRepository {
    async fn upsert(&self, budget: NewBudget) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let now = Utc::now().naive_utc();
        if let Some(existing) = budgets
            .iter_mut()
            .find(|b| b.user_id == budget.user_id && b.category == budget.category)
        {
            existing.limit_amount = budget.limit_amount;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let created = Budget {
            id: budgets.len() as i64 + 1,
            user_id: budget.user_id,
            category: budget.category,
            limit_amount: budget.limit_amount,
            created_at: now,
            updated_at: now,
        };
        budgets.push(created.clone());
        Ok(created)
    }

    fn list_by_user(&self, user_id: i64) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(budgets)
    }
}

fn input(category: &str, limit: &str) -> BudgetInput {
    BudgetInput {
        category: category.to_string(),
        limit_amount: limit.to_string(),
    }
}

#[tokio::test]
async fn test_set_budget_twice_keeps_latest_limit() {
    let service = BudgetService::new(Arc::new(MockBudgetRepository::default()));

    let first = service.set_budget(1, input("food", "100")).await.unwrap();
    let second = service.set_budget(1, input("food", "250.50")).await.unwrap();

    assert_eq!(first.id, second.id);
    let budgets = service.list_budgets(1).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].limit_amount, dec!(250.50));
}

#[tokio::test]
async fn test_set_budget_accepts_zero_and_negative_limits() {
    let service = BudgetService::new(Arc::new(MockBudgetRepository::default()));

    let zero = service.set_budget(1, input("fun", "0")).await.unwrap();
    let negative = service.set_budget(1, input("debt", "-20")).await.unwrap();

    assert_eq!(zero.limit_amount, dec!(0));
    assert_eq!(negative.limit_amount, dec!(-20));
}

#[tokio::test]
async fn test_set_budget_rejects_non_numeric_limit() {
    let service = BudgetService::new(Arc::new(MockBudgetRepository::default()));

    let err = service.set_budget(1, input("food", "lots")).await.unwrap_err();
    assert!(err.is_validation());
    assert!(service.list_budgets(1).unwrap().is_empty());
}

#[tokio::test]
async fn test_categories_are_case_sensitive() {
    let service = BudgetService::new(Arc::new(MockBudgetRepository::default()));

    service.set_budget(1, input("Food", "100")).await.unwrap();
    service.set_budget(1, input("food", "50")).await.unwrap();

    let categories: Vec<String> = service
        .list_budgets(1)
        .unwrap()
        .into_iter()
        .map(|b| b.category)
        .collect();
    assert_eq!(categories, vec!["Food".to_string(), "food".to_string()]);
}
