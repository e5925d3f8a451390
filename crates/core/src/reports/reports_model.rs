//! Report domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionKind};
use crate::utils::decimal_utils::{checked_add, checked_sub};

/// Budgets and transactions of one user, read from a single committed state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    pub budgets: Vec<Budget>,
    pub transactions: Vec<Transaction>,
}

/// Consumption of one budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget_id: i64,
    pub category: String,
    pub limit_amount: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// `spent > limit_amount`; reaching the limit exactly is not exceeding it.
    pub exceeded: bool,
}

impl BudgetStatus {
    /// Fails when `limit - spent` does not fit in a decimal.
    pub fn new(budget: &Budget, spent: Decimal) -> Result<Self> {
        Ok(BudgetStatus {
            budget_id: budget.id,
            category: budget.category.clone(),
            limit_amount: budget.limit_amount,
            spent,
            remaining: checked_sub(budget.limit_amount, spent, "remaining budget")?,
            exceeded: spent > budget.limit_amount,
        })
    }
}

/// Income, expense and savings for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
    pub transaction_count: usize,
    pub expense_by_category: BTreeMap<String, Decimal>,
}

impl MonthlyReport {
    pub fn new(month: u32, year: i32) -> Self {
        MonthlyReport {
            month,
            year,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            savings: Decimal::ZERO,
            transaction_count: 0,
            expense_by_category: BTreeMap::new(),
        }
    }

    /// Folds one transaction into the totals. On error the report is left
    /// unchanged.
    pub fn add_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        let (income, expense, category_total) = match transaction.kind {
            TransactionKind::Income => (
                checked_add(self.income, transaction.amount, "monthly income")?,
                self.expense,
                None,
            ),
            TransactionKind::Expense => {
                let current = self
                    .expense_by_category
                    .get(&transaction.category)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                (
                    self.income,
                    checked_add(self.expense, transaction.amount, "monthly expense")?,
                    Some(checked_add(current, transaction.amount, "category expense")?),
                )
            }
        };
        let savings = checked_sub(income, expense, "monthly savings")?;

        if let Some(total) = category_total {
            self.expense_by_category
                .insert(transaction.category.clone(), total);
        }
        self.income = income;
        self.expense = expense;
        self.savings = savings;
        self.transaction_count += 1;
        Ok(())
    }
}
