use std::collections::HashMap;

use rust_decimal::Decimal;

use super::reports_model::{BudgetStatus, MonthlyReport};
use crate::budgets::Budget;
use crate::errors::Result;
use crate::transactions::Transaction;
use crate::utils::decimal_utils::checked_add;
use crate::utils::time_utils::month_bounds;

/// Computes how much of every budget has been spent.
///
/// Only expense transactions of the budget's owner whose category matches
/// exactly count towards it. A budget with no matching expenses reports
/// `spent = 0`. The result has one entry per budget, ordered by category.
///
/// Fails with a validation error when a total leaves the decimal range.
pub fn calculate_budget_statuses(
    budgets: &[Budget],
    transactions: &[Transaction],
) -> Result<Vec<BudgetStatus>> {
    let mut spent_by_category: HashMap<(i64, &str), Decimal> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let spent = spent_by_category
            .entry((transaction.user_id, transaction.category.as_str()))
            .or_insert(Decimal::ZERO);
        *spent = checked_add(*spent, transaction.amount, "budget spending")?;
    }

    let mut statuses = budgets
        .iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&(budget.user_id, budget.category.as_str()))
                .copied()
                .unwrap_or(Decimal::ZERO);
            BudgetStatus::new(budget, spent)
        })
        .collect::<Result<Vec<_>>>()?;

    statuses.sort_by(|a, b| a.category.cmp(&b.category));
    Ok(statuses)
}

/// Sums income and expense for the transactions dated within `month`/`year`.
///
/// Transactions outside the month are ignored, so callers may pass a wider
/// set than needed.
pub fn calculate_monthly_report(
    month: u32,
    year: i32,
    transactions: &[Transaction],
) -> Result<MonthlyReport> {
    let (start, end) = month_bounds(month, year)?;

    let mut report = MonthlyReport::new(month, year);
    for transaction in transactions
        .iter()
        .filter(|t| t.date >= start && t.date < end)
    {
        report.add_transaction(transaction)?;
    }
    Ok(report)
}
