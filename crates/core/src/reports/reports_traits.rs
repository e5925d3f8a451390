use chrono::NaiveDate;

use crate::errors::Result;
use crate::reports::reports_model::{BudgetStatus, LedgerSnapshot, MonthlyReport};
use crate::transactions::Transaction;

/// Read access to the ledger for aggregation
pub trait LedgerReaderTrait: Send + Sync {
    /// Budgets and transactions of a user read inside one transaction.
    fn load_snapshot(&self, user_id: i64) -> Result<LedgerSnapshot>;
    /// Transactions of a user dated in `[start, end)`, ordered by id.
    fn load_transactions_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>>;
}

/// Trait for report service operations
pub trait ReportServiceTrait: Send + Sync {
    fn check_budgets(&self, user_id: i64) -> Result<Vec<BudgetStatus>>;
    fn monthly_report(&self, user_id: i64, month: u32, year: i32) -> Result<MonthlyReport>;
}
