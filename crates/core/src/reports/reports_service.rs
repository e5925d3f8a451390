use std::sync::Arc;

use log::{debug, warn};

use super::reports_calculator::{calculate_budget_statuses, calculate_monthly_report};
use super::reports_model::{BudgetStatus, MonthlyReport};
use super::reports_traits::{LedgerReaderTrait, ReportServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::month_bounds;

pub struct ReportService {
    ledger_reader: Arc<dyn LedgerReaderTrait>,
}

impl ReportService {
    pub fn new(ledger_reader: Arc<dyn LedgerReaderTrait>) -> Self {
        ReportService { ledger_reader }
    }
}

impl ReportServiceTrait for ReportService {
    fn check_budgets(&self, user_id: i64) -> Result<Vec<BudgetStatus>> {
        let snapshot = self.ledger_reader.load_snapshot(user_id)?;
        let statuses = calculate_budget_statuses(&snapshot.budgets, &snapshot.transactions)?;

        for status in statuses.iter().filter(|s| s.exceeded) {
            warn!(
                "User {} exceeded the '{}' budget: spent {} of {}",
                user_id, status.category, status.spent, status.limit_amount
            );
        }
        Ok(statuses)
    }

    fn monthly_report(&self, user_id: i64, month: u32, year: i32) -> Result<MonthlyReport> {
        debug!("Building monthly report {}/{} for user {}", month, year, user_id);

        let (start, end) = month_bounds(month, year)?;
        let transactions = self
            .ledger_reader
            .load_transactions_between(user_id, start, end)?;
        calculate_monthly_report(month, year, &transactions)
    }
}
