//! Reports module - read-only aggregation over the ledger.
//!
//! Budget consumption and monthly income/expense rollups are computed here
//! from rows read through [`LedgerReaderTrait`]. Nothing in this module
//! writes to the store.

mod reports_calculator;
mod reports_model;
mod reports_service;
mod reports_traits;


pub use reports_calculator::{calculate_budget_statuses, calculate_monthly_report};
pub use reports_model::{BudgetStatus, LedgerSnapshot, MonthlyReport};
pub use reports_service::ReportService;
pub use reports_traits::{LedgerReaderTrait, ReportServiceTrait};
