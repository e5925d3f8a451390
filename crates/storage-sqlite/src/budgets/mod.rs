//! SQLite storage implementation for category budgets.

mod model;
mod repository;

pub use model::{BudgetDB, NewBudgetDB};
pub use repository::BudgetRepository;

pub(crate) use model::into_domain;
