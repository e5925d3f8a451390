//! SQLite storage implementation for ledger transactions.

mod model;
mod repository;

pub use model::{NewTransactionDB, TransactionDB};
pub use repository::TransactionRepository;

pub(crate) use model::into_domain;
