//! budgetbook core - domain entities, services, and traits.
//!
//! This crate holds the ledger rules and the budget aggregation engine.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod reports;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
