//! SQLite storage implementation for budgetbook.
//!
//! This crate is the ledger store. It implements the repository traits
//! defined in `budgetbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, transactions and budgets
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! All writes go through a single writer actor ([`WriteHandle`]) that runs
//! each job inside an immediate transaction. Reads use the connection pool.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!      │               │
//!  pool (reads)   writer actor (writes)
//!      └───────┬───────┘
//!              ▼
//!          SQLite DB
//! ```

pub mod budgets;
pub mod db;
pub mod errors;
pub mod ledger;
pub mod schema;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from budgetbook-core for convenience
pub use budgetbook_core::errors::{DatabaseError, Error, Result};
