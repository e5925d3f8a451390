//! Read-only ledger access for the aggregation engine.

mod repository;

pub use repository::LedgerReader;
