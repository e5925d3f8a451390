use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, NewTransactionInput, Transaction};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    /// Deletes by id regardless of owner; returns the number of rows removed.
    async fn delete(&self, transaction_id: i64) -> Result<usize>;
    /// All transactions of a user, ordered by id ascending.
    fn list_by_user(&self, user_id: i64) -> Result<Vec<Transaction>>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn add_transaction(
        &self,
        user_id: i64,
        input: NewTransactionInput,
    ) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: i64) -> Result<usize>;
    fn list_transactions(&self, user_id: i64) -> Result<Vec<Transaction>>;
}
