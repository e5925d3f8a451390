use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::transactions_model::{NewTransactionInput, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::today_local;

pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { repository }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn add_transaction(
        &self,
        user_id: i64,
        input: NewTransactionInput,
    ) -> Result<Transaction> {
        // Validation must finish before the write is queued.
        let new_transaction = input.validate(user_id, today_local())?;
        let transaction = self.repository.insert(new_transaction).await?;
        debug!(
            "Recorded {} transaction {} for user {}",
            transaction.kind, transaction.id, user_id
        );
        Ok(transaction)
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<usize> {
        let deleted = self.repository.delete(transaction_id).await?;
        if deleted == 0 {
            debug!("Transaction {} not found, nothing deleted", transaction_id);
        }
        Ok(deleted)
    }

    fn list_transactions(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.repository.list_by_user(user_id)
    }
}
