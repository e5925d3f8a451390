use chrono::NaiveDate;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use budgetbook_core::reports::{LedgerReaderTrait, LedgerSnapshot};
use budgetbook_core::transactions::Transaction;
use budgetbook_core::Result;

use crate::budgets::{self, BudgetDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema;
use crate::transactions::{self, TransactionDB};

/// Reads budgets and transactions through the pool. Never writes.
pub struct LedgerReader {
    pool: Arc<DbPool>,
}

impl LedgerReader {
    pub fn new(pool: Arc<DbPool>) -> Self {
        LedgerReader { pool }
    }
}

impl LedgerReaderTrait for LedgerReader {
    fn load_snapshot(&self, user_id: i64) -> Result<LedgerSnapshot> {
        debug!("Loading ledger snapshot for user {}", user_id);
        let mut conn = get_connection(&self.pool)?;

        // Both reads share one transaction so a concurrent write is seen
        // entirely or not at all.
        let (budget_rows, transaction_rows) = conn
            .transaction::<_, StorageError, _>(|conn| {
                let budget_rows = schema::budgets::table
                    .filter(schema::budgets::user_id.eq(user_id))
                    .order(schema::budgets::category.asc())
                    .select(BudgetDB::as_select())
                    .load::<BudgetDB>(conn)?;
                let transaction_rows = schema::transactions::table
                    .filter(schema::transactions::user_id.eq(user_id))
                    .order(schema::transactions::id.asc())
                    .select(TransactionDB::as_select())
                    .load::<TransactionDB>(conn)?;
                Ok((budget_rows, transaction_rows))
            })?;

        Ok(LedgerSnapshot {
            budgets: budgets::into_domain(budget_rows)?,
            transactions: transactions::into_domain(transaction_rows)?,
        })
    }

    fn load_transactions_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        debug!(
            "Loading transactions for user {} in [{}, {})",
            user_id, start, end
        );
        // Dates are compared as text. Chrono renders years past 9999 with a
        // leading '+', so bound the range by its last day instead of `end`.
        let last_day = end.pred_opt().unwrap_or(end);
        let mut conn = get_connection(&self.pool)?;
        let rows = schema::transactions::table
            .filter(schema::transactions::user_id.eq(user_id))
            .filter(schema::transactions::date.ge(start))
            .filter(schema::transactions::date.le(last_day))
            .order(schema::transactions::id.asc())
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        transactions::into_domain(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::BudgetRepository;
    use crate::db::test_support::{insert_user, setup};
    use crate::transactions::TransactionRepository;
    use budgetbook_core::budgets::{BudgetRepositoryTrait, NewBudget};
    use budgetbook_core::reports::{ReportService, ReportServiceTrait};
    use budgetbook_core::transactions::{NewTransaction, TransactionKind, TransactionRepositoryTrait};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn tx(
        user_id: i64,
        kind: TransactionKind,
        category: &str,
        amount: Decimal,
        date: (i32, u32, u32),
    ) -> NewTransaction {
        NewTransaction {
            user_id,
            kind,
            category: category.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn snapshot_contains_only_the_users_rows() {
        let db = setup();
        let alice = insert_user(&db.pool, "alice");
        let bob = insert_user(&db.pool, "bob");
        let transactions = TransactionRepository::new(db.pool.clone(), db.writer.clone());
        let budgets = BudgetRepository::new(db.pool.clone(), db.writer.clone());

        budgets
            .upsert(NewBudget {
                user_id: alice,
                category: "Food".to_string(),
                limit_amount: dec!(100),
            })
            .await
            .unwrap();
        transactions
            .insert(tx(alice, TransactionKind::Expense, "Food", dec!(40), (2024, 3, 1)))
            .await
            .unwrap();
        transactions
            .insert(tx(bob, TransactionKind::Expense, "Food", dec!(70), (2024, 3, 1)))
            .await
            .unwrap();

        let reader = LedgerReader::new(db.pool.clone());
        let snapshot = reader.load_snapshot(alice).unwrap();
        assert_eq!(snapshot.budgets.len(), 1);
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.transactions[0].amount, dec!(40));
    }

    #[tokio::test]
    async fn month_window_is_half_open() {
        let db = setup();
        let user_id = insert_user(&db.pool, "alice");
        let transactions = TransactionRepository::new(db.pool.clone(), db.writer.clone());

        for date in [(2024, 2, 29), (2024, 3, 1), (2024, 3, 31), (2024, 4, 1)] {
            transactions
                .insert(tx(user_id, TransactionKind::Income, "Salary", dec!(1), date))
                .await
                .unwrap();
        }

        let reader = LedgerReader::new(db.pool.clone());
        let march = reader
            .load_transactions_between(
                user_id,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            )
            .unwrap();
        let days: Vec<NaiveDate> = march.iter().map(|t| t.date).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn reports_over_a_real_store() {
        let db = setup();
        let user_id = insert_user(&db.pool, "alice");
        let transactions = TransactionRepository::new(db.pool.clone(), db.writer.clone());
        let budgets = BudgetRepository::new(db.pool.clone(), db.writer.clone());

        budgets
            .upsert(NewBudget {
                user_id,
                category: "Food".to_string(),
                limit_amount: dec!(100),
            })
            .await
            .unwrap();
        for (kind, category, amount, date) in [
            (TransactionKind::Income, "Salary", dec!(1000), (2024, 3, 1)),
            (TransactionKind::Expense, "Food", dec!(40), (2024, 3, 5)),
            (TransactionKind::Expense, "Food", dec!(70), (2024, 3, 20)),
            (TransactionKind::Expense, "Rent", dec!(500), (2024, 4, 1)),
        ] {
            transactions
                .insert(tx(user_id, kind, category, amount, date))
                .await
                .unwrap();
        }

        let service = ReportService::new(Arc::new(LedgerReader::new(db.pool.clone())));

        let statuses = service.check_budgets(user_id).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].spent, dec!(110));
        assert!(statuses[0].exceeded);

        let report = service.monthly_report(user_id, 3, 2024).unwrap();
        assert_eq!(report.income, dec!(1000));
        assert_eq!(report.expense, dec!(110));
        assert_eq!(report.savings, dec!(890));
    }
}
