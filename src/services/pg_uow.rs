//! PostgreSQL unit of work backing the transfer executor.
//!
//! One [`PgTransferUow`] wraps one open sqlx transaction. `SELECT ... FOR
//! UPDATE` holds both account rows until commit, so no reader observes a
//! partially applied transfer. Dropping the value without commit rolls the
//! transaction back (sqlx drop semantics).

use crate::db::DbPool;
use crate::services::transfer::{AccountView, NewLedgerEntry, StoreError, TransferUow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Postgres;

pub struct PgTransferUow {
    tx: Option<sqlx::Transaction<'static, Postgres>>,
}

impl PgTransferUow {
    /// Open a database transaction for one transfer.
    pub async fn begin(pool: &DbPool) -> Result<Self, StoreError> {
        let tx = pool.begin().await?;
        Ok(Self { tx: Some(tx) })
    }

    fn tx(&mut self) -> Result<&mut sqlx::Transaction<'static, Postgres>, StoreError> {
        self.tx
            .as_mut()
            .ok_or_else(|| StoreError("unit of work already committed".to_string()))
    }
}

#[async_trait]
impl TransferUow for PgTransferUow {
    async fn lock_account(&mut self, id: i64) -> Result<Option<AccountView>, StoreError> {
        let tx = self.tx()?;
        let view = sqlx::query_as::<_, AccountView>(
            "SELECT id, balance FROM accounts WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(view)
    }

    async fn apply_delta(&mut self, id: i64, delta: Decimal) -> Result<(), StoreError> {
        let tx = self.tx()?;
        sqlx::query("UPDATE accounts SET balance = balance + $1 WHERE id = $2")
            .bind(delta)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<i64, StoreError> {
        let tx = self.tx()?;
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (account_id, amount, currency, entry_date, entry_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(entry.account_id)
        .bind(entry.amount)
        .bind(&entry.currency)
        .bind(entry.entry_date)
        .bind(entry.entry_type.as_str())
        .fetch_one(&mut **tx)
        .await?;
        Ok(id)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| StoreError("unit of work already committed".to_string()))?;
        tx.commit().await?;
        Ok(())
    }
}
