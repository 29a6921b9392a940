//! In-memory bank backing the transfer executor in tests.
//!
//! [`MemoryBank`] plays the role of the database: a shared map of account
//! balances plus an append-only ledger. [`MemoryUow`] stages writes and only
//! publishes them on commit, mirroring the rollback-on-drop semantics of the
//! PostgreSQL unit of work. A [`Fault`] can be scheduled to make a specific
//! storage call fail, which is how the atomicity tests simulate a backend
//! outage mid-transfer.

use crate::services::transfer::{
    AccountView, EntryType, NewLedgerEntry, StoreError, TransferUow,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// A committed ledger row.
#[derive(Debug, Clone)]
pub struct LedgerRow {
    pub id: i64,
    pub account_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDate,
    pub entry_type: EntryType,
}

#[derive(Debug, Default)]
struct BankState {
    accounts: BTreeMap<i64, Decimal>,
    ledger: Vec<LedgerRow>,
    next_entry_id: i64,
}

/// Storage call at which a scheduled [`Fault`] fires. Call indices are
/// zero-based within one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    OnApplyDelta(usize),
    OnAppendEntry(usize),
    OnCommit,
}

/// Thread-safe in-memory account store and transaction log.
#[derive(Debug, Default, Clone)]
pub struct MemoryBank {
    inner: Arc<Mutex<BankState>>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with the given id and opening balance.
    pub fn open_account(&self, id: i64, balance: Decimal) {
        let mut state = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.accounts.insert(id, balance);
    }

    /// Committed balance of an account, if it exists.
    pub fn balance(&self, id: i64) -> Option<Decimal> {
        let state = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.accounts.get(&id).copied()
    }

    /// Snapshot of all committed ledger rows, in append order.
    pub fn ledger(&self) -> Vec<LedgerRow> {
        let state = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.ledger.clone()
    }

    /// Start a unit of work over this bank.
    pub fn begin(&self) -> MemoryUow {
        MemoryUow {
            bank: self.clone(),
            staged_deltas: Vec::new(),
            staged_entries: Vec::new(),
            fault: None,
            delta_calls: 0,
            append_calls: 0,
            committed: false,
        }
    }

    /// Start a unit of work that fails at the given storage call.
    pub fn begin_with_fault(&self, fault: Fault) -> MemoryUow {
        let mut uow = self.begin();
        uow.fault = Some(fault);
        uow
    }
}

/// One staged transaction over a [`MemoryBank`]. Writes become visible only
/// on commit; dropping the value discards them.
pub struct MemoryUow {
    bank: MemoryBank,
    staged_deltas: Vec<(i64, Decimal)>,
    staged_entries: Vec<NewLedgerEntry>,
    fault: Option<Fault>,
    delta_calls: usize,
    append_calls: usize,
    committed: bool,
}

impl MemoryUow {
    fn injected(msg: &str) -> StoreError {
        StoreError(format!("injected fault: {msg}"))
    }
}

#[async_trait]
impl TransferUow for MemoryUow {
    async fn lock_account(&mut self, id: i64) -> Result<Option<AccountView>, StoreError> {
        let state = self
            .bank
            .inner
            .lock()
            .map_err(|_| StoreError("bank lock poisoned".to_string()))?;
        let Some(committed) = state.accounts.get(&id).copied() else {
            return Ok(None);
        };
        // Read-your-writes: fold staged deltas into the snapshot.
        let staged: Decimal = self
            .staged_deltas
            .iter()
            .filter(|(acct, _)| *acct == id)
            .map(|(_, delta)| *delta)
            .sum();
        Ok(Some(AccountView {
            id,
            balance: committed + staged,
        }))
    }

    async fn apply_delta(&mut self, id: i64, delta: Decimal) -> Result<(), StoreError> {
        if self.fault == Some(Fault::OnApplyDelta(self.delta_calls)) {
            return Err(Self::injected("balance write failed"));
        }
        self.delta_calls += 1;
        self.staged_deltas.push((id, delta));
        Ok(())
    }

    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<i64, StoreError> {
        if self.fault == Some(Fault::OnAppendEntry(self.append_calls)) {
            return Err(Self::injected("ledger append failed"));
        }
        self.append_calls += 1;
        let state = self
            .bank
            .inner
            .lock()
            .map_err(|_| StoreError("bank lock poisoned".to_string()))?;
        let id = state.next_entry_id + self.staged_entries.len() as i64 + 1;
        drop(state);
        self.staged_entries.push(entry);
        Ok(id)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        if self.committed {
            return Err(StoreError("unit of work already committed".to_string()));
        }
        if self.fault == Some(Fault::OnCommit) {
            return Err(Self::injected("commit failed"));
        }
        let mut state = self
            .bank
            .inner
            .lock()
            .map_err(|_| StoreError("bank lock poisoned".to_string()))?;

        // Mirror the database CHECK (balance >= 0) constraint.
        for (id, delta) in &self.staged_deltas {
            let balance = state
                .accounts
                .get(id)
                .copied()
                .ok_or_else(|| StoreError(format!("account {id} vanished")))?;
            if balance + *delta < Decimal::ZERO {
                return Err(StoreError(format!("balance check violated for account {id}")));
            }
        }

        for (id, delta) in self.staged_deltas.drain(..) {
            if let Some(balance) = state.accounts.get_mut(&id) {
                *balance += delta;
            }
        }
        for entry in self.staged_entries.drain(..) {
            state.next_entry_id += 1;
            let id = state.next_entry_id;
            state.ledger.push(LedgerRow {
                id,
                account_id: entry.account_id,
                amount: entry.amount,
                currency: entry.currency,
                entry_date: entry.entry_date,
                entry_type: entry.entry_type,
            });
        }
        self.committed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn staged_writes_are_invisible_until_commit() {
        let bank = MemoryBank::new();
        bank.open_account(1, dec!(100.00));

        let mut uow = bank.begin();
        uow.apply_delta(1, dec!(-40.00)).await.unwrap();
        assert_eq!(bank.balance(1), Some(dec!(100.00)));

        uow.commit().await.unwrap();
        assert_eq!(bank.balance(1), Some(dec!(60.00)));
    }

    #[tokio::test]
    async fn dropped_uow_discards_staged_writes() {
        let bank = MemoryBank::new();
        bank.open_account(1, dec!(100.00));

        {
            let mut uow = bank.begin();
            uow.apply_delta(1, dec!(-40.00)).await.unwrap();
            uow.append_entry(NewLedgerEntry {
                account_id: 1,
                amount: dec!(40.00),
                currency: "USD".to_string(),
                entry_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                entry_type: EntryType::Debit,
            })
            .await
            .unwrap();
        }

        assert_eq!(bank.balance(1), Some(dec!(100.00)));
        assert!(bank.ledger().is_empty());
    }

    #[tokio::test]
    async fn lock_account_reads_staged_deltas() {
        let bank = MemoryBank::new();
        bank.open_account(1, dec!(50.00));

        let mut uow = bank.begin();
        uow.apply_delta(1, dec!(25.00)).await.unwrap();
        let view = uow.lock_account(1).await.unwrap().unwrap();
        assert_eq!(view.balance, dec!(75.00));
    }

    #[tokio::test]
    async fn missing_account_locks_as_none() {
        let bank = MemoryBank::new();
        let mut uow = bank.begin();
        assert!(uow.lock_account(42).await.unwrap().is_none());
    }
}
