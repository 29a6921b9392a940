//! Transfer executor - core business logic for account-to-account transfers.
//!
//! A transfer moves an amount from a sender account to a receiver account and
//! appends two ledger rows (one `debit` on the sender, one `credit` on the
//! receiver). All four writes happen inside a single unit of work: either
//! everything commits or nothing does.
//!
//! The executor is written against the [`TransferUow`] trait rather than a
//! concrete database handle so the same validation and sequencing logic runs
//! over PostgreSQL in production and over the in-memory bank in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Failure raised by a unit-of-work backend.
///
/// Backends collapse their native errors into this type so the executor does
/// not depend on sqlx. The message is logged server-side; clients only ever
/// see an opaque internal error.
#[derive(Debug, thiserror::Error)]
#[error("storage error: {0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.to_string())
    }
}

/// Typed failure of a transfer request.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// One of the two account identifiers does not resolve.
    #[error("account not found")]
    NotFound,

    /// Sender balance is below the requested amount.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Request rejected before any account was touched.
    #[error("invalid transfer: {0}")]
    InvalidRequest(String),

    /// The unit of work could not be completed; all effects rolled back.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Direction of a ledger entry relative to its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Debit => "debit",
            EntryType::Credit => "credit",
        }
    }
}

/// Balance snapshot of a locked account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountView {
    pub id: i64,
    pub balance: Decimal,
}

/// A ledger row to be appended by the unit of work.
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub account_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDate,
    pub entry_type: EntryType,
}

/// Validated transfer request.
#[derive(Debug, Clone)]
pub struct TransferCommand {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
}

/// Identifiers of the two ledger rows written by a successful transfer.
#[derive(Debug, Clone, Copy)]
pub struct TransferOutcome {
    pub debit_entry_id: i64,
    pub credit_entry_id: i64,
}

/// Unit of work the executor drives.
///
/// An implementation represents one open storage transaction. Dropping it
/// without calling [`commit`](TransferUow::commit) must discard every staged
/// write. `lock_account` must hold the row against concurrent writers until
/// the unit of work ends.
#[async_trait]
pub trait TransferUow: Send {
    /// Lock an account row and return its current balance, or `None` if the
    /// id does not resolve.
    async fn lock_account(&mut self, id: i64) -> Result<Option<AccountView>, StoreError>;

    /// Add `delta` (possibly negative) to an account balance.
    async fn apply_delta(&mut self, id: i64, delta: Decimal) -> Result<(), StoreError>;

    /// Append one immutable ledger row, returning its identifier.
    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<i64, StoreError>;

    /// Make all staged writes durable.
    async fn commit(&mut self) -> Result<(), StoreError>;
}

/// Execute a transfer inside the given unit of work.
///
/// # Preconditions, in order
///
/// 1. Guards: amount positive, distinct accounts, plausible currency code.
///    These run before anything is locked.
/// 2. Both accounts exist - `NotFound` otherwise.
/// 3. Sender balance >= amount - `InsufficientFunds` otherwise.
///
/// # Effects on success
///
/// Sender balance decreases by `amount`, receiver balance increases by
/// `amount`, and two ledger rows are appended with matching amount, currency
/// and date. Conservation holds: the sum of the two balances is unchanged.
///
/// # Locking
///
/// Accounts are locked in ascending id order regardless of transfer
/// direction, so two concurrent transfers between the same pair of accounts
/// cannot deadlock.
///
/// # Atomicity
///
/// Any storage failure after validation leaves state as if the call never
/// happened; `uow` is dropped without commit and the backend rolls back.
pub async fn execute<U: TransferUow>(
    mut uow: U,
    cmd: &TransferCommand,
) -> Result<TransferOutcome, TransferError> {
    validate(cmd)?;

    // Stable lock order avoids deadlock on opposing concurrent transfers.
    let (first, second) = if cmd.from_account_id < cmd.to_account_id {
        (cmd.from_account_id, cmd.to_account_id)
    } else {
        (cmd.to_account_id, cmd.from_account_id)
    };

    let first_view = uow
        .lock_account(first)
        .await?
        .ok_or(TransferError::NotFound)?;
    let second_view = uow
        .lock_account(second)
        .await?
        .ok_or(TransferError::NotFound)?;

    let sender = if first_view.id == cmd.from_account_id {
        &first_view
    } else {
        &second_view
    };

    if sender.balance < cmd.amount {
        return Err(TransferError::InsufficientFunds);
    }

    uow.apply_delta(cmd.from_account_id, -cmd.amount).await?;
    uow.apply_delta(cmd.to_account_id, cmd.amount).await?;

    let debit_entry_id = uow
        .append_entry(NewLedgerEntry {
            account_id: cmd.from_account_id,
            amount: cmd.amount,
            currency: cmd.currency.clone(),
            entry_date: cmd.date,
            entry_type: EntryType::Debit,
        })
        .await?;
    let credit_entry_id = uow
        .append_entry(NewLedgerEntry {
            account_id: cmd.to_account_id,
            amount: cmd.amount,
            currency: cmd.currency.clone(),
            entry_date: cmd.date,
            entry_type: EntryType::Credit,
        })
        .await?;

    uow.commit().await?;

    Ok(TransferOutcome {
        debit_entry_id,
        credit_entry_id,
    })
}

/// Reject malformed requests before any lock is taken.
fn validate(cmd: &TransferCommand) -> Result<(), TransferError> {
    if cmd.amount <= Decimal::ZERO {
        return Err(TransferError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }
    if cmd.from_account_id == cmd.to_account_id {
        return Err(TransferError::InvalidRequest(
            "Cannot transfer to same account".to_string(),
        ));
    }
    // Shape check only; codes are not matched against an ISO list.
    if cmd.currency.len() != 3 || !cmd.currency.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(TransferError::InvalidRequest(
            "Currency must be a 3-letter code".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cmd(from: i64, to: i64, amount: Decimal, currency: &str) -> TransferCommand {
        TransferCommand {
            from_account_id: from,
            to_account_id: to,
            amount,
            currency: currency.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(matches!(
            validate(&cmd(1, 2, Decimal::ZERO, "USD")),
            Err(TransferError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate(&cmd(1, 2, dec!(-5.00), "USD")),
            Err(TransferError::InvalidRequest(_))
        ));
    }

    #[test]
    fn rejects_self_transfer() {
        assert!(matches!(
            validate(&cmd(7, 7, dec!(1.00), "USD")),
            Err(TransferError::InvalidRequest(_))
        ));
    }

    #[test]
    fn rejects_malformed_currency() {
        for code in ["US", "DOLLARS", "U1D", ""] {
            assert!(matches!(
                validate(&cmd(1, 2, dec!(1.00), code)),
                Err(TransferError::InvalidRequest(_))
            ));
        }
        assert!(validate(&cmd(1, 2, dec!(1.00), "EUR")).is_ok());
    }
}
