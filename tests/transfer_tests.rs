//! Transfer executor property tests, run against the in-memory bank.
//!
//! These cover the invariants the executor must protect: conservation of
//! value, all-or-nothing effects under injected storage faults, boundary
//! balances, and rejection paths that must leave state untouched.

use banking_backoffice::services::memory_uow::{Fault, MemoryBank};
use banking_backoffice::services::transfer::{
    self, EntryType, TransferCommand, TransferError,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn usd_transfer(from: i64, to: i64, amount: Decimal) -> TransferCommand {
    TransferCommand {
        from_account_id: from,
        to_account_id: to,
        amount,
        currency: "USD".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

fn seeded_bank() -> MemoryBank {
    let bank = MemoryBank::new();
    bank.open_account(1, dec!(100.00));
    bank.open_account(2, dec!(50.00));
    bank
}

#[tokio::test]
async fn successful_transfer_moves_exact_amount_and_appends_two_rows() {
    let bank = seeded_bank();

    let outcome = transfer::execute(bank.begin(), &usd_transfer(1, 2, dec!(30.00)))
        .await
        .unwrap();

    assert_eq!(bank.balance(1), Some(dec!(70.00)));
    assert_eq!(bank.balance(2), Some(dec!(80.00)));

    let ledger = bank.ledger();
    assert_eq!(ledger.len(), 2);

    let debit = &ledger[0];
    assert_eq!(debit.id, outcome.debit_entry_id);
    assert_eq!(debit.account_id, 1);
    assert_eq!(debit.amount, dec!(30.00));
    assert_eq!(debit.currency, "USD");
    assert_eq!(debit.entry_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(debit.entry_type, EntryType::Debit);

    let credit = &ledger[1];
    assert_eq!(credit.id, outcome.credit_entry_id);
    assert_eq!(credit.account_id, 2);
    assert_eq!(credit.amount, dec!(30.00));
    assert_eq!(credit.currency, "USD");
    assert_eq!(credit.entry_type, EntryType::Credit);
}

#[tokio::test]
async fn conservation_holds_across_a_chain_of_transfers() {
    let bank = MemoryBank::new();
    bank.open_account(1, dec!(500.00));
    bank.open_account(2, dec!(120.50));
    bank.open_account(3, dec!(0.00));
    let total = dec!(620.50);

    for (from, to, amount) in [
        (1, 2, dec!(75.25)),
        (2, 3, dec!(10.00)),
        (1, 3, dec!(424.75)),
        (3, 2, dec!(0.01)),
    ] {
        transfer::execute(bank.begin(), &usd_transfer(from, to, amount))
            .await
            .unwrap();
        let sum = bank.balance(1).unwrap() + bank.balance(2).unwrap() + bank.balance(3).unwrap();
        assert_eq!(sum, total);
    }
}

#[tokio::test]
async fn insufficient_funds_leaves_everything_untouched() {
    let bank = MemoryBank::new();
    bank.open_account(1, dec!(20.00));
    bank.open_account(2, dec!(50.00));

    let err = transfer::execute(bank.begin(), &usd_transfer(1, 2, dec!(25.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::InsufficientFunds));
    assert_eq!(bank.balance(1), Some(dec!(20.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn transferring_the_full_balance_leaves_sender_at_zero() {
    let bank = seeded_bank();

    transfer::execute(bank.begin(), &usd_transfer(1, 2, dec!(100.00)))
        .await
        .unwrap();

    assert_eq!(bank.balance(1), Some(dec!(0.00)));
    assert_eq!(bank.balance(2), Some(dec!(150.00)));
}

#[tokio::test]
async fn one_cent_over_the_balance_fails_without_mutation() {
    let bank = seeded_bank();

    let err = transfer::execute(bank.begin(), &usd_transfer(1, 2, dec!(100.01)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::InsufficientFunds));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn missing_sender_never_mutates_anything() {
    let bank = MemoryBank::new();
    bank.open_account(2, dec!(50.00));

    let err = transfer::execute(bank.begin(), &usd_transfer(99, 2, dec!(10.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::NotFound));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn missing_receiver_is_detected_before_any_write() {
    let bank = MemoryBank::new();
    bank.open_account(1, dec!(100.00));

    let err = transfer::execute(bank.begin(), &usd_transfer(1, 99, dec!(10.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::NotFound));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn fault_after_sender_debit_rolls_back_completely() {
    let bank = seeded_bank();

    // Second balance write fails: the sender debit is already staged.
    let uow = bank.begin_with_fault(Fault::OnApplyDelta(1));
    let err = transfer::execute(uow, &usd_transfer(1, 2, dec!(30.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::Storage(_)));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn fault_before_first_ledger_append_rolls_back_completely() {
    let bank = seeded_bank();

    let uow = bank.begin_with_fault(Fault::OnAppendEntry(0));
    let err = transfer::execute(uow, &usd_transfer(1, 2, dec!(30.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::Storage(_)));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn fault_between_the_two_ledger_appends_rolls_back_completely() {
    let bank = seeded_bank();

    let uow = bank.begin_with_fault(Fault::OnAppendEntry(1));
    let err = transfer::execute(uow, &usd_transfer(1, 2, dec!(30.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::Storage(_)));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn fault_at_commit_rolls_back_completely() {
    let bank = seeded_bank();

    let uow = bank.begin_with_fault(Fault::OnCommit);
    let err = transfer::execute(uow, &usd_transfer(1, 2, dec!(30.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::Storage(_)));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn self_transfer_is_rejected_before_any_lock() {
    let bank = seeded_bank();

    let err = transfer::execute(bank.begin(), &usd_transfer(1, 1, dec!(10.00)))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::InvalidRequest(_)));
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert!(bank.ledger().is_empty());
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let bank = seeded_bank();

    for amount in [dec!(0.00), dec!(-30.00)] {
        let err = transfer::execute(bank.begin(), &usd_transfer(1, 2, amount))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidRequest(_)));
    }
    assert_eq!(bank.balance(1), Some(dec!(100.00)));
    assert_eq!(bank.balance(2), Some(dec!(50.00)));
}

#[tokio::test]
async fn transfer_from_higher_to_lower_account_id_works() {
    // Locks are taken in ascending id order internally; the effects must
    // still follow the requested direction.
    let bank = seeded_bank();

    transfer::execute(bank.begin(), &usd_transfer(2, 1, dec!(50.00)))
        .await
        .unwrap();

    assert_eq!(bank.balance(1), Some(dec!(150.00)));
    assert_eq!(bank.balance(2), Some(dec!(0.00)));

    let ledger = bank.ledger();
    assert_eq!(ledger[0].account_id, 2);
    assert_eq!(ledger[0].entry_type, EntryType::Debit);
    assert_eq!(ledger[1].account_id, 1);
    assert_eq!(ledger[1].entry_type, EntryType::Credit);
}
