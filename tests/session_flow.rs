mod common;

use std::fs;

use chrono::NaiveDate;
use fintrack::{
    core::{accounts::AccountManager, session::Session},
    domain::{Transaction, TransactionKind},
};

use common::setup_store_config;

fn txn(kind: TransactionKind, amount: f64, category: &str) -> Transaction {
    Transaction::new(kind, amount, category, NaiveDate::from_ymd_opt(2024, 7, 15)).unwrap()
}

#[test]
fn register_login_record_reload() {
    let config = setup_store_config();
    let mut accounts = AccountManager::open(config.clone()).unwrap();
    accounts.register("alice", "hunter2").unwrap();
    assert!(accounts.login("alice", "hunter2"));
    assert!(!accounts.login("alice", "hunter3"));

    let mut session = Session::open(&config, "alice").unwrap();
    session
        .record_transaction(txn(TransactionKind::Income, 1500.0, "Salary"))
        .unwrap();
    session
        .record_transaction(txn(TransactionKind::Expense, 40.0, "Food"))
        .unwrap();

    let reopened = Session::open(&config, "alice").unwrap();
    assert_eq!(reopened.ledger().len(), 2);
    assert_eq!(reopened.ledger().all()[1].category, "Food");
}

#[test]
fn duplicate_registration_is_rejected_and_directory_unchanged() {
    let config = setup_store_config();
    let mut accounts = AccountManager::open(config.clone()).unwrap();
    accounts.register("alice", "first").unwrap();
    assert!(accounts.register("alice", "second").is_err());

    let reopened = AccountManager::open(config).unwrap();
    assert!(reopened.login("alice", "first"));
    assert!(!reopened.login("alice", "second"));
}

#[test]
fn invalid_transaction_never_reaches_the_store() {
    let config = setup_store_config();
    let mut accounts = AccountManager::open(config.clone()).unwrap();
    accounts.register("alice", "pw").unwrap();

    // Construction fails, so there is nothing to append or persist.
    assert!(Transaction::new(TransactionKind::Expense, -5.0, "Food", None).is_err());
    assert!(Transaction::new(TransactionKind::Expense, 5.0, "", None).is_err());

    let session = Session::open(&config, "alice").unwrap();
    assert!(session.ledger().is_empty());
    let raw = fs::read_to_string(config.transactions_file("alice")).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn users_see_only_their_own_stores() {
    let config = setup_store_config();
    let mut accounts = AccountManager::open(config.clone()).unwrap();
    accounts.register("alice", "pw").unwrap();
    accounts.register("bob", "pw").unwrap();

    let mut alice = Session::open(&config, "alice").unwrap();
    alice
        .record_transaction(txn(TransactionKind::Expense, 10.0, "Food"))
        .unwrap();
    alice.set_budget("Food", 100.0).unwrap();

    let bob = Session::open(&config, "bob").unwrap();
    assert!(bob.ledger().is_empty());
    assert!(bob.budgets().is_empty());
}
