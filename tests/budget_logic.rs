mod common;

use chrono::NaiveDate;
use fintrack::{
    core::session::Session,
    domain::{Transaction, TransactionKind},
};

use common::setup_store_config;

fn expense(amount: f64, category: &str) -> Transaction {
    Transaction::new(
        TransactionKind::Expense,
        amount,
        category,
        NaiveDate::from_ymd_opt(2024, 9, 9),
    )
    .unwrap()
}

#[test]
fn breach_check_tracks_cumulative_spend() {
    let config = setup_store_config();
    let mut session = Session::open(&config, "alice").unwrap();
    session.set_budget("Food", 100.0).unwrap();

    assert!(!session.would_breach("Food", 60.0));
    session.record_transaction(expense(60.0, "Food")).unwrap();

    assert!(session.would_breach("Food", 50.0));
    assert!(!session.would_breach("Food", 30.0));
}

#[test]
fn categories_without_limits_never_breach() {
    let config = setup_store_config();
    let mut session = Session::open(&config, "alice").unwrap();
    session.record_transaction(expense(5000.0, "Travel")).unwrap();
    assert!(!session.would_breach("Travel", 1000.0));
}

#[test]
fn income_does_not_count_against_a_budget() {
    let config = setup_store_config();
    let mut session = Session::open(&config, "alice").unwrap();
    session.set_budget("Food", 100.0).unwrap();
    session
        .record_transaction(
            Transaction::new(
                TransactionKind::Income,
                500.0,
                "Food",
                NaiveDate::from_ymd_opt(2024, 9, 1),
            )
            .unwrap(),
        )
        .unwrap();
    assert!(!session.would_breach("Food", 90.0));
}

#[test]
fn overwritten_limit_governs_the_breach_check() {
    let config = setup_store_config();
    let mut session = Session::open(&config, "alice").unwrap();
    session.set_budget("Food", 200.0).unwrap();
    session.set_budget("Food", 150.0).unwrap();
    session.record_transaction(expense(100.0, "Food")).unwrap();

    assert!(session.would_breach("Food", 60.0));
    assert!(!session.would_breach("Food", 50.0));
}

#[test]
fn budget_keys_match_categories_exactly() {
    let config = setup_store_config();
    let mut session = Session::open(&config, "alice").unwrap();
    session.set_budget("Food", 10.0).unwrap();
    session.record_transaction(expense(50.0, "food")).unwrap();

    // Spending on `food` does not count against the `Food` budget.
    assert!(!session.would_breach("Food", 5.0));
    assert!(!session.would_breach("food", 100.0));
}
