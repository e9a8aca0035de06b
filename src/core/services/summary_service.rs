//! Aggregation over the transaction history and budget registry.

use std::collections::HashMap;

use crate::domain::{Transaction, TransactionKind};
use crate::ledger::BudgetRegistry;

/// Whole-history income, expense, and net totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceReport {
    pub income_total: f64,
    pub expense_total: f64,
    pub balance: f64,
}

/// Read-only reporting helpers. Every computation is a single linear pass
/// over the full history; there is no period filtering.
pub struct SummaryService;

impl SummaryService {
    /// Sums amounts per category, optionally restricted to one kind.
    /// Categories bucket by exact string match.
    pub fn totals_by_category(
        transactions: &[Transaction],
        kind_filter: Option<TransactionKind>,
    ) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for txn in transactions {
            if kind_filter.is_some_and(|kind| txn.kind != kind) {
                continue;
            }
            *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        totals
    }

    /// Income, expense, and income minus expense over the whole history.
    pub fn income_expense_balance(transactions: &[Transaction]) -> BalanceReport {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income_total += txn.amount,
                TransactionKind::Expense => expense_total += txn.amount,
            }
        }
        BalanceReport {
            income_total,
            expense_total,
            balance: income_total - expense_total,
        }
    }

    /// Expense total for one category, the input to the breach check.
    pub fn expense_total_for(transactions: &[Transaction], category: &str) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense && txn.category == category)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Whether spending `candidate_amount` on `category` would push the
    /// cumulative expense total past the configured limit. A category with
    /// no limit never breaches. Advisory only; callers decide whether to
    /// block or merely warn.
    pub fn would_breach_budget(
        category: &str,
        candidate_amount: f64,
        registry: &BudgetRegistry,
        existing_expense_total: f64,
    ) -> bool {
        match registry.limit_for(category) {
            Some(limit) => existing_expense_total + candidate_amount > limit,
            None => false,
        }
    }
}
