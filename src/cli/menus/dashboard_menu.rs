//! Dashboard menu for the logged-in user: record transactions, manage
//! budgets, and view spending reports.

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use crate::cli::{io, output};
use crate::core::services::SummaryService;
use crate::core::session::Session;
use crate::domain::{Transaction, TransactionKind};
use crate::errors::TrackerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn run(session: &mut Session, theme: &ColorfulTheme) -> Result<(), TrackerError> {
    loop {
        output::section(format!("Dashboard — {}", session.username()));
        let choice = io::select_action(
            theme,
            "Choose an action",
            &[
                "Add transaction",
                "View transactions",
                "Set budget",
                "View budgets",
                "Spending summary",
                "Log out",
            ],
        )?;
        match choice {
            0 => add_transaction(session, theme)?,
            1 => view_transactions(session),
            2 => set_budget(session, theme)?,
            3 => view_budgets(session),
            4 => spending_summary(session),
            _ => break,
        }
    }
    output::info("Logged out.");
    Ok(())
}

fn add_transaction(session: &mut Session, theme: &ColorfulTheme) -> Result<(), TrackerError> {
    let kind = match io::select_action(theme, "Kind", &["Expense", "Income"])? {
        0 => TransactionKind::Expense,
        _ => TransactionKind::Income,
    };
    let raw_amount = io::prompt_text(theme, "Amount")?;
    let amount = match Transaction::parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    let category = io::prompt_text(theme, "Category")?;
    let raw_date = io::prompt_optional_text(theme, "Date (YYYY-MM-DD, empty for today)")?;
    let date = if raw_date.trim().is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                output::error(format!("`{}` is not a valid date", raw_date.trim()));
                return Ok(());
            }
        }
    };

    // Budget limits only guard expenses; the check is advisory and the user
    // may record the transaction anyway.
    if kind == TransactionKind::Expense && session.would_breach(&category, amount) {
        let limit = session
            .budgets()
            .limit_for(&category)
            .unwrap_or_default();
        output::warning(format!(
            "This expense pushes `{}` past its budget of {:.2}.",
            category, limit
        ));
        if !io::confirm_action(theme, "Record it anyway?", false)? {
            output::info("Transaction discarded.");
            return Ok(());
        }
    }

    let transaction = match Transaction::new(kind, amount, category, date) {
        Ok(transaction) => transaction,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    session.record_transaction(transaction)?;
    output::success("Transaction recorded.");
    Ok(())
}

fn view_transactions(session: &Session) {
    if session.ledger().is_empty() {
        output::info("No transactions yet.");
        return;
    }
    println!("{:<12} {:>10}  {:<8} {}", "Date", "Amount", "Kind", "Category");
    for txn in session.ledger().by_date_desc() {
        println!(
            "{:<12} {:>10.2}  {:<8} {}",
            txn.date.format(DATE_FORMAT),
            txn.amount,
            txn.kind.to_string(),
            txn.category
        );
    }
}

fn set_budget(session: &mut Session, theme: &ColorfulTheme) -> Result<(), TrackerError> {
    let category = io::prompt_text(theme, "Category")?;
    let raw_limit = io::prompt_text(theme, "Budget limit")?;
    let limit = match Transaction::parse_amount(&raw_limit) {
        Ok(limit) => limit,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    session.set_budget(&category, limit)?;
    output::success(format!("Budget for `{}` set to {:.2}.", category, limit));
    Ok(())
}

fn view_budgets(session: &Session) {
    if session.budgets().is_empty() {
        output::info("No budgets set.");
        return;
    }
    println!("{:<20} {:>10} {:>10}", "Category", "Limit", "Spent");
    for (category, limit) in session.budgets().get_all() {
        let spent = SummaryService::expense_total_for(session.ledger().all(), category);
        println!("{:<20} {:>10.2} {:>10.2}", category, limit, spent);
    }
}

fn spending_summary(session: &Session) {
    let totals =
        SummaryService::totals_by_category(session.ledger().all(), Some(TransactionKind::Expense));
    if totals.is_empty() {
        output::info("No expenses to summarize.");
    } else {
        let grand_total: f64 = totals.values().sum();
        let mut rows: Vec<(&String, &f64)> = totals.iter().collect();
        rows.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        output::section("Expenses by category");
        for (category, total) in rows {
            println!(
                "{:<20} {:>10.2}  ({:>5.1}%)",
                category,
                total,
                total / grand_total * 100.0
            );
        }
    }

    let report = SummaryService::income_expense_balance(session.ledger().all());
    output::section("Totals");
    println!("{:<20} {:>10.2}", "Income", report.income_total);
    println!("{:<20} {:>10.2}", "Expenses", report.expense_total);
    println!("{:<20} {:>10.2}", "Balance", report.balance);
}
