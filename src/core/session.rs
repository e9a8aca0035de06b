//! Per-user session: the live containers plus their store paths.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::core::services::SummaryService;
use crate::domain::Transaction;
use crate::errors::TrackerError;
use crate::ledger::{BudgetRegistry, Ledger};
use crate::storage::{load_store, save_store};

/// Holds one user's ledger and budget registry and keeps their stores in
/// sync: every mutation is immediately followed by a whole-file persist of
/// the affected container.
pub struct Session {
    username: String,
    transactions_path: PathBuf,
    budgets_path: PathBuf,
    ledger: Ledger,
    budgets: BudgetRegistry,
}

impl Session {
    /// Loads both stores for `username`. Missing stores yield empty
    /// containers; corrupt ones are reported and replaced in memory by
    /// empty containers, and the next save overwrites them on disk.
    pub fn open(config: &StoreConfig, username: &str) -> Result<Self, TrackerError> {
        let transactions_path = config.transactions_file(username);
        let budgets_path = config.budgets_file(username);
        let ledger = load_or_empty(&transactions_path)?;
        let budgets = load_or_empty(&budgets_path)?;
        Ok(Self {
            username: username.to_string(),
            transactions_path,
            budgets_path,
            ledger,
            budgets,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetRegistry {
        &self.budgets
    }

    /// Appends a transaction and persists the full sequence.
    pub fn record_transaction(&mut self, transaction: Transaction) -> Result<(), TrackerError> {
        self.ledger.append(transaction);
        save_store(&self.ledger, &self.transactions_path)?;
        let last = self.ledger.all().last();
        info!(
            user = %self.username,
            kind = ?last.map(|t| t.kind),
            category = last.map(|t| t.category.as_str()),
            count = self.ledger.len(),
            "recorded transaction"
        );
        Ok(())
    }

    /// Sets a category limit and persists the full mapping.
    pub fn set_budget(&mut self, category: &str, limit: f64) -> Result<(), TrackerError> {
        self.budgets.set_limit(category, limit)?;
        save_store(&self.budgets, &self.budgets_path)?;
        info!(user = %self.username, category, limit, "set budget limit");
        Ok(())
    }

    /// Advisory check: would spending `candidate_amount` on `category` push
    /// cumulative expenses past the configured limit? The caller decides
    /// whether to proceed anyway.
    pub fn would_breach(&self, category: &str, candidate_amount: f64) -> bool {
        let existing = SummaryService::expense_total_for(self.ledger.all(), category);
        SummaryService::would_breach_budget(category, candidate_amount, &self.budgets, existing)
    }
}

fn load_or_empty<T>(path: &Path) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
{
    match load_store(path) {
        Ok(value) => Ok(value),
        Err(TrackerError::Storage(message)) => {
            warn!(%message, "store unreadable, starting empty");
            Ok(T::default())
        }
        Err(err) => Err(err),
    }
}
