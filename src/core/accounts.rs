//! User directory management: registration and credential checks.

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::domain::UserDirectory;
use crate::errors::TrackerError;
use crate::ledger::{BudgetRegistry, Ledger};
use crate::storage::json_backend::ensure_dir;
use crate::storage::{load_store, save_store};

/// Owns the `users.json` store and gates access to the per-user sessions.
pub struct AccountManager {
    config: StoreConfig,
    directory: UserDirectory,
}

impl AccountManager {
    /// Loads the user directory. An unparsable store is reported and
    /// replaced with an empty directory; the next registration rewrites it.
    pub fn open(config: StoreConfig) -> Result<Self, TrackerError> {
        ensure_dir(config.data_dir())?;
        let directory = match load_store(&config.users_file()) {
            Ok(directory) => directory,
            Err(TrackerError::Storage(message)) => {
                warn!(%message, "user directory unreadable, starting empty");
                UserDirectory::new()
            }
            Err(err) => return Err(err),
        };
        Ok(Self { config, directory })
    }

    /// Registers a new user and seeds their empty transaction and budget
    /// stores, so the first login finds well-formed files.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), TrackerError> {
        self.directory.register(username, password)?;
        save_store(&self.directory, &self.config.users_file())?;
        save_store(&Ledger::new(), &self.config.transactions_file(username))?;
        save_store(
            &BudgetRegistry::new(),
            &self.config.budgets_file(username),
        )?;
        info!(username, "registered user");
        Ok(())
    }

    /// Checks the supplied credentials against the directory.
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.directory.verify(username, password)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }
}
