//! Store location configuration.
//!
//! All file paths flow from one `StoreConfig` built at session start; nothing
//! else in the crate decides where a store lives.

use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".fintrack";
const USERS_FILE: &str = "users.json";

/// Resolved locations of the on-disk stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the data directory from `FINTRACK_HOME`, falling back to
    /// `~/.fintrack`, then to the working directory.
    pub fn from_env() -> Self {
        if let Some(custom) = env::var_os("FINTRACK_HOME") {
            return Self::new(PathBuf::from(custom));
        }
        let base = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME);
        Self::new(base)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the shared user directory store.
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    /// Path of one user's transaction store.
    pub fn transactions_file(&self, username: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}_transactions.json", username))
    }

    /// Path of one user's budget store.
    pub fn budgets_file(&self, username: &str) -> PathBuf {
        self.data_dir.join(format!("{}_budgets.json", username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_paths_are_partitioned_by_username() {
        let config = StoreConfig::new("/tmp/data");
        assert_eq!(
            config.transactions_file("alice"),
            PathBuf::from("/tmp/data/alice_transactions.json")
        );
        assert_eq!(
            config.budgets_file("alice"),
            PathBuf::from("/tmp/data/alice_budgets.json")
        );
        assert_eq!(config.users_file(), PathBuf::from("/tmp/data/users.json"));
    }

    #[test]
    fn usernames_keep_their_exact_spelling_in_paths() {
        let config = StoreConfig::new("/tmp/data");
        assert_ne!(
            config.transactions_file("Alice"),
            config.transactions_file("alice")
        );
    }
}
