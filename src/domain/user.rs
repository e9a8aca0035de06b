//! User accounts partitioning the per-user transaction and budget stores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Stored credentials for one user.
///
/// Passwords are kept verbatim, matching the format the tracker has always
/// written; `users.json` must stay loadable by older installs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub password: String,
}

/// Mapping of username to credentials, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user. Usernames double as store file stems, so they
    /// are restricted to filename-safe characters.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), TrackerError> {
        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::invalid(
                "username and password must not be empty",
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(TrackerError::invalid(
                "username may only contain letters, digits, `_`, `-`, and `.`",
            ));
        }
        if self.users.contains_key(username) {
            return Err(TrackerError::invalid(format!(
                "username `{}` already exists",
                username
            )));
        }
        self.users.insert(
            username.to_string(),
            UserRecord {
                password: password.to_string(),
            },
        );
        Ok(())
    }

    /// Checks a username/password pair against the directory.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .map(|record| record.password == password)
            .unwrap_or(false)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
