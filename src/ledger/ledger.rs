use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Ordered sequence of transactions for one user's session.
///
/// Records can only be appended; there is no update or delete. A wrong entry
/// is corrected by appending a compensating transaction. Serialized as a
/// bare JSON array so the on-disk layout stays a flat list of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the sequence. Validation happens at
    /// `Transaction` construction, so every appended record is well-formed.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Full sequence in insertion order. Insertion order is not necessarily
    /// chronological; use [`Ledger::by_date_desc`] for the reporting view.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions sorted newest-first by date, for display.
    pub fn by_date_desc(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
