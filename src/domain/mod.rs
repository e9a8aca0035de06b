//! Domain records shared across the ledger, registry, and storage layers.

pub mod transaction;
pub mod user;

pub use transaction::{Transaction, TransactionKind};
pub use user::UserDirectory;
