//! In-memory containers for the active session: the transaction ledger and
//! the category budget registry.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use budget::BudgetRegistry;
pub use ledger::Ledger;
