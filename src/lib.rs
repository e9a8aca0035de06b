//! Fintrack keeps per-user income/expense ledgers and category budgets in
//! flat JSON files, with aggregation helpers for spending reports and an
//! interactive terminal front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack tracing initialized.");
    });
}
