//! Persistence adapters for the flat-file stores.

pub mod json_backend;

pub use json_backend::{load_store, save_store};
