use std::sync::Mutex;

use fintrack::config::StoreConfig;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a store configuration backed by a unique directory for each test.
pub fn setup_store_config() -> StoreConfig {
    let temp = TempDir::new().expect("create temp dir");
    let config = StoreConfig::new(temp.path());
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    config
}
