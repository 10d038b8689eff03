use std::path::PathBuf;

use factory_data::LocalDataStore;

/// Directory of the game data bundled for tests.
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../test-data")
}

/// Loads the game data bundled for tests.
///
/// Panics if the data cannot be read, which fails the calling test.
pub fn test_data_store() -> LocalDataStore {
    match LocalDataStore::new(test_data_dir()) {
        Ok(store) => store,
        Err(error) => panic!("failed to load test data: {error:#}"),
    }
}
