use std::{
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Result,
};
use serde::de::DeserializeOwned;

/// Directory of JSON test case tables.
pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../test-data/cases")
}

/// Reads a table of named test cases from a JSON file in [`test_cases_dir`].
pub fn read_test_cases<T: DeserializeOwned>(file: &str) -> Result<HashMap<String, T>> {
    let path = Path::new(&test_cases_dir()).join(file);
    serde_json::from_reader(
        File::open(&path).context(format!("failed to read test cases from {file}"))?,
    )
    .context(format!("failed to parse test cases from {file}"))
}
