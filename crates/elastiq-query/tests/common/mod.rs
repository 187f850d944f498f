//! Shared helpers for elastiq-query integration tests.

use elastiq_query::QueryBuilder;

/// Compact JSON for the builder's current document.
pub fn json_of(builder: &QueryBuilder) -> String {
    builder
        .build()
        .to_json()
        .expect("query documents always serialize")
}

/// Write an intent file into a fresh temporary directory.
///
/// The directory is returned so it outlives the test body.
pub fn intent_file(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write intent file");
    (dir, path)
}
