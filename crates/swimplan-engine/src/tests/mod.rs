use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary plans directory
pub fn create_test_plans_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a plan file with content, creating parent folders as needed
pub fn create_test_file(plans_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = plans_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
