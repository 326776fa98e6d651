/*!
 * Common test utilities for the locale-lint test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Routes library logs through the test harness, `RUST_LOG=debug` shows them
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes `<root>/<locale>/<namespace>.json`
pub fn create_locale_file(root: &Path, locale: &str, namespace: &str, content: &str) -> Result<PathBuf> {
    create_test_file(root, &format!("{}/{}.json", locale, namespace), content)
}

/// Writes a config file pointing at `locale_path` with the given prohibited text entries
pub fn create_config(dir: &Path, locale_path: &str, prohibited_text: &str) -> Result<PathBuf> {
    let content = format!(
        r#"{{
    "i18n": {{ "defaultLocale": "en" }},
    "localePath": "{}",
    "defaultNS": "common",
    "prohibitedText": {}
}}"#,
        locale_path, prohibited_text
    );
    create_test_file(dir, "locale-lint.json", &content)
}
