/*!
 * Tests for locale tree discovery
 */

use anyhow::Result;
use locale_lint::file_utils::FileManager;
use locale_lint::LoaderError;

use crate::common;

/// Test that locales and namespaces come from directory and file names
#[test]
fn test_findLocaleFiles_withLocaleTree_shouldListNamespacesInOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_locale_file(root, "en", "sign-in", "{}")?;
    common::create_locale_file(root, "de", "sign-in", "{}")?;
    common::create_locale_file(root, "de", "inbox", "{}")?;

    let files = FileManager::find_locale_files(root)?;
    let found: Vec<(&str, &str)> = files
        .iter()
        .map(|f| (f.locale.as_str(), f.namespace.as_str()))
        .collect();

    assert_eq!(found, vec![("de", "inbox"), ("de", "sign-in"), ("en", "sign-in")]);
    assert_eq!(files[0].path, root.join("de").join("inbox.json"));

    Ok(())
}

/// Test that hidden entries, loose files and nested directories are skipped
#[test]
fn test_findLocaleFiles_withNoise_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_locale_file(root, "en", "common", "{}")?;
    common::create_test_file(root, "README.md", "locales")?;
    common::create_test_file(root, ".cache/en.json", "{}")?;
    common::create_test_file(root, "en/.DS_Store", "")?;
    common::create_test_file(root, "en/nested/deep.json", "{}")?;

    let files = FileManager::find_locale_files(root)?;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].locale, "en");
    assert_eq!(files[0].namespace, "common");

    Ok(())
}

/// Test that an empty locale root yields no files
#[test]
fn test_findLocaleFiles_withEmptyRoot_shouldReturnNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(FileManager::find_locale_files(temp_dir.path())?.is_empty());

    Ok(())
}

/// Test that a file given as root is rejected
#[test]
fn test_findLocaleFiles_withFileAsRoot_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "locales", "")?;

    let result = FileManager::find_locale_files(&file);

    assert!(matches!(result, Err(LoaderError::NotADirectory(_))));

    Ok(())
}

/// Test reading locale files and the error for missing ones
#[test]
fn test_readBytes_shouldReadOrReportPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_locale_file(temp_dir.path(), "en", "inbox", r#"{"a": "b"}"#)?;

    assert_eq!(FileManager::read_bytes(&path)?, br#"{"a": "b"}"#.to_vec());

    // Decoding is not the loader's job
    let latin1 = temp_dir.path().join("en/latin1.json");
    std::fs::write(&latin1, b"{\"Gr\xf6\xdfe\": \"\"}")?;
    assert_eq!(FileManager::read_bytes(&latin1)?.len(), 13);

    let missing = temp_dir.path().join("en/missing.json");
    let error = FileManager::read_bytes(&missing).unwrap_err();
    assert!(error.to_string().contains("missing.json"));

    Ok(())
}
