/*!
 * Tests for error types
 */

use locale_lint::{AppError, ConfigError, LoaderError};
use std::path::PathBuf;

/// Test config error messages
#[test]
fn test_configError_display_shouldNameTheProblem() {
    assert_eq!(
        ConfigError::NotFound(PathBuf::from("locale-lint.json")).to_string(),
        "config file does not exist: locale-lint.json"
    );
    assert_eq!(
        ConfigError::Load("expected value".to_string()).to_string(),
        "config file could not be loaded: expected value"
    );
    assert_eq!(
        ConfigError::Invalid("defaultNS is a required field".to_string()).to_string(),
        "config file is invalid: defaultNS is a required field"
    );
}

/// Test that app errors keep the message of the wrapped error
#[test]
fn test_appError_fromWrappedErrors_shouldKeepMessage() {
    let error: AppError = ConfigError::Invalid("bad".to_string()).into();
    assert_eq!(error.to_string(), "config file is invalid: bad");

    let error: AppError = LoaderError::NotADirectory(PathBuf::from("locales")).into();
    assert_eq!(error.to_string(), "locale path is not a directory: locales");

    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert_eq!(error.to_string(), "File error: pipe closed");
}

/// Test that errors convert into anyhow with context
#[test]
fn test_appError_intoAnyhow_shouldChainContext() {
    let error: AppError = LoaderError::ReadFile {
        path: PathBuf::from("en/inbox.json"),
        message: "permission denied".to_string(),
    }
    .into();

    let error = anyhow::Error::from(error).context("Failed to validate locales");

    assert_eq!(
        format!("{:#}", error),
        "Failed to validate locales: failed to read locale file en/inbox.json: permission denied"
    );
}

/// Test that wrapped errors appear once in an alternate-format chain
#[test]
fn test_appError_alternateFormat_shouldNotRepeatWrappedMessage() {
    use std::error::Error;

    let error: AppError = LoaderError::NotADirectory(PathBuf::from("locales")).into();
    assert!(error.source().is_none());

    let error = anyhow::Error::from(error).context("Failed to validate locales in \"locales\"");
    assert_eq!(
        format!("{:#}", error),
        "Failed to validate locales in \"locales\": locale path is not a directory: locales"
    );

    let error: AppError = ConfigError::NotFound(PathBuf::from("locale-lint.json")).into();
    assert_eq!(
        format!("{:#}", anyhow::Error::from(error)),
        "config file does not exist: locale-lint.json"
    );
}
