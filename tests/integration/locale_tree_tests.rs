/*!
 * Integration tests for validating a whole locale tree
 */

use anyhow::Result;
use locale_lint::report::Reporter;
use locale_lint::{AppError, Config, Controller};
use std::path::Path;

use crate::common;

/// Builds a small project with one clean and one broken German file
fn create_project(root: &Path) -> Result<std::path::PathBuf> {
    let locales = root.join("locales");
    common::create_locale_file(&locales, "en", "sign-in", r#"{"Sign in": "Sign in"}"#)?;
    common::create_locale_file(&locales, "de", "sign-in", r#"{"Sign in": "Anmelden"}"#)?;
    common::create_locale_file(
        &locales,
        "de",
        "inbox",
        r#"{"You have <0>{{count}}</0> messages": "Du hast <0>{{count}} Nachrichten", "Archive": "Archive"}"#,
    )?;

    common::create_config(root, "locales", "[]")
}

fn run(controller: &Controller, silent: bool) -> Result<(String, locale_lint::RunSummary)> {
    common::init_test_logging();
    let mut reporter = Reporter::new(Vec::new()).color(false).silent(silent);
    let summary = controller.run(&mut reporter)?;
    Ok((String::from_utf8(reporter.into_inner())?, summary))
}

/// Test a full run over a locale tree with failures
#[test]
fn test_controllerRun_withBrokenFile_shouldReportFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = create_project(temp_dir.path())?;

    let config = Config::load(&config_path)?;
    let controller = Controller::with_config(config, &config_path)?;
    let (output, summary) = run(&controller, false)?;

    assert_eq!(summary.files_checked, 3);
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.diagnostics, 2);
    assert!(!summary.passed());

    assert!(output.starts_with("\n  locale-lint\n  -----------\n\n"));
    assert!(output.contains("  [fail] "));
    assert!(output.contains("inbox.json\n"));
    assert!(output.contains(
        "         - \"You have <0>{{count}}</0> messages\" has mismatching component markers in the translation\n"
    ));
    assert!(output.contains("           Expected: [\"</0>\",\"<0>\"]\n           Received: [\"<0>\"]\n"));
    assert!(output.contains("         - \"Archive\" has a translation equal to the source language\n"));
    assert!(output.ends_with("\n  3 files checked, 1 failed\n\n"));

    // Files are reported in locale then namespace order
    let inbox = output.find("inbox.json").unwrap();
    let de_sign_in = output.find(&format!("de{}sign-in.json", std::path::MAIN_SEPARATOR)).unwrap();
    let en_sign_in = output.find(&format!("en{}sign-in.json", std::path::MAIN_SEPARATOR)).unwrap();
    assert!(inbox < de_sign_in && de_sign_in < en_sign_in);

    Ok(())
}

/// Test that silent mode prints only failing files
#[test]
fn test_controllerRun_inSilentMode_shouldHidePassingFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = create_project(temp_dir.path())?;

    let controller = Controller::with_config(Config::load(&config_path)?, &config_path)?;
    let (output, _) = run(&controller, true)?;

    assert!(!output.contains("[pass]"));
    assert_eq!(output.matches("[fail]").count(), 1);

    Ok(())
}

/// Test that configured prohibited text fails otherwise clean files
#[test]
fn test_controllerRun_withProhibitedText_shouldShowMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let locales = temp_dir.path().join("locales");
    common::create_locale_file(&locales, "en", "sign-in", r#"{"Please Log in": "Please Log in"}"#)?;
    let config_path = common::create_config(
        temp_dir.path(),
        "locales",
        r#"[{ "pattern": "log.?in", "ignoreCase": true }]"#,
    )?;

    let controller = Controller::with_config(Config::load(&config_path)?, &config_path)?;
    let (output, summary) = run(&controller, false)?;

    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.diagnostics, 2);
    assert!(output.contains("         - \"Please Log in\" has prohibited text in the key\n"));
    assert!(output.contains("         - \"Please Log in\" has prohibited text in the translation\n"));
    assert!(output.contains("           Prohibited: /log.?in/i\n"));
    assert!(output.contains("           Matched: Please Log in\n"));
    assert!(output.contains("\n                           ^^^^^^\n"));

    Ok(())
}

/// Test that a badly encoded file fails on its own and the run continues
#[test]
fn test_controllerRun_withInvalidUtf8File_shouldReportItAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let locales = temp_dir.path().join("locales");
    common::create_locale_file(&locales, "de", "b", r#"{"B": ""}"#)?;
    std::fs::write(locales.join("de").join("a.json"), b"{\"A\": \"\xff\xfe\"}")?;
    let config_path = common::create_config(temp_dir.path(), "locales", "[]")?;

    let controller = Controller::with_config(Config::load(&config_path)?, &config_path)?;
    let (output, summary) = run(&controller, false)?;

    assert_eq!(summary.files_checked, 2);
    assert_eq!(summary.files_failed, 2);
    assert_eq!(summary.diagnostics, 2);
    assert!(output.contains("         - File content could not be parsed as locale JSON\n"));
    assert!(output.contains("         - \"B\" does not have a translation\n"));
    assert!(output.ends_with("\n  2 files checked, 2 failed\n\n"));

    Ok(())
}

/// Test that a clean tree passes
#[test]
fn test_controllerRun_withCleanTree_shouldPass() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let locales = temp_dir.path().join("locales");
    common::create_locale_file(&locales, "en", "inbox", r#"{"Inbox": "Inbox"}"#)?;
    common::create_locale_file(&locales, "fr", "inbox", r#"{"Inbox": "Boîte de réception"}"#)?;
    let config_path = common::create_config(temp_dir.path(), "locales", "[]")?;

    let controller = Controller::with_config(Config::load(&config_path)?, &config_path)?;
    let reports = controller.check_all()?;

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|report| report.passed()));

    Ok(())
}

/// Test that a missing locale root is an error, not a pass
#[test]
fn test_controllerRun_withMissingLocaleRoot_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_config(temp_dir.path(), "does-not-exist", "[]")?;

    let controller = Controller::with_config(Config::load(&config_path)?, &config_path)?;
    let mut reporter = Reporter::new(Vec::new()).color(false);

    let result = controller.run(&mut reporter);

    assert!(matches!(result, Err(AppError::Loader(_))));
    assert!(reporter.into_inner().is_empty());

    Ok(())
}
