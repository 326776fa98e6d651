/*!
 * # locale-lint - Lint i18next locale files
 *
 * A Rust library and CLI that validates translation files of i18next
 * projects. Every key of every namespace file is checked against its
 * translation.
 *
 * ## Features
 *
 * - Flags keys outside an explicit namespace and keys removed from source code
 * - Flags missing translations and translations equal to the source text
 * - Component markers (`<0>`, `</0>`, `<0/>`) must match the key and nest correctly
 * - Interpolation markers (`{{name}}`) may be dropped but never invented
 * - Configurable prohibited text, reported with the matched span
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `validation`: The validation engine:
 *   - `validation::markers`: Marker extraction
 *   - `validation::structure`: Component marker nesting
 *   - `validation::comparison`: Marker multiset and subset comparison
 *   - `validation::prohibited`: Prohibited text scanning
 *   - `validation::entry`: Rule pipeline for a single key
 *   - `validation::service`: Whole-file validation
 * - `app_config`: Configuration management
 * - `file_utils`: Locale tree discovery
 * - `app_controller`: Runs validation over a locale tree
 * - `report`: Terminal output
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## Example
 *
 * ```
 * use locale_lint::{test_locale_file, TestLocaleFileOptions};
 *
 * let errors = test_locale_file(&TestLocaleFileOptions {
 *     file_content: r#"{"Sign in": "Sign in"}"#.to_string(),
 *     locale: "de".to_string(),
 *     default_locale: "en".to_string(),
 *     namespace: "sign-in".to_string(),
 *     default_namespace: "common".to_string(),
 *     prohibited_text: vec![],
 * });
 *
 * assert_eq!(errors, vec!["\"Sign in\" has a translation equal to the source language"]);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod report;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileReport, RunSummary};
pub use errors::{AppError, ConfigError, LoaderError};
pub use validation::{
    test_locale_file, Diagnostic, FileValidator, ProhibitedText, TestLocaleFileOptions,
    ValidationContext,
};
