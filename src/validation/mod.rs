/*!
 * Validation module for locale files.
 *
 * This module checks every entry of an i18next namespace file:
 * - Namespace conventions (explicit namespace, removed keys)
 * - Missing and untranslated values
 * - Component markers (`<0>`, `</0>`, `<0/>`) matching the key and nesting correctly
 * - Interpolation markers (`{{name}}`) never invented by the translation
 * - Prohibited text in keys and translations
 *
 * # Architecture
 *
 * - `markers`: Extracts component and interpolation markers
 * - `structure`: Validates component marker nesting
 * - `comparison`: Multiset and subset comparison of markers
 * - `prohibited`: Prohibited-text patterns and match spans
 * - `diagnostics`: Diagnostic types and their rendering
 * - `entry`: Rule pipeline for a single key
 * - `service`: Whole-file validation
 */

pub mod markers;
pub mod structure;
pub mod comparison;
pub mod prohibited;
pub mod diagnostics;
pub mod entry;
pub mod service;

// Re-export main types
pub use diagnostics::{Diagnostic, TextLocation, UNPARSABLE_FILE_MESSAGE};
pub use entry::{EntryValidator, ValidationContext, REMOVED_NAMESPACE_SUFFIX};
pub use markers::{MarkerExtractor, MarkerKind};
pub use prohibited::{ProhibitedText, ProhibitedTextScanner, TextMatch};
pub use service::{test_locale_file, FileValidator, LocaleMap, TestLocaleFileOptions};
pub use structure::StructureValidator;
