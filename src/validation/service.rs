/*!
 * Validation service for whole locale files.
 *
 * Parses the file content into a locale map and runs the entry rules over
 * every key in the order the keys appear in the file.
 */

use log::debug;
use serde_json::Value;

use super::diagnostics::Diagnostic;
use super::entry::{EntryValidator, ValidationContext};
use super::prohibited::ProhibitedText;

/// Flat key to translation mapping of one namespace file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMap {
    entries: Vec<(String, String)>,
}

impl LocaleMap {
    /// Parse file content as a flat JSON object of strings.
    ///
    /// Returns `None` for malformed JSON, non-object roots and objects
    /// holding anything but string values. A repeated key keeps the position
    /// of its first occurrence and the value of its last.
    pub fn parse(content: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(content).ok()?;
        let object = value.as_object()?;

        let entries = object
            .iter()
            .map(|(key, value)| value.as_str().map(|text| (key.clone(), text.to_string())))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { entries })
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validator for the content of one locale namespace file
pub struct FileValidator {
    context: ValidationContext,
}

impl FileValidator {
    /// Create a validator for files described by `context`
    pub fn new(context: ValidationContext) -> Self {
        Self { context }
    }

    /// Context the validator runs with
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validate file content and return all diagnostics, empty when valid
    pub fn validate(&self, content: &str) -> Vec<Diagnostic> {
        let Some(locale_map) = LocaleMap::parse(content) else {
            debug!(
                "Locale file {}/{} is not a flat string object",
                self.context.locale, self.context.namespace
            );
            return vec![Diagnostic::UnparsableFile];
        };

        let entry_validator = EntryValidator::new(&self.context);
        let diagnostics: Vec<Diagnostic> = locale_map
            .iter()
            .flat_map(|(key, translation)| entry_validator.validate(key, translation))
            .collect();

        debug!(
            "Locale file {}/{}: {} keys, {} diagnostics",
            self.context.locale,
            self.context.namespace,
            locale_map.len(),
            diagnostics.len()
        );

        diagnostics
    }

    /// Validate raw file content; content that is not UTF-8 is unparsable
    pub fn validate_bytes(&self, content: &[u8]) -> Vec<Diagnostic> {
        match std::str::from_utf8(content) {
            Ok(text) => self.validate(text),
            Err(e) => {
                debug!(
                    "Locale file {}/{} is not valid UTF-8: {}",
                    self.context.locale, self.context.namespace, e
                );
                vec![Diagnostic::UnparsableFile]
            }
        }
    }
}

/// Inputs of [`test_locale_file`]
#[derive(Debug, Clone, Default)]
pub struct TestLocaleFileOptions {
    pub file_content: String,
    pub locale: String,
    pub default_locale: String,
    pub namespace: String,
    pub default_namespace: String,
    pub prohibited_text: Vec<ProhibitedText>,
}

/// Validate one locale file and return the rendered diagnostics
pub fn test_locale_file(options: &TestLocaleFileOptions) -> Vec<String> {
    let context = ValidationContext::new(
        &options.locale,
        &options.default_locale,
        &options.namespace,
        &options.default_namespace,
    )
    .with_prohibited_text(options.prohibited_text.clone());

    FileValidator::new(context)
        .validate(&options.file_content)
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect()
}
