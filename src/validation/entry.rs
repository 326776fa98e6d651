/*!
 * Per-entry rule pipeline.
 *
 * Every key of a locale file runs through the same rules in a fixed order.
 * Rules are independent: a key can collect several diagnostics and no rule
 * suppresses another.
 */

use super::comparison::{markers_subset, same_markers, sorted};
use super::diagnostics::{Diagnostic, TextLocation};
use super::markers::MarkerExtractor;
use super::prohibited::{ProhibitedText, ProhibitedTextScanner};
use super::structure::StructureValidator;

/// Namespace suffix marking keys that were removed from source code.
///
/// Extraction tools move unused keys into a namespace with this suffix.
pub const REMOVED_NAMESPACE_SUFFIX: &str = "_old";

/// Immutable inputs shared by every entry of one locale file
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Locale of the file being validated
    pub locale: String,
    /// Source locale of the project
    pub default_locale: String,
    /// Namespace of the file being validated
    pub namespace: String,
    /// Namespace keys land in when none is given explicitly
    pub default_namespace: String,
    /// Patterns that must not appear in keys or translations
    pub prohibited_text: Vec<ProhibitedText>,
}

impl ValidationContext {
    /// Create a context without prohibited patterns
    pub fn new(locale: &str, default_locale: &str, namespace: &str, default_namespace: &str) -> Self {
        Self {
            locale: locale.to_string(),
            default_locale: default_locale.to_string(),
            namespace: namespace.to_string(),
            default_namespace: default_namespace.to_string(),
            prohibited_text: Vec::new(),
        }
    }

    /// Set the prohibited patterns
    pub fn with_prohibited_text(mut self, patterns: Vec<ProhibitedText>) -> Self {
        self.prohibited_text = patterns;
        self
    }

    /// Whether the file belongs to the source locale
    pub fn is_default_locale(&self) -> bool {
        self.locale == self.default_locale
    }
}

/// Validator running the rule pipeline over single entries
pub struct EntryValidator<'a> {
    context: &'a ValidationContext,
}

impl<'a> EntryValidator<'a> {
    /// Create a validator for the given context
    pub fn new(context: &'a ValidationContext) -> Self {
        Self { context }
    }

    /// Validate one key and its translation
    pub fn validate(&self, key: &str, translation: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        diagnostics.extend(self.check_namespace(key));

        if translation.is_empty() {
            diagnostics.push(Diagnostic::MissingTranslation {
                key: key.to_string(),
            });
        }

        if !self.context.is_default_locale() && translation == key {
            diagnostics.push(Diagnostic::EqualToSource {
                key: key.to_string(),
            });
        }

        diagnostics.extend(self.check_component_markers(key, translation));
        diagnostics.extend(self.check_interpolation_markers(key, translation));
        diagnostics.extend(self.check_prohibited_text(key, translation));

        diagnostics
    }

    /// Namespace rules depend only on the file, but are reported per key
    fn check_namespace(&self, key: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.context.namespace == self.context.default_namespace {
            diagnostics.push(Diagnostic::MissingNamespace {
                key: key.to_string(),
            });
        }

        if self.context.namespace.ends_with(REMOVED_NAMESPACE_SUFFIX) {
            diagnostics.push(Diagnostic::RemovedFromSource {
                key: key.to_string(),
            });
        }

        diagnostics
    }

    /// Component markers must match the key in name and count, in any
    /// position, and must nest correctly within the translation
    fn check_component_markers(&self, key: &str, translation: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let key_markers = MarkerExtractor::component_markers(key);
        let translation_markers = MarkerExtractor::component_markers(translation);

        if !same_markers(&key_markers, &translation_markers) {
            diagnostics.push(Diagnostic::MismatchingComponentMarkers {
                key: key.to_string(),
                expected: sorted(&key_markers),
                received: sorted(&translation_markers),
            });
        }

        if !StructureValidator::is_valid(&translation_markers) {
            diagnostics.push(Diagnostic::InvalidComponentMarkerStructure {
                key: key.to_string(),
                received: translation_markers,
            });
        }

        diagnostics
    }

    /// Interpolation markers may be dropped (e.g. `{{count}}` replaced by
    /// "one") but never introduced
    fn check_interpolation_markers(&self, key: &str, translation: &str) -> Option<Diagnostic> {
        let key_markers = MarkerExtractor::interpolation_markers(key);
        let translation_markers = MarkerExtractor::interpolation_markers(translation);

        if markers_subset(&key_markers, &translation_markers) {
            return None;
        }

        Some(Diagnostic::MismatchingInterpolationMarkers {
            key: key.to_string(),
            expected: sorted(&key_markers),
            received: sorted(&translation_markers),
        })
    }

    /// Every pattern is checked against the key first, then the translation
    fn check_prohibited_text(&self, key: &str, translation: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for pattern in &self.context.prohibited_text {
            let targets = [(TextLocation::Key, key), (TextLocation::Translation, translation)];

            for (location, text) in targets {
                let matches = ProhibitedTextScanner::scan(text, std::slice::from_ref(pattern));

                for (pattern, found) in matches {
                    diagnostics.push(Diagnostic::ProhibitedText {
                        key: key.to_string(),
                        location,
                        pattern: pattern.to_string(),
                        text: text.to_string(),
                        found,
                    });
                }
            }
        }

        diagnostics
    }
}
