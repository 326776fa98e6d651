/*!
 * Diagnostics produced by locale file validation.
 *
 * A diagnostic renders as a multi-line message: the first line names the key
 * and the rule, following lines hold `Expected:`/`Received:` or
 * `Prohibited:`/`Matched:` details.
 */

use std::fmt;

use super::prohibited::TextMatch;

/// Message returned for file content that is not a flat locale object
pub const UNPARSABLE_FILE_MESSAGE: &str = "File content could not be parsed as locale JSON";

/// Which string of an entry a prohibited-text match was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLocation {
    Key,
    Translation,
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextLocation::Key => write!(f, "key"),
            TextLocation::Translation => write!(f, "translation"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file is not a flat string-to-string JSON object
    UnparsableFile,
    /// The key lives in the default namespace
    MissingNamespace { key: String },
    /// The key lives in a namespace of keys removed from source code
    RemovedFromSource { key: String },
    /// The translation is empty
    MissingTranslation { key: String },
    /// The translation is identical to the key outside the default locale
    EqualToSource { key: String },
    /// Component markers differ between key and translation
    MismatchingComponentMarkers {
        key: String,
        expected: Vec<String>,
        received: Vec<String>,
    },
    /// Component markers of the translation do not nest
    InvalidComponentMarkerStructure { key: String, received: Vec<String> },
    /// The translation introduces interpolation markers unknown to the key
    MismatchingInterpolationMarkers {
        key: String,
        expected: Vec<String>,
        received: Vec<String>,
    },
    /// A prohibited pattern matched the key or the translation
    ProhibitedText {
        key: String,
        location: TextLocation,
        pattern: String,
        text: String,
        found: TextMatch,
    },
}

impl Diagnostic {
    /// Key the diagnostic is about, `None` for file level diagnostics
    pub fn key(&self) -> Option<&str> {
        match self {
            Diagnostic::UnparsableFile => None,
            Diagnostic::MissingNamespace { key }
            | Diagnostic::RemovedFromSource { key }
            | Diagnostic::MissingTranslation { key }
            | Diagnostic::EqualToSource { key }
            | Diagnostic::MismatchingComponentMarkers { key, .. }
            | Diagnostic::InvalidComponentMarkerStructure { key, .. }
            | Diagnostic::MismatchingInterpolationMarkers { key, .. }
            | Diagnostic::ProhibitedText { key, .. } => Some(key),
        }
    }

    /// Text following the quoted key on the first line
    pub fn summary(&self) -> String {
        match self {
            Diagnostic::UnparsableFile => UNPARSABLE_FILE_MESSAGE.to_string(),
            Diagnostic::MissingNamespace { .. } => "is missing an explicit namespace".to_string(),
            Diagnostic::RemovedFromSource { .. } => {
                "is tagged as removed from source code".to_string()
            }
            Diagnostic::MissingTranslation { .. } => "does not have a translation".to_string(),
            Diagnostic::EqualToSource { .. } => {
                "has a translation equal to the source language".to_string()
            }
            Diagnostic::MismatchingComponentMarkers { .. } => {
                "has mismatching component markers in the translation".to_string()
            }
            Diagnostic::InvalidComponentMarkerStructure { .. } => {
                "has invalid component marker structure in the translation".to_string()
            }
            Diagnostic::MismatchingInterpolationMarkers { .. } => {
                "has mismatching interpolation markers in the translation".to_string()
            }
            Diagnostic::ProhibitedText { location, .. } => {
                format!("has prohibited text in the {}", location)
            }
        }
    }

    /// Labelled detail lines following the first line, as `(label, value)`
    pub fn details(&self) -> Vec<(&'static str, String)> {
        match self {
            Diagnostic::MismatchingComponentMarkers {
                expected, received, ..
            }
            | Diagnostic::MismatchingInterpolationMarkers {
                expected, received, ..
            } => vec![
                ("Expected: ", marker_list(expected)),
                ("Received: ", marker_list(received)),
            ],
            Diagnostic::InvalidComponentMarkerStructure { received, .. } => {
                vec![("Received: ", marker_list(received))]
            }
            Diagnostic::ProhibitedText { pattern, .. } => {
                vec![("Prohibited: ", pattern.clone())]
            }
            _ => vec![],
        }
    }
}

/// Render markers as a compact JSON array, e.g. `["</1>","<1>"]`
pub fn marker_list(markers: &[String]) -> String {
    serde_json::to_string(markers).unwrap_or_else(|_| format!("{:?}", markers))
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "\"{}\" {}", key, self.summary())?,
            None => write!(f, "{}", self.summary())?,
        }

        for (label, value) in self.details() {
            write!(f, "\n{}{}", label, value)?;
        }

        if let Diagnostic::ProhibitedText { text, found, .. } = self {
            let label = "Matched: ";
            let (line, column, width) = found.line_context(text);
            write!(f, "\n{}{}", label, line)?;
            write!(
                f,
                "\n{}{}",
                " ".repeat(label.len() + column),
                "^".repeat(width)
            )?;
        }

        Ok(())
    }
}
