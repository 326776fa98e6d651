/*!
 * Marker extraction for translation strings.
 *
 * Two marker families are recognised:
 * - Component markers (`<0>`, `</0>`, `<br/>`) used by rich-text components
 * - Interpolation markers (`{{count}}`) substituted at runtime
 *
 * Extraction only tokenizes. Matching is leftmost, non-overlapping and
 * non-greedy, so `<0>here</0>` yields `<0>` and `</0>`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for component markers; a marker never spans a line terminator
/// (`\n`, `\r`, U+2028, U+2029)
static COMPONENT_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^\n\r\x{2028}\x{2029}]*?>").expect("Invalid component marker regex")
});

/// Regex for interpolation markers
static INTERPOLATION_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{[^\n\r\x{2028}\x{2029}]*?\}\}").expect("Invalid interpolation marker regex")
});

/// Marker family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `<name>`, `</name>` or `<name/>`
    Component,
    /// `{{name}}`
    Interpolation,
}

impl MarkerKind {
    fn regex(self) -> &'static Regex {
        match self {
            MarkerKind::Component => &COMPONENT_MARKER_REGEX,
            MarkerKind::Interpolation => &INTERPOLATION_MARKER_REGEX,
        }
    }
}

/// Marker extractor for translation strings
pub struct MarkerExtractor;

impl MarkerExtractor {
    /// Extract markers of the given family in the order they appear
    pub fn extract(text: &str, kind: MarkerKind) -> Vec<String> {
        kind.regex()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract component markers (`<0>`, `</0>`, `<0/>`)
    pub fn component_markers(text: &str) -> Vec<String> {
        Self::extract(text, MarkerKind::Component)
    }

    /// Extract interpolation markers (`{{name}}`)
    pub fn interpolation_markers(text: &str) -> Vec<String> {
        Self::extract(text, MarkerKind::Interpolation)
    }
}
