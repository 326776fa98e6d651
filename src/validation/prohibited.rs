/*!
 * Prohibited text scanning.
 *
 * Projects use prohibited patterns to keep the voice of their translations
 * consistent, e.g. always "sign in" and never "login". The scanner reports
 * the first match of every pattern together with its byte span; rendering
 * the highlight is left to the reporter.
 */

use regex::{Regex, RegexBuilder};
use std::fmt;

/// A compiled prohibited-text pattern
#[derive(Debug, Clone)]
pub struct ProhibitedText {
    source: String,
    ignore_case: bool,
    regex: Regex,
}

impl ProhibitedText {
    /// Compile a pattern
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;

        Ok(Self {
            source: pattern.to_string(),
            ignore_case,
            regex,
        })
    }

    /// Pattern source as written in the config
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern ignores case
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// First match of this pattern in `text`, if any
    pub fn find(&self, text: &str) -> Option<TextMatch> {
        self.regex.find(text).map(|m| TextMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
    }
}

/// Renders as a regex literal, `/pattern/` or `/pattern/i`
impl fmt::Display for ProhibitedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}",
            self.source,
            if self.ignore_case { "i" } else { "" }
        )
    }
}

/// Location of a prohibited-text match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Matched text
    pub text: String,
}

impl TextMatch {
    /// The line of `haystack` holding the match, with the match position
    /// inside that line counted in characters: `(line, column, width)`.
    ///
    /// A match running past the end of the line is cut at the line end.
    /// The width is at least one so an empty match stays visible.
    pub fn line_context<'a>(&self, haystack: &'a str) -> (&'a str, usize, usize) {
        let start = self.start.min(haystack.len());
        let end = self.end.clamp(start, haystack.len());

        let line_start = haystack[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = haystack[start..]
            .find('\n')
            .map_or(haystack.len(), |i| start + i);

        let line = &haystack[line_start..line_end];
        let column = haystack[line_start..start].chars().count();
        let width = haystack[start..end.min(line_end)].chars().count().max(1);

        (line, column, width)
    }
}

/// Scanner running a list of prohibited patterns over a string
pub struct ProhibitedTextScanner;

impl ProhibitedTextScanner {
    /// Test `text` against every pattern in order.
    ///
    /// Returns one entry per matching pattern, holding its first match only.
    pub fn scan<'p>(text: &str, patterns: &'p [ProhibitedText]) -> Vec<(&'p ProhibitedText, TextMatch)> {
        patterns
            .iter()
            .filter_map(|pattern| pattern.find(text).map(|found| (pattern, found)))
            .collect()
    }
}
