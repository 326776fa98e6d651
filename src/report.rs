/*!
 * Terminal reporting of validation results.
 *
 * Prints one `[pass]`/`[fail]` line per locale file followed by its
 * diagnostics. The first line of every diagnostic is prefixed with `- `,
 * continuation lines are indented to match.
 */

use std::io::{self, Write};

use crate::app_controller::{FileReport, RunSummary};
use crate::validation::Diagnostic;

const CYAN: &str = "\x1B[36m";
const GREEN: &str = "\x1B[32m";
const RED: &str = "\x1B[31m";
const HIGHLIGHT: &str = "\x1B[1;4;31m";
const RESET: &str = "\x1B[0m";

/// Indentation of diagnostics below a `[fail]` line
const DIAGNOSTIC_PADDING: &str = "         ";

/// Reporter writing validation results to a terminal or any writer
pub struct Reporter<W: Write> {
    out: W,
    silent: bool,
    color: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter with colors and pass lines enabled
    pub fn new(out: W) -> Self {
        Self {
            out,
            silent: false,
            color: true,
        }
    }

    /// Hide files that passed
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Enable or disable ANSI colors
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Print the banner
    pub fn header(&mut self) -> io::Result<()> {
        let title = self.paint(CYAN, "  locale-lint");
        let rule = self.paint(CYAN, "  -----------");
        writeln!(self.out)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)
    }

    /// Print the result of one file
    pub fn file(&mut self, report: &FileReport) -> io::Result<()> {
        let path = report.file.path.display().to_string();

        if report.passed() {
            if !self.silent {
                let tag = self.paint(GREEN, "  [pass] ");
                writeln!(self.out, "{}{}", tag, path)?;
            }
            return Ok(());
        }

        let tag = self.paint(RED, "  [fail] ");
        writeln!(self.out, "{}{}", tag, path)?;

        for diagnostic in &report.diagnostics {
            for (i, line) in self.render(diagnostic).iter().enumerate() {
                let prefix = if i == 0 { "- " } else { "  " };
                writeln!(self.out, "{}{}{}", DIAGNOSTIC_PADDING, prefix, line)?;
            }
        }

        Ok(())
    }

    /// Print the totals
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;

        let line = format!(
            "  {} files checked, {} failed",
            summary.files_checked, summary.files_failed
        );
        let line = if summary.passed() {
            self.paint(GREEN, &line)
        } else {
            self.paint(RED, &line)
        };

        writeln!(self.out, "{}", line)?;
        writeln!(self.out)
    }

    /// Lines of one diagnostic, colored when enabled
    pub fn render(&self, diagnostic: &Diagnostic) -> Vec<String> {
        if !self.color {
            return diagnostic.to_string().lines().map(str::to_string).collect();
        }

        // Keys may span lines; paint each line so escapes never cross a break
        let head = match diagnostic.key() {
            Some(key) => {
                let quoted = format!("\"{}\"", key);
                let painted: Vec<String> = quoted
                    .lines()
                    .map(|line| self.paint(CYAN, line))
                    .collect();
                format!("{} {}", painted.join("\n"), diagnostic.summary())
            }
            None => diagnostic.summary(),
        };

        let mut lines: Vec<String> = head.lines().map(str::to_string).collect();

        for (label, value) in diagnostic.details() {
            let style = if label.starts_with("Expected") { GREEN } else { RED };
            lines.push(format!("{}{}", self.paint(style, label), value));
        }

        // The highlighted span replaces the plain caret line
        if let Diagnostic::ProhibitedText { text, found, .. } = diagnostic {
            let (line, column, width) = found.line_context(text);
            let (before, matched, after) = split_chars(line, column, width);
            lines.push(format!(
                "{}{}{}{}",
                self.paint(RED, "Matched: "),
                before,
                self.paint(HIGHLIGHT, matched),
                after
            ));
        }

        lines
    }
}

/// Split `line` into the text before, inside and after a character span
fn split_chars(line: &str, column: usize, width: usize) -> (&str, &str, &str) {
    let byte_at = |chars: usize| {
        line.char_indices()
            .nth(chars)
            .map_or(line.len(), |(index, _)| index)
    };

    let start = byte_at(column);
    let end = byte_at(column + width);

    (&line[..start], &line[start..end], &line[end..])
}
