use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, LocaleFile};
use crate::language_utils;
use crate::report::Reporter;
use crate::validation::{Diagnostic, FileValidator, ProhibitedText, ValidationContext};

// @module: Application controller for locale tree validation

/// Validation outcome of one locale file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File that was validated
    pub file: LocaleFile,
    /// Diagnostics in key order, empty when the file passed
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Whether the file passed every rule
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Totals of a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of files validated
    pub files_checked: usize,
    /// Number of files with at least one diagnostic
    pub files_failed: usize,
    /// Number of diagnostics over all files
    pub diagnostics: usize,
}

impl RunSummary {
    /// Whether every file passed
    pub fn passed(&self) -> bool {
        self.files_failed == 0
    }

    fn record(&mut self, report: &FileReport) {
        self.files_checked += 1;
        self.diagnostics += report.diagnostics.len();
        if !report.passed() {
            self.files_failed += 1;
        }
    }
}

/// Main application controller for locale validation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Resolved locale root
    locale_root: PathBuf,
    // @field: Compiled prohibited patterns
    prohibited_text: Vec<ProhibitedText>,
}

impl Controller {
    // @method: Create a controller for a config loaded from `config_path`
    pub fn with_config<P: AsRef<Path>>(config: Config, config_path: P) -> Result<Self, AppError> {
        let prohibited_text = config.prohibited_patterns()?;
        let locale_root = config.resolve_locale_path(config_path);

        Ok(Self {
            config,
            locale_root,
            prohibited_text,
        })
    }

    /// Locale root the controller validates
    pub fn locale_root(&self) -> &Path {
        &self.locale_root
    }

    /// Validation context for one locale file
    pub fn context_for(&self, file: &LocaleFile) -> ValidationContext {
        ValidationContext::new(
            &file.locale,
            &self.config.i18n.default_locale,
            &file.namespace,
            &self.config.default_ns,
        )
        .with_prohibited_text(self.prohibited_text.clone())
    }

    /// Validate a single locale file
    pub fn check_file(&self, file: &LocaleFile) -> Result<FileReport, AppError> {
        let content = FileManager::read_bytes(&file.path)?;
        let validator = FileValidator::new(self.context_for(file));
        let diagnostics = validator.validate_bytes(&content);

        debug!(
            "Checked {:?} ({}): {} diagnostics",
            file.path,
            language_utils::locale_label(&file.locale),
            diagnostics.len()
        );

        Ok(FileReport {
            file: file.clone(),
            diagnostics,
        })
    }

    /// Validate every locale file, collecting the reports in file order
    pub fn check_all(&self) -> Result<Vec<FileReport>, AppError> {
        self.discover()?
            .iter()
            .map(|file| self.check_file(file))
            .collect()
    }

    /// Validate every locale file and print each result as it completes
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<RunSummary, AppError> {
        let files = self.discover()?;
        let mut summary = RunSummary::default();

        reporter.header()?;

        for file in &files {
            let report = self.check_file(file)?;
            summary.record(&report);
            reporter.file(&report)?;
        }

        reporter.summary(&summary)?;

        info!(
            "Checked {} locale files under {:?}, {} diagnostics",
            summary.files_checked, self.locale_root, summary.diagnostics
        );

        Ok(summary)
    }

    fn discover(&self) -> Result<Vec<LocaleFile>, AppError> {
        let files = FileManager::find_locale_files(&self.locale_root)?;

        if files.is_empty() {
            warn!("No locale files found in {:?}", self.locale_root);
        }

        let default_locale = &self.config.i18n.default_locale;
        if !files.is_empty() && !files.iter().any(|f| &f.locale == default_locale) {
            warn!(
                "No directory for the default locale '{}' in {:?}",
                default_locale, self.locale_root
            );
        }

        Ok(files)
    }
}
