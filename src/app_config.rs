use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::language_utils;
use crate::validation::ProhibitedText;

/// Application configuration module
/// This module handles loading, validating and saving the configuration
/// file that tells the linter where the locales live and which conventions
/// to enforce.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// i18next settings shared with the application
    pub i18n: I18nConfig,

    /// Root directory holding one sub-directory per locale
    pub locale_path: String,

    /// Namespace used when a key has no explicit namespace
    #[serde(rename = "defaultNS")]
    pub default_ns: String,

    /// Patterns that must not appear in keys or translations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prohibited_text: Vec<ProhibitedTextConfig>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// i18next settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Source locale of the project
    pub default_locale: String,
}

/// A prohibited-text entry, either a bare pattern or a pattern with flags
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProhibitedTextConfig {
    /// Case-sensitive pattern
    Pattern(String),
    /// Pattern with options
    #[serde(rename_all = "camelCase")]
    Detailed {
        pattern: String,
        #[serde(default)]
        ignore_case: bool,
    },
}

impl ProhibitedTextConfig {
    /// Pattern source
    pub fn pattern(&self) -> &str {
        match self {
            Self::Pattern(pattern) => pattern,
            Self::Detailed { pattern, .. } => pattern,
        }
    }

    /// Whether the pattern ignores case
    pub fn ignore_case(&self) -> bool {
        match self {
            Self::Pattern(_) => false,
            Self::Detailed { ignore_case, .. } => *ignore_case,
        }
    }

    /// Compile into a prohibited-text matcher
    pub fn compile(&self) -> Result<ProhibitedText, ConfigError> {
        ProhibitedText::new(self.pattern(), self.ignore_case()).map_err(|e| {
            ConfigError::Invalid(format!(
                "prohibitedText pattern '{}' does not compile: {}",
                self.pattern(),
                e
            ))
        })
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` level filter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locale_path() -> String {
    "public/locales".to_string()
}

fn default_namespace() -> String {
    "common".to_string()
}

impl Config {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let config = Self::from_json(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse config JSON without validating it.
    ///
    /// Malformed JSON is a load error; JSON not matching the config shape is
    /// a schema error.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Validate the configuration for required values and usable patterns
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i18n.default_locale.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "i18n.defaultLocale is a required field".to_string(),
            ));
        }

        if self.locale_path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "localePath is a required field".to_string(),
            ));
        }

        if self.default_ns.trim().is_empty() {
            return Err(ConfigError::Invalid("defaultNS is a required field".to_string()));
        }

        self.prohibited_patterns()?;

        // Custom locale codes are legitimate in i18next, so only warn
        if language_utils::get_language_name(&self.i18n.default_locale).is_err() {
            warn!(
                "Default locale '{}' is not a known ISO 639 language code",
                self.i18n.default_locale
            );
        }

        Ok(())
    }

    /// Compile all prohibited-text patterns, in config order
    pub fn prohibited_patterns(&self) -> Result<Vec<ProhibitedText>, ConfigError> {
        self.prohibited_text
            .iter()
            .map(ProhibitedTextConfig::compile)
            .collect()
    }

    /// Locale root, relative paths resolved against the config file directory
    pub fn resolve_locale_path<P: AsRef<Path>>(&self, config_path: P) -> PathBuf {
        let locale_path = Path::new(&self.locale_path);
        if locale_path.is_absolute() {
            return locale_path.to_path_buf();
        }

        match config_path.as_ref().parent() {
            Some(dir) => dir.join(locale_path),
            None => locale_path.to_path_buf(),
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path.as_ref(), config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            i18n: I18nConfig {
                default_locale: default_locale(),
            },
            locale_path: default_locale_path(),
            default_ns: default_namespace(),
            prohibited_text: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}
