// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use locale_lint::app_config::{self, Config};
use locale_lint::report::Reporter;
use locale_lint::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate all locale files (default command)
    Check,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for locale-lint
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// locale-lint - Lint i18next locale files
///
/// Checks every key of every namespace file below the configured locale
/// path for missing translations, marker mistakes and prohibited text.
#[derive(Parser, Debug)]
#[command(name = "locale-lint")]
#[command(version)]
#[command(about = "Lints i18next locale files")]
#[command(long_about = "locale-lint checks every key of every namespace file in an i18next locale tree.

EXAMPLES:
    locale-lint                                  # Check using locale-lint.json
    locale-lint -c config/i18n.json              # Use a different config file
    locale-lint --silent                         # Only print failing files
    locale-lint init                             # Write a default config file
    locale-lint completions bash > locale-lint.bash

CONFIGURATION:
    {
      \"i18n\": { \"defaultLocale\": \"en\" },
      \"localePath\": \"public/locales\",
      \"defaultNS\": \"common\",
      \"prohibitedText\": [{ \"pattern\": \"\\\\blog.?in\\\\b\", \"ignoreCase\": true }]
    }

    localePath is resolved relative to the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file
    #[arg(short, long, default_value = "locale-lint.json", global = true)]
    config: PathBuf,

    /// Only print files that fail
    #[arg(short, long, global = true)]
    silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "error"),
            Level::Warn => ("\x1B[1;33m", "warn "),
            Level::Info => ("\x1B[1;32m", "info "),
            Level::Debug => ("\x1B[1;36m", "debug"),
            Level::Trace => ("\x1B[1;35m", "trace"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Warnings only until the config tells us otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Warn) {
        eprintln!("error: failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the command; `Ok(false)` means validation failed
fn run(cli: CommandLineOptions) -> Result<bool> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "locale-lint", &mut std::io::stdout());
            Ok(true)
        }
        Some(Commands::Init { force }) => {
            init_config(&cli.config, force)?;
            Ok(true)
        }
        Some(Commands::Check) | None => {
            let color = !cli.no_color
                && std::env::var_os("NO_COLOR").is_none()
                && std::io::stdout().is_terminal();
            run_check(&cli.config, cli.silent, color, cli.log_level.is_some())
        }
    }
}

fn run_check(config_path: &Path, silent: bool, color: bool, log_level_from_cli: bool) -> Result<bool> {
    let config = Config::load(config_path)?;

    // If log level was not set via command line, take it from config now
    if !log_level_from_cli {
        log::set_max_level(config.log_level.to_level_filter());
    }

    debug!("Loaded config from {:?}", config_path);

    let controller = Controller::with_config(config, config_path)?;
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock()).silent(silent).color(color);

    let summary = controller
        .run(&mut reporter)
        .with_context(|| format!("Failed to validate locales in {:?}", controller.locale_root()))?;

    Ok(summary.passed())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save(config_path)?;
    info!("Wrote default config to {}", config_path.display());

    Ok(())
}
