// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mdnorm::app_config::{self, Config};
use mdnorm::app_controller::Controller;
use mdnorm::file_utils::FileManager;

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
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for mdnorm
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mdnorm - Markdown transcript normalizer
///
/// Cleans up OCR'd Japanese Markdown transcripts in place: joins broken lines,
/// strips spaces, widens punctuation, rewrites dashes and formats speaker
/// sections as blockquotes, leaving protected terms untouched.
#[derive(Parser, Debug)]
#[command(name = "mdnorm")]
#[command(version)]
#[command(about = "Normalize OCR'd Japanese Markdown transcripts")]
#[command(long_about = "mdnorm rewrites Markdown transcripts in place with a fixed rule pipeline.

EXAMPLES:
    mdnorm                                   # Normalize the files listed in mdnorm.json
    mdnorm interview.md                      # Normalize a single file
    mdnorm -n interview.md                   # Print the result without writing
    mdnorm -p \"Novel Core\" docs/             # Protect an extra term, process a directory
    mdnorm init                              # Write a default mdnorm.json
    mdnorm completions bash > mdnorm.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in mdnorm.json by default. If the file doesn't
    exist, a default one is created automatically. Paths given on the command
    line replace the configured file list.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Markdown files or directories to normalize
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "mdnorm.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print normalized content instead of overwriting files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Extra term to protect (repeatable)
    #[arg(short, long = "protect", value_name = "TERM")]
    protect: Vec<String>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
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
            let (emoji, colour) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger accepts everything; the max level does the filtering
    if CustomLogger::init(LevelFilter::Trace).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<ExitCode> {
    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "mdnorm", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Init { force }) => {
            init_config(&cli.config_path, *force)?;
            Ok(ExitCode::SUCCESS)
        }
        None => run_normalize(&cli),
    }
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(anyhow!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        ));
    }
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        FileManager::ensure_dir(parent)?;
    }
    Config::default().save(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn run_normalize(cli: &CommandLineOptions) -> Result<ExitCode> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    // Override config with CLI options if provided
    if !cli.paths.is_empty() {
        config.files = cli.paths.clone();
    }
    for term in &cli.protect {
        if !config.protected_terms.contains(term) {
            config.protected_terms.push(term.clone());
        }
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let files = FileManager::expand_inputs(&config.files)
        .context("Failed to collect input files")?;
    if files.is_empty() {
        return Err(anyhow!(
            "No files to process. Pass paths on the command line or list them in {}",
            cli.config_path.display()
        ));
    }
    debug!("Processing {} file(s)", files.len());

    let controller = Controller::with_config(config)?.with_dry_run(cli.dry_run);
    let summary = controller.run(&files);

    Ok(if summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
