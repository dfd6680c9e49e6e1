use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{AppError, NormalizeError};
use crate::file_utils::FileManager;
use crate::normalizer::{Normalizer, preview};

// @module: Application controller for transcript normalization

/// Result of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// File was rewritten in place
    Written { path: PathBuf, changed: bool },
    /// Dry run: normalized content is returned instead of written
    Previewed { path: PathBuf, content: String },
}

/// Counts for a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub unchanged: usize,
    pub previewed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Whether any file was skipped or failed
    pub fn has_errors(&self) -> bool {
        self.skipped > 0 || self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.written + self.unchanged + self.previewed + self.skipped + self.failed
    }
}

/// Main application controller for file normalization
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline built from the configuration
    normalizer: Normalizer,
    // @field: Print results instead of writing them
    dry_run: bool,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let normalizer = Normalizer::from_config(&config);
        Ok(Self {
            config,
            normalizer,
            dry_run: false,
        })
    }

    /// Switch dry-run mode on or off
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize a single file.
    ///
    /// The file is only written after the whole pipeline has run, so a
    /// failure leaves the original untouched.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome, NormalizeError> {
        FileManager::check_document(path)?;

        let content = FileManager::read_document(path)?;
        debug!("Read '{}': {}", path.display(), preview(&content, 50));

        let normalized = self.normalizer.normalize(&content);

        if self.dry_run {
            return Ok(FileOutcome::Previewed {
                path: path.to_path_buf(),
                content: normalized,
            });
        }

        let changed = normalized != content;
        if changed {
            FileManager::write_document(path, &normalized)?;
        }
        Ok(FileOutcome::Written {
            path: path.to_path_buf(),
            changed,
        })
    }

    /// Normalize every file in order. Failures are reported and the run
    /// continues with the next file.
    pub fn run(&self, files: &[PathBuf]) -> RunSummary {
        let mut summary = RunSummary::default();
        let progress_bar = self.create_progress_bar(files.len());

        for path in files {
            progress_bar.set_message(path.display().to_string());
            let result = self.process_file(path);
            // Log lines go to stderr; the bar is cleared while they print
            progress_bar.suspend(|| match result {
                Ok(FileOutcome::Written { path, changed: true }) => {
                    info!("Successfully normalized and saved '{}'", path.display());
                    summary.written += 1;
                }
                Ok(FileOutcome::Written { path, changed: false }) => {
                    info!("Already normalized, left unchanged: '{}'", path.display());
                    summary.unchanged += 1;
                }
                Ok(FileOutcome::Previewed { path, content }) => {
                    info!("Dry run, not writing '{}'", path.display());
                    println!("{}", content);
                    summary.previewed += 1;
                }
                Err(e) if e.is_skip() => {
                    warn!("Skipping: {}", e);
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("Error processing '{}': {}", path.display(), e);
                    summary.failed += 1;
                }
            });
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!(
            "Processed {} file(s): {} written, {} unchanged, {} previewed, {} skipped, {} failed",
            summary.total(),
            summary.written,
            summary.unchanged,
            summary.previewed,
            summary.skipped,
            summary.failed
        );
        summary
    }

    // @creates: Progress bar, hidden for single files and dry runs
    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if total < 2 || self.dry_run {
            return ProgressBar::hidden();
        }
        let progress_bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}
