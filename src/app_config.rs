use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles loading, validating and saving the normalizer settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Files to normalize, in processing order
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Terms that must come out of the pipeline unchanged
    #[serde(default = "default_protected_terms")]
    pub protected_terms: Vec<String>,

    /// Speaker blockquote settings
    #[serde(default)]
    pub blockquote: BlockquoteConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Speaker blockquote configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlockquoteConfig {
    /// Phrase that opens a quoted section. Also matched with its spaces removed.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Line emitted at the top of each quoted section
    #[serde(default = "default_heading")]
    pub heading: String,
}

impl Default for BlockquoteConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            heading: default_heading(),
        }
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
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_protected_terms() -> Vec<String> {
    [
        "D.U.N.K.Showcase",
        "Novel Core",
        "BE:FIRST",
        "BMSG FES",
        "THE GAME CENTER",
        "THE LAST PIECE",
        "THE FIRST",
        "BMSG POSSE",
        "Name Tag",
        "Aile The Shota",
        "edhiii boi",
        "No No Girls",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_marker() -> String {
    "from SKY-HI".to_string()
}

fn default_heading() -> String {
    "> ### from SKY-HI".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration, writing a default file first if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.blockquote.marker.trim().is_empty() {
            return Err(anyhow!("Blockquote marker must not be empty"));
        }

        // Lines are trimmed and joined before matching; only U+0020 spaces
        // are handled, by matching the marker with them removed
        if self.blockquote.marker.chars().any(|c| c.is_whitespace() && c != ' ') {
            return Err(anyhow!(
                "Blockquote marker may only contain plain spaces as whitespace: {:?}",
                self.blockquote.marker
            ));
        }

        if let Some(term) = self
            .protected_terms
            .iter()
            .find(|t| !t.is_empty() && self.blockquote.marker.contains(t.as_str()))
        {
            return Err(anyhow!(
                "Blockquote marker contains protected term '{}' and would never match",
                term
            ));
        }

        if !self.blockquote.heading.starts_with('>') {
            return Err(anyhow!(
                "Blockquote heading must start with '>': {}",
                self.blockquote.heading
            ));
        }

        let mut seen = HashSet::new();
        for term in &self.protected_terms {
            if term.is_empty() {
                return Err(anyhow!("Protected terms must not be empty"));
            }
            if !seen.insert(term.as_str()) {
                return Err(anyhow!("Duplicate protected term: {}", term));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            files: Vec::new(),
            protected_terms: default_protected_terms(),
            blockquote: BlockquoteConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
