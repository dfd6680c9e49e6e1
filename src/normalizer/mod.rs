/*!
 * Markdown transcript normalizer.
 *
 * Runs the rewrite pipeline over one in-memory document:
 * - `protect`: hide protected terms behind placeholders
 * - `rules`: line joining, blank-line collapse, space stripping,
 *   punctuation widening, leading-dash rewrite
 * - `blockquote`: speaker section conversion
 *
 * Protected terms are restored as the last step.
 */

pub mod blockquote;
pub mod protect;
pub mod rules;

use log::debug;

use crate::app_config::Config;

pub use blockquote::{QuoteRule, QuoteState};
pub use protect::{PlaceholderMap, protect_terms};

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Protect,
    JoinLines,
    CollapseBlankLines,
    StripSpaces,
    WidenPunctuation,
    RewriteDashes,
    Blockquote,
    Restore,
}

impl Stage {
    /// All stages in the order they run
    pub const ALL: [Stage; 8] = [
        Stage::Protect,
        Stage::JoinLines,
        Stage::CollapseBlankLines,
        Stage::StripSpaces,
        Stage::WidenPunctuation,
        Stage::RewriteDashes,
        Stage::Blockquote,
        Stage::Restore,
    ];

    // @returns: Human readable stage description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Protect => "protected terms replaced by placeholders",
            Self::JoinLines => "joined lines broken without punctuation",
            Self::CollapseBlankLines => "collapsed consecutive line breaks",
            Self::StripSpaces => "removed all spaces",
            Self::WidenPunctuation => "converted half-width punctuation to full-width",
            Self::RewriteDashes => "rewrote leading dashes",
            Self::Blockquote => "converted speaker sections to blockquotes",
            Self::Restore => "restored protected terms",
        }
    }
}

/// Document normalizer configured with protected terms and a quote rule
#[derive(Debug, Clone)]
pub struct Normalizer {
    protected_terms: Vec<String>,
    quote_rule: QuoteRule,
}

impl Normalizer {
    pub fn new(protected_terms: Vec<String>, quote_rule: QuoteRule) -> Self {
        Self {
            protected_terms,
            quote_rule,
        }
    }

    /// Build a normalizer from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.protected_terms.clone(),
            QuoteRule::new(&config.blockquote.marker, &config.blockquote.heading),
        )
    }

    pub fn protected_terms(&self) -> &[String] {
        &self.protected_terms
    }

    /// Normalize a whole document.
    pub fn normalize(&self, content: &str) -> String {
        let (mut text, placeholders) = protect_terms(content, &self.protected_terms);
        trace_stage(Stage::Protect, &text);

        for stage in &Stage::ALL[1..Stage::ALL.len() - 1] {
            text = self.apply_stage(*stage, &text);
            trace_stage(*stage, &text);
        }

        let restored = placeholders.restore(&text);
        trace_stage(Stage::Restore, &restored);
        restored
    }

    /// Apply a single rewrite stage. `Protect` and `Restore` need the
    /// placeholder map and are handled by `normalize`; here they are no-ops.
    pub fn apply_stage(&self, stage: Stage, content: &str) -> String {
        match stage {
            Stage::JoinLines => rules::join_broken_lines(content),
            Stage::CollapseBlankLines => rules::collapse_blank_lines(content),
            Stage::StripSpaces => rules::strip_spaces(content),
            Stage::WidenPunctuation => rules::widen_punctuation(content),
            Stage::RewriteDashes => rules::rewrite_leading_dashes(content),
            Stage::Blockquote => self.quote_rule.apply(content),
            Stage::Protect | Stage::Restore => content.to_string(),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn trace_stage(stage: Stage, content: &str) {
    debug!("Applied {:?}: {}. {}", stage, stage.description(), preview(content, 50));
}

/// First `max_chars` characters of the content, for log lines
pub fn preview(content: &str, max_chars: usize) -> String {
    let mut head: String = content.chars().take(max_chars).collect();
    if content.chars().nth(max_chars).is_some() {
        head.push('…');
    }
    head.replace('\r', "").replace('\n', "⏎")
}
