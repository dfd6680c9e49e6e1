/*!
 * Speaker blockquote conversion.
 *
 * A line carrying the speaker marker (e.g. `from SKY-HI`) opens a Markdown
 * blockquote under a fixed heading. Following lines are quoted until one of
 * them looks like a section break.
 */

use crate::normalizer::rules::{LINE_END_PUNCTUATION, strip_spaces, widen_punctuation};

/// Line classification state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Normal,
    Quoting,
}

/// Marker phrase and the heading it is rewritten to
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRule {
    /// Marker variants as they appear after the earlier rules: spaces
    /// removed first, then the spaced phrase (when different). Both have
    /// their punctuation widened.
    markers: Vec<String>,
    heading: String,
}

impl QuoteRule {
    // @creates: Rule matching the marker with or without its spaces
    pub fn new(marker: &str, heading: &str) -> Self {
        let widened = widen_punctuation(marker);
        let mut markers = vec![strip_spaces(&widened)];
        if widened.contains(' ') {
            markers.push(widened);
        }
        Self {
            markers,
            heading: heading.to_string(),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Check whether a line carries the marker
    pub fn matches(&self, line: &str) -> bool {
        self.markers.iter().any(|m| !m.is_empty() && line.contains(m.as_str()))
    }

    // @returns: Line text with every marker variant removed, trimmed
    fn strip_markers(&self, line: &str) -> String {
        let mut rest = line.to_string();
        for marker in self.markers.iter().filter(|m| !m.is_empty()) {
            rest = rest.replace(marker.as_str(), "");
        }
        rest.trim().to_string()
    }

    /// Advance the state machine by one (already trimmed) line.
    ///
    /// Returns the next state and the lines to emit for this input line.
    pub fn transition(&self, state: QuoteState, line: &str) -> (QuoteState, Vec<String>) {
        if self.matches(line) {
            let mut emitted = vec![String::new(), self.heading.clone()];
            let rest = self.strip_markers(line);
            if !rest.is_empty() {
                emitted.push(format!("> {}", rest));
            }
            return (QuoteState::Quoting, emitted);
        }

        match state {
            QuoteState::Quoting if ends_quote(line) => {
                (QuoteState::Normal, vec![String::new(), line.to_string()])
            }
            QuoteState::Quoting => (QuoteState::Quoting, vec![format!("> {}", line)]),
            QuoteState::Normal => (QuoteState::Normal, vec![line.to_string()]),
        }
    }

    /// Convert marked sections of a CRLF document into blockquotes.
    pub fn apply(&self, content: &str) -> String {
        let mut state = QuoteState::default();
        let mut output = Vec::new();

        for line in content.split("\r\n") {
            let (next, emitted) = self.transition(state, line.trim());
            state = next;
            output.extend(emitted);
        }

        output.join("\r\n")
    }
}

/// A quoted section ends at an empty line, a dash run, or a line with no
/// character from a recognized script.
pub fn ends_quote(line: &str) -> bool {
    line.is_empty() || line.starts_with('—') || !line.chars().any(is_recognized_char)
}

// @checks: ASCII alphanumerics, kana, and line-ending punctuation
fn is_recognized_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{3041}'..='\u{309F}').contains(&c)
        || ('\u{30A0}'..='\u{30FF}').contains(&c)
        || LINE_END_PUNCTUATION.contains(&c)
}
