/*!
 * Protected term handling.
 *
 * Protected terms (proper nouns, brand names) are swapped for placeholder
 * tokens before any rewrite rule runs and swapped back at the very end, so
 * their spaces and punctuation survive the pipeline verbatim.
 *
 * A token is `<open>P<index><close>`, where `open` and `close` are private-use
 * code points absent from the input. No rewrite rule produces, removes or
 * merges private-use characters, so every `open` seen at restore time belongs
 * to a token.
 */

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Tag between the sentinels. An ASCII letter keeps a line holding only a
/// protected term recognizable as text to the blockquote rule.
const TOKEN_TAG: &str = "P";

/// Candidate sentinel code points: the BMP private use area, then plane 15
const SENTINEL_RANGES: [RangeInclusive<u32>; 2] = [0xE000..=0xF8FF, 0xF0000..=0xFFFFD];

/// Pass-local mapping from placeholder token to protected term
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderMap {
    open: char,
    close: char,
    terms: Vec<String>,
}

impl PlaceholderMap {
    fn new(open: char, close: char) -> Self {
        Self {
            open,
            close,
            terms: Vec::new(),
        }
    }

    /// Number of terms that were actually found and replaced
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Found terms, indexed by their token number
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Placeholder token for the term at `index`
    pub fn token(&self, index: usize) -> String {
        format!("{}{}{}{}", self.open, TOKEN_TAG, index, self.close)
    }

    /// Put every protected term back in place of its placeholder.
    pub fn restore(&self, content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find(self.open) {
            result.push_str(&rest[..start]);
            let after = &rest[start + self.open.len_utf8()..];
            match self.parse_token(after) {
                Some((term, consumed)) => {
                    result.push_str(term);
                    rest = &after[consumed..];
                }
                None => {
                    result.push(self.open);
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }

    // @returns: Term and byte length of the token body following `open`
    fn parse_token(&self, after: &str) -> Option<(&str, usize)> {
        let body = after.strip_prefix(TOKEN_TAG)?;
        let end = body.find(self.close)?;
        let digits = &body[..end];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let term = self.terms.get(digits.parse::<usize>().ok()?)?;
        Some((term.as_str(), TOKEN_TAG.len() + end + self.close.len_utf8()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Text(&'a str),
    Term(usize),
}

/// Replace every occurrence of every term with a placeholder.
///
/// Terms are handled in list order and each is fully substituted before the
/// next, so an earlier term wins over a later one that overlaps it. Later
/// terms are only searched in text that is not already protected.
pub fn protect_terms<S: AsRef<str>>(content: &str, terms: &[S]) -> (String, PlaceholderMap) {
    let (open, close) = pick_sentinels(content);
    let mut map = PlaceholderMap::new(open, close);
    let mut segments = vec![Segment::Text(content)];

    for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        let slot = map.terms.len();
        let mut found = false;
        let mut next = Vec::with_capacity(segments.len());

        for segment in segments {
            match segment {
                Segment::Text(text) if text.contains(term) => {
                    found = true;
                    let mut last = 0;
                    for (start, _) in text.match_indices(term) {
                        if start > last {
                            next.push(Segment::Text(&text[last..start]));
                        }
                        next.push(Segment::Term(slot));
                        last = start + term.len();
                    }
                    if last < text.len() {
                        next.push(Segment::Text(&text[last..]));
                    }
                }
                other => next.push(other),
            }
        }

        segments = next;
        if found {
            map.terms.push(term.to_string());
        }
    }

    let mut result = String::with_capacity(content.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => result.push_str(text),
            Segment::Term(index) => result.push_str(&map.token(index)),
        }
    }

    (result, map)
}

// @returns: Two private-use characters that do not occur in the content
fn pick_sentinels(content: &str) -> (char, char) {
    let used: HashSet<char> = content
        .chars()
        .filter(|c| SENTINEL_RANGES.iter().any(|r| r.contains(&u32::from(*c))))
        .collect();
    let mut free = SENTINEL_RANGES
        .iter()
        .flat_map(|r| r.clone())
        .filter_map(char::from_u32)
        .filter(|c| !used.contains(c));

    let open = free.next().unwrap_or('\u{E000}');
    let close = free.next().unwrap_or('\u{E001}');
    (open, close)
}
