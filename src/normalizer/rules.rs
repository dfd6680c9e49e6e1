/*!
 * Text rewrite rules.
 *
 * Each rule takes the whole document and returns the rewritten document.
 * The pipeline in `normalizer::mod` applies them in a fixed order.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that close a sentence or a bracket. A line ending in one of
/// these is never joined with the line after it.
pub const LINE_END_PUNCTUATION: &[char] = &[
    '。', '，', '、', '；', '：', '！', '？', '…', '—', '"', '（', '）', '【', '】', '《', '》',
    '〈', '〉', '「', '」', '『', '』', '＂', '＇', '．',
];

/// Replacement for a single leading `-`
pub const EM_DASH_RUN: &str = "————";

/// Half-width to full-width punctuation table
const WIDENING_TABLE: &[(char, char)] = &[('?', '？'), ('!', '！'), (':', '：'), ('.', '。')];

static MULTI_NEWLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}").expect("valid newline regex")
});

/// Check whether a line ends in line-ending punctuation
pub fn ends_with_punctuation(line: &str) -> bool {
    line.chars().last().is_some_and(|c| LINE_END_PUNCTUATION.contains(&c))
}

/// Join lines broken by page layout.
///
/// Lines are trimmed. Empty lines are kept as boundaries. A non-empty line
/// absorbs the following non-empty lines until the last absorbed line ends in
/// punctuation, an empty line is reached, or the input runs out.
pub fn join_broken_lines(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
    let mut joined: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let mut current = lines[i];
        if current.is_empty() {
            joined.push(String::new());
            i += 1;
            continue;
        }

        let mut merged = current.to_string();
        while let Some(&next) = lines.get(i + 1) {
            if next.is_empty() || ends_with_punctuation(current) {
                break;
            }
            merged.push_str(next);
            current = next;
            i += 1;
        }

        joined.push(merged);
        i += 1;
    }

    joined.join("\n")
}

/// Collapse every run of two or more `\n` into a single one
pub fn collapse_blank_lines(content: &str) -> String {
    MULTI_NEWLINE_REGEX.replace_all(content, "\n").into_owned()
}

/// Delete every U+0020 space. Other whitespace is left alone.
pub fn strip_spaces(content: &str) -> String {
    content.replace(' ', "")
}

/// Replace `? ! : .` with their full-width forms
pub fn widen_punctuation(content: &str) -> String {
    content
        .chars()
        .map(|c| {
            WIDENING_TABLE
                .iter()
                .find(|(half, _)| *half == c)
                .map_or(c, |(_, full)| *full)
        })
        .collect()
}

/// Turn a single leading `-` on each line into an em-dash run.
///
/// Input lines are split on `\n`; the result is joined with `\r\n`.
pub fn rewrite_leading_dashes(content: &str) -> String {
    content
        .split('\n')
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => format!("{}{}", EM_DASH_RUN, rest),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}
