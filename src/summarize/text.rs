//! Text post-processing for model output and display

use crate::results::SearchResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Suggestions shown by the client
pub const DISPLAY_SUGGESTIONS: usize = 5;

static ENUMERATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Render results as the summarization corpus, one `- title: snippet` per line
pub fn render_corpus(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(SearchResult::corpus_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove a leading `12. ` style list marker
pub fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Split model output into one suggestion per non-blank line
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumeration)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove every double quote
pub fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

/// Suggestions as the client lists them: at most five, unquoted
pub fn display_suggestions(suggestions: &[String]) -> Vec<String> {
    suggestions
        .iter()
        .take(DISPLAY_SUGGESTIONS)
        .map(|s| strip_quotes(s))
        .collect()
}
