//! Result type definitions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Search provider that produced a result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    Google,
    Bing,
}

impl Source {
    /// Display name, also used as the merge tie-break key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single normalized search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub image: Option<String>,
    pub source: Source,
    pub date: Option<DateTime<Utc>>,
}

impl SearchResult {
    pub fn new(source: Source, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: String::new(),
            image: None,
            source,
            date: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image.filter(|i| !i.is_empty());
        self
    }

    pub fn with_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.date = date;
        self
    }

    /// One line of the summarization corpus
    pub fn corpus_line(&self) -> String {
        format!("- {}: {}", self.title, self.snippet)
    }
}

/// Parse a provider timestamp.
///
/// Accepts RFC 3339 (with or without offset, any fractional precision) and
/// bare dates, which are taken as midnight UTC. Anything else is `None`.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Bing's dateLastCrawled may omit the offset
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// AI-generated summary and follow-up suggestions for one result set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Digest {
    pub summary: String,
    pub suggestions: Vec<String>,
}
