//! Search query data models

use serde::Deserialize;
use std::fmt;

/// Non-empty user query text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Wrap `text`, rejecting blank input
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body of both POST endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub message: String,
}
