//! Error types for the search pipeline.
//!
//! Messages carry upstream detail for server-side logs only; the web layer
//! never forwards them to callers.

use crate::results::Source;

/// A search provider call that was rejected, failed in transit, or returned
/// a body that could not be decoded.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{provider} search failed{}: {detail}", status_suffix(.status))]
pub struct ProviderError {
    pub provider: Source,
    /// HTTP status when the provider answered; `None` for transport errors
    pub status: Option<u16>,
    pub detail: String,
}

impl ProviderError {
    pub fn status(provider: Source, status: u16, detail: impl Into<String>) -> Self {
        Self {
            provider,
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn transport(provider: Source, detail: impl Into<String>) -> Self {
        Self {
            provider,
            status: None,
            detail: detail.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with HTTP {s}")).unwrap_or_default()
}

/// Errors that fail a whole pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A required credential is not configured.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// A search provider call failed; no partial result set is produced.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A generative AI call failed.
    #[error("generation failed: {0}")]
    Generative(String),

    /// A generative AI call succeeded but carried no usable content.
    #[error("unexpected response structure: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
