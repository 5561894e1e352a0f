//! Provider trait

use crate::config::Credentials;
use crate::error::ProviderError;
use crate::network::{HttpRequest, HttpResponse};
use crate::results::{SearchResult, Source};
use crate::search::Query;
use serde::de::DeserializeOwned;

/// A search provider adapter.
///
/// Adapters only describe the outbound request and map the native response;
/// the orchestrator owns the HTTP call so every provider is fetched the same
/// way.
pub trait Provider: Send + Sync {
    /// Which provider this adapter speaks for
    fn source(&self) -> Source;

    /// Build the HTTP request for a query
    fn request(&self, query: &Query, credentials: &Credentials) -> HttpRequest;

    /// Map the HTTP response into normalized results
    fn response(&self, response: HttpResponse) -> Result<Vec<SearchResult>, ProviderError>;
}

/// Reject non-2xx responses and decode the body.
pub(crate) fn decode<T: DeserializeOwned>(
    source: Source,
    response: &HttpResponse,
) -> Result<T, ProviderError> {
    if !response.is_success() {
        return Err(ProviderError::status(
            source,
            response.status,
            truncate(&response.text, 512),
        ));
    }

    response.json().map_err(|e| {
        ProviderError::status(source, response.status, format!("invalid response body: {e}"))
    })
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
