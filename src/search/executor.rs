//! Provider fan-out and result aggregation

use super::models::Query;
use crate::config::{Credentials, ProvidersSettings};
use crate::error::{ProviderError, SearchError};
use crate::network::HttpClient;
use crate::providers::{Bing, Google, Provider};
use crate::results::{merge, SearchResult};
use futures::future::join;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Fetches from every provider concurrently and merges the outputs
pub struct Aggregator {
    /// HTTP client for making requests
    client: HttpClient,
    google: Google,
    bing: Bing,
}

impl Aggregator {
    pub fn new(client: HttpClient, settings: &ProvidersSettings) -> Self {
        Self {
            client,
            google: Google::new(&settings.google),
            bing: Bing::new(&settings.bing),
        }
    }

    /// Query both providers and merge their results.
    ///
    /// Both calls are awaited even when one fails early. Any failure fails
    /// the aggregation; no partial result set is returned.
    pub async fn aggregate(
        &self,
        query: &Query,
        credentials: &Credentials,
    ) -> Result<Vec<SearchResult>, SearchError> {
        info!("Fetching search results from Google and Bing");

        let (google, bing) = join(
            self.fetch(&self.google, query, credentials),
            self.fetch(&self.bing, query, credentials),
        )
        .await;

        if google.is_err() || bing.is_err() {
            warn!(
                google_status = ?status_of(&google),
                bing_status = ?status_of(&bing),
                "Failed to fetch search results"
            );
        }

        let google = google?;
        let bing = bing?;

        Ok(merge([google, bing]))
    }

    /// Run a single provider call
    async fn fetch(
        &self,
        provider: &dyn Provider,
        query: &Query,
        credentials: &Credentials,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let source = provider.source();
        let start = Instant::now();

        let request = provider.request(query, credentials);
        let response = self.client.execute(request).await.map_err(|e| {
            let detail = redact(e);
            warn!("Request failed for {}: {}", source, detail);
            ProviderError::transport(source, detail)
        })?;

        let results = provider.response(response).map_err(|e| {
            warn!("{}", e);
            e
        })?;

        debug!(
            "Provider {} returned {} results in {:?}",
            source,
            results.len(),
            start.elapsed()
        );

        Ok(results)
    }
}

/// Describe a transport failure without the request URL, whose query
/// string carries the Google API key
fn redact(error: anyhow::Error) -> String {
    match error.downcast::<reqwest::Error>() {
        Ok(e) => e.without_url().to_string(),
        Err(e) => e.to_string(),
    }
}

/// Status reported for a provider outcome: `Ok(..)` on success, the HTTP
/// status (or `None` for transport errors) on failure
fn status_of(outcome: &Result<Vec<SearchResult>, ProviderError>) -> Result<usize, Option<u16>> {
    match outcome {
        Ok(results) => Ok(results.len()),
        Err(e) => Err(e.status),
    }
}
