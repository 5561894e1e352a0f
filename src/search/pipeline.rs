//! End-to-end pipeline: aggregate, summarize, assemble

use super::executor::Aggregator;
use super::models::Query;
use super::response::PipelineResponse;
use crate::config::{Credentials, LiveCredentials, Settings};
use crate::error::SearchError;
use crate::llm::ChatClient;
use crate::network::HttpClient;
use crate::summarize::{LiveSummarizer, Summarizer};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Runs one query through aggregation and summarization.
///
/// Holds only read-only state; concurrent runs share nothing mutable.
pub struct Pipeline {
    settings: Arc<Settings>,
    client: HttpClient,
    aggregator: Aggregator,
}

impl Pipeline {
    pub fn new(settings: Arc<Settings>, client: HttpClient) -> Self {
        let aggregator = Aggregator::new(client.clone(), &settings.providers);
        Self {
            settings,
            client,
            aggregator,
        }
    }

    /// Execute one pipeline run
    pub async fn run(&self, query: &Query) -> Result<PipelineResponse, SearchError> {
        let span = info_span!("pipeline", run_id = %Uuid::new_v4());
        self.run_inner(query).instrument(span).await
    }

    async fn run_inner(&self, query: &Query) -> Result<PipelineResponse, SearchError> {
        let credentials = Credentials::resolve(&self.settings)?;

        let results = self.aggregator.aggregate(query, &credentials).await?;
        if results.is_empty() {
            info!("No results for query, skipping summarization");
            return Ok(PipelineResponse::assemble(results, None));
        }

        let model = ChatClient::new(
            self.client.clone(),
            &self.settings.ai.base_url,
            &credentials.ai_api_key,
        );
        let digest = Summarizer::new(model, &self.settings.ai.model)
            .digest(query, &results)
            .await?;

        info!(
            results = results.len(),
            suggestions = digest.suggestions.len(),
            "Pipeline run complete"
        );
        Ok(PipelineResponse::assemble(results, Some(digest)))
    }

    /// Produce a single-call live summary for `query`
    pub async fn live_summary(&self, query: &Query) -> Result<String, SearchError> {
        let credentials = LiveCredentials::resolve(&self.settings)?;
        let model = ChatClient::new(
            self.client.clone(),
            &self.settings.live.base_url,
            &credentials.api_key,
        );
        LiveSummarizer::new(model, &self.settings.live.model)
            .summarize(query)
            .instrument(info_span!("live_summary", run_id = %Uuid::new_v4()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_configuration_fails_before_network() {
        // endpoints point nowhere; a network attempt would surface as a
        // provider error instead of a configuration error
        let mut settings = Settings::default();
        settings.providers.google.base_url = "http://127.0.0.1:9/g".to_string();
        settings.providers.bing.base_url = "http://127.0.0.1:9/b".to_string();
        settings.providers.google.api_key = Some("g".to_string());
        settings.providers.google.engine_id = Some("cx".to_string());
        settings.ai.api_key = Some("o".to_string());

        let pipeline = Pipeline::new(Arc::new(settings), HttpClient::new().unwrap());
        let err = pipeline.run(&Query::new("rust").unwrap()).await.unwrap_err();
        assert!(matches!(err, SearchError::Configuration(name) if name == "BING_API_KEY"));
    }

    #[tokio::test]
    async fn test_live_summary_requires_key() {
        let pipeline = Pipeline::new(Arc::new(Settings::default()), HttpClient::new().unwrap());
        let err = pipeline
            .live_summary(&Query::new("rust").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Configuration(_)));
    }
}
