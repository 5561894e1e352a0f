//! Live summary from a model that runs its own web search

use super::prompts;
use crate::error::SearchError;
use crate::llm::{ChatModel, ChatRequest};
use crate::search::Query;
use tracing::debug;

/// Single-call summarizer backed by a search-augmented model
pub struct LiveSummarizer<M> {
    model: M,
    model_name: String,
}

impl<M: ChatModel> LiveSummarizer<M> {
    pub fn new(model: M, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    pub fn request(&self, query: &Query) -> ChatRequest {
        ChatRequest {
            temperature: Some(0.1),
            top_k: Some(0),
            top_p: Some(0.7),
            frequency_penalty: Some(1.0),
            presence_penalty: Some(0.0),
            search_recency_filter: Some("month".to_string()),
            max_tokens: Some(300),
            ..ChatRequest::new(&self.model_name, prompts::LIVE, prompts::live_input(query))
        }
    }

    /// Summarize recent coverage of `query`
    pub async fn summarize(&self, query: &Query) -> Result<String, SearchError> {
        let response = self.model.complete(&self.request(query)).await?;
        let content = response
            .content()
            .ok_or_else(|| SearchError::UnexpectedResponse("no choices".to_string()))?;

        debug!(len = content.len(), "live summary generated");
        Ok(content.to_string())
    }
}
