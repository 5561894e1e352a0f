//! Digest generation: summary and follow-up suggestions

use super::prompts;
use super::text::{parse_suggestions, render_corpus};
use crate::error::SearchError;
use crate::llm::{ChatModel, ChatRequest};
use crate::results::{Digest, SearchResult};
use crate::search::Query;
use futures::future::join;
use tracing::{debug, warn};

/// Produces a [`Digest`] from merged results with two concurrent model calls
pub struct Summarizer<M> {
    model: M,
    model_name: String,
}

impl<M: ChatModel> Summarizer<M> {
    pub fn new(model: M, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Summarize `results` and suggest follow-up queries for `query`.
    ///
    /// Both calls are started together and awaited together; if either
    /// fails the whole digest fails.
    pub async fn digest(
        &self,
        query: &Query,
        results: &[SearchResult],
    ) -> Result<Digest, SearchError> {
        let summary_request =
            ChatRequest::new(&self.model_name, prompts::SUMMARY, render_corpus(results));
        let suggestions_request = ChatRequest::new(
            &self.model_name,
            prompts::SUGGESTIONS,
            prompts::suggestions_input(query),
        );

        let (summary, suggestions) = join(
            self.model.complete(&summary_request),
            self.model.complete(&suggestions_request),
        )
        .await;

        if let Err(ref e) = summary {
            warn!("Summary generation failed: {}", e);
        }
        if let Err(ref e) = suggestions {
            warn!("Suggestion generation failed: {}", e);
        }

        let summary = summary?;
        let suggestions = suggestions?;

        let digest = Digest {
            summary: summary.content().unwrap_or_default().trim().to_string(),
            suggestions: parse_suggestions(suggestions.content().unwrap_or_default()),
        };

        debug!(
            summary_len = digest.summary.len(),
            suggestions = digest.suggestions.len(),
            "digest generated"
        );

        Ok(digest)
    }
}
