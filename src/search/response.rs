//! Response assembly

use crate::results::{Digest, SearchResult};
use serde::{Deserialize, Serialize};

/// Returned when both providers produce nothing
pub const NO_RESULTS_MESSAGE: &str =
    "Hmm, we couldn't find anything with that. Try a different search.";

/// Returned when the summary model produced no text
pub const NO_SUMMARY_MESSAGE: &str = "No summary generated.";

/// Wire response of the aggregation pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResponse {
    pub message: String,
    pub search_results: Vec<SearchResult>,
    pub suggestions: Vec<String>,
}

impl PipelineResponse {
    /// Package merged results with their digest, or the no-results reply
    /// when summarization was skipped.
    pub fn assemble(results: Vec<SearchResult>, digest: Option<Digest>) -> Self {
        match digest {
            None => Self {
                message: NO_RESULTS_MESSAGE.to_string(),
                search_results: results,
                suggestions: Vec::new(),
            },
            Some(digest) => {
                let message = if digest.summary.trim().is_empty() {
                    NO_SUMMARY_MESSAGE.to_string()
                } else {
                    digest.summary
                };
                Self {
                    message,
                    search_results: results,
                    suggestions: digest.suggestions,
                }
            }
        }
    }

    /// Results the image carousel shows
    pub fn carousel(&self) -> Vec<&SearchResult> {
        self.search_results
            .iter()
            .filter(|r| r.image.is_some())
            .collect()
    }
}
