//! SearchDigest: multi-provider web search with AI-generated digests
//!
//! Queries Google and Bing concurrently, merges their results into one
//! ordered list, and summarizes that list with a generative model while
//! suggesting follow-up queries.

pub mod config;
pub mod error;
pub mod llm;
pub mod network;
pub mod providers;
pub mod results;
pub mod search;
pub mod summarize;
pub mod web;

pub use config::Settings;
pub use error::SearchError;
pub use results::SearchResult;
pub use search::{Pipeline, PipelineResponse, Query};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Items requested from each provider per query
pub const DEFAULT_PAGE_SIZE: u32 = 4;
