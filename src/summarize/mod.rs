//! Summarization module
//!
//! Turns merged search results into a digest, and serves the standalone
//! live summary.

mod digest;
mod live;
pub mod prompts;
pub mod text;

pub use digest::Summarizer;
pub use live::LiveSummarizer;
