//! Search orchestration module
//!
//! Coordinates provider fan-out, merging, summarization and response
//! assembly for a single query.

mod executor;
mod models;
mod pipeline;
mod response;

pub use executor::Aggregator;
pub use models::*;
pub use pipeline::Pipeline;
pub use response::*;
