//! Result types and merging for search results
//!
//! This module defines the canonical result record every provider adapter
//! produces, and the ordering used to merge provider outputs.

mod merge;
mod types;

pub use merge::{compare, merge};
pub use types::*;
