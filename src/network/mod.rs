//! HTTP networking module
//!
//! Provides the HTTP client used for search providers and generative AI calls.

mod client;
mod types;

pub use client::HttpClient;
pub use types::{HttpMethod, HttpRequest, HttpResponse};
