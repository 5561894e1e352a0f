//! Generative AI client
//!
//! A minimal chat completions client shared by the digest and live summary
//! paths. Both OpenAI and Perplexity speak the same wire format.

mod client;
mod types;

pub use client::{ChatClient, ChatModel};
pub use types::*;
