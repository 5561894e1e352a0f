//! Search provider module
//!
//! Each provider adapter turns one API's native response into the common
//! [`SearchResult`](crate::results::SearchResult) shape.

mod traits;

pub mod bing;
pub mod google;

pub use bing::Bing;
pub use google::Google;
pub use traits::Provider;
