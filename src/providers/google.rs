//! Google Custom Search JSON API adapter

use super::traits::*;
use crate::config::{Credentials, GoogleSettings};
use crate::error::ProviderError;
use crate::network::{HttpRequest, HttpResponse};
use crate::results::{parse_date, SearchResult, Source};
use crate::search::Query;
use serde::Deserialize;
use std::collections::HashMap;

/// Fields requested from the API, to avoid over-fetching
const FIELDS: &str = "items(title,link,snippet,pagemap(cse_image),pagemap(metatags))";

/// Metatag carrying the article publication time
const PUBLISHED_TIME: &str = "article:published_time";

/// Native response shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleResponse {
    #[serde(default)]
    pub items: Vec<GoogleItem>,
}

/// One native result item; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub pagemap: Option<PageMap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMap {
    #[serde(default)]
    pub cse_image: Vec<CseImage>,
    #[serde(default)]
    pub metatags: Vec<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CseImage {
    pub src: Option<String>,
}

/// Map one native item into a [`SearchResult`]
pub fn map_item(item: &GoogleItem) -> SearchResult {
    let pagemap = item.pagemap.as_ref();

    let image = pagemap
        .and_then(|p| p.cse_image.first())
        .and_then(|img| img.src.clone());

    let date = pagemap
        .and_then(|p| p.metatags.first())
        .and_then(|tags| tags.get(PUBLISHED_TIME))
        .and_then(|v| v.as_str())
        .and_then(parse_date);

    SearchResult::new(
        Source::Google,
        item.title.clone().unwrap_or_default(),
        item.link.clone().unwrap_or_default(),
    )
    .with_snippet(item.snippet.clone().unwrap_or_default())
    .with_image(image)
    .with_date(date)
}

/// Google web search provider
pub struct Google {
    base_url: String,
    page_size: u32,
}

impl Google {
    pub fn new(settings: &GoogleSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            page_size: settings.page_size,
        }
    }
}

impl Default for Google {
    fn default() -> Self {
        Self::new(&GoogleSettings::default())
    }
}

impl Provider for Google {
    fn source(&self) -> Source {
        Source::Google
    }

    fn request(&self, query: &Query, credentials: &Credentials) -> HttpRequest {
        HttpRequest::get(&self.base_url)
            .param("key", &credentials.google_api_key)
            .param("cx", &credentials.google_engine_id)
            .param("q", query.as_str())
            .param("fields", FIELDS)
            .param("num", self.page_size.to_string())
    }

    fn response(&self, response: HttpResponse) -> Result<Vec<SearchResult>, ProviderError> {
        let native: GoogleResponse = decode(self.source(), &response)?;
        Ok(native.items.iter().map(map_item).collect())
    }
}
