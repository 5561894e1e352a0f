//! Bing Web Search API adapter

use super::traits::*;
use crate::config::{BingSettings, Credentials};
use crate::error::ProviderError;
use crate::network::{HttpRequest, HttpResponse};
use crate::results::{parse_date, SearchResult, Source};
use crate::search::Query;
use serde::Deserialize;

const SELECT: &str = "name,url,snippet,image,webPages";

const SUBSCRIPTION_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Native response shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingResponse {
    pub web_pages: Option<WebPages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebPages {
    #[serde(default)]
    pub value: Vec<BingItem>,
}

/// One native web page item; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingItem {
    pub name: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub image: Option<BingImage>,
    pub date_last_crawled: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BingImage {
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub content_url: Option<String>,
}

/// Map one native item into a [`SearchResult`]
pub fn map_item(item: &BingItem) -> SearchResult {
    let image = item
        .image
        .as_ref()
        .and_then(|i| i.thumbnail.as_ref())
        .and_then(|t| t.content_url.clone());

    SearchResult::new(
        Source::Bing,
        item.name.clone().unwrap_or_default(),
        item.url.clone().unwrap_or_default(),
    )
    .with_snippet(item.snippet.clone().unwrap_or_default())
    .with_image(image)
    .with_date(item.date_last_crawled.as_deref().and_then(parse_date))
}

/// Bing web search provider
pub struct Bing {
    base_url: String,
    page_size: u32,
}

impl Bing {
    pub fn new(settings: &BingSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            page_size: settings.page_size,
        }
    }
}

impl Default for Bing {
    fn default() -> Self {
        Self::new(&BingSettings::default())
    }
}

impl Provider for Bing {
    fn source(&self) -> Source {
        Source::Bing
    }

    fn request(&self, query: &Query, credentials: &Credentials) -> HttpRequest {
        HttpRequest::get(&self.base_url)
            .param("q", query.as_str())
            .param("$select", SELECT)
            .param("count", self.page_size.to_string())
            .header(SUBSCRIPTION_HEADER, &credentials.bing_subscription_key)
    }

    fn response(&self, response: HttpResponse) -> Result<Vec<SearchResult>, ProviderError> {
        let native: BingResponse = decode(self.source(), &response)?;
        Ok(native
            .web_pages
            .map(|pages| pages.value.iter().map(map_item).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials {
            google_api_key: "g-key".to_string(),
            google_engine_id: "cx-id".to_string(),
            bing_subscription_key: "b-key".to_string(),
            ai_api_key: "o-key".to_string(),
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            text: body.to_string(),
        }
    }

    #[test]
    fn test_bing_request() {
        let bing = Bing::default();
        let query = Query::new("rust programming").unwrap();
        let request = bing.request(&query, &credentials());

        assert!(request.url.contains("bing.microsoft.com"));
        assert_eq!(request.param_value("q"), Some("rust programming"));
        assert_eq!(request.param_value("count"), Some("4"));
        assert_eq!(request.param_value("$select"), Some(SELECT));
        assert_eq!(
            request.headers.get(SUBSCRIPTION_HEADER).map(String::as_str),
            Some("b-key")
        );
    }

    #[test]
    fn test_item_mapping() {
        let body = json!({
            "webPages": {
                "value": [
                    {
                        "name": "Tokio 2.0",
                        "url": "https://tokio.rs/",
                        "snippet": "Async runtime",
                        "image": {"thumbnail": {"contentUrl": "https://img.example/t.png"}},
                        "dateLastCrawled": "2024-06-01T08:00:00.0000000Z"
                    },
                    {"url": "https://bare.example"}
                ]
            }
        });
        let results = Bing::default()
            .response(response(200, &body.to_string()))
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Tokio 2.0");
        assert_eq!(results[0].image.as_deref(), Some("https://img.example/t.png"));
        assert_eq!(
            results[0].date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(results[0].source, Source::Bing);

        assert_eq!(results[1].title, "");
        assert_eq!(results[1].snippet, "");
        assert!(results[1].image.is_none());
        assert!(results[1].date.is_none());
    }

    #[test]
    fn test_mapping_is_pure() {
        let item: BingItem =
            serde_json::from_value(json!({"name": "n", "url": "u", "dateLastCrawled": "bad"}))
                .unwrap();
        assert_eq!(map_item(&item), map_item(&item));
    }

    #[test]
    fn test_missing_web_pages() {
        let results = Bing::default().response(response(200, "{}")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_service_unavailable() {
        let err = Bing::default()
            .response(response(503, "busy"))
            .unwrap_err();
        assert_eq!(err.status, Some(503));
        assert_eq!(err.provider, Source::Bing);
    }
}
