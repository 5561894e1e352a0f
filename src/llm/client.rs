use async_trait::async_trait;
use tracing::{debug, warn};

use super::types::*;
use crate::error::SearchError;
use crate::network::{HttpClient, HttpRequest};

/// Anything that can answer a chat completions request.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, SearchError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint
#[derive(Clone)]
pub struct ChatClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(http: HttpClient, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl ChatModel for ChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, SearchError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, "chat completion request");

        let body = serde_json::to_value(request)
            .map_err(|e| SearchError::Generative(format!("encoding request: {e}")))?;
        let outbound = HttpRequest::post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body);

        let response = self
            .http
            .execute(outbound)
            .await
            .map_err(|e| SearchError::Generative(e.to_string()))?;

        if !response.is_success() {
            warn!(
                status = response.status,
                body = %response.text,
                "chat completion rejected"
            );
            let detail = format!("API error ({})", response.status);
            // a JSON error body decodes, but carries no choices
            return Err(match response.json::<serde_json::Value>() {
                Ok(_) => SearchError::UnexpectedResponse(detail),
                Err(_) => SearchError::Generative(detail),
            });
        }

        response
            .json()
            .map_err(|e| SearchError::Generative(format!("decoding response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_request_format_and_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "hi"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(
            HttpClient::new().unwrap(),
            &format!("{}/v1/", server.uri()),
            "test-key",
        );
        let response = client
            .complete(&ChatRequest::new("gpt-4o-mini", "be brief", "hello"))
            .await
            .unwrap();

        assert_eq!(response.content(), Some("hi"));
    }

    #[test]
    fn test_unset_options_are_omitted() {
        let body = serde_json::to_value(ChatRequest::new("m", "s", "u")).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("search_recency_filter").is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_generative_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = ChatClient::new(HttpClient::new().unwrap(), &server.uri(), "k");
        let err = client
            .complete(&ChatRequest::new("m", "s", "u"))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::Generative(msg) if msg.contains("429")));
    }

    #[tokio::test]
    async fn test_json_error_body_is_unexpected_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": {"message": "bad model"}})),
            )
            .mount(&server)
            .await;

        let client = ChatClient::new(HttpClient::new().unwrap(), &server.uri(), "k");
        let err = client
            .complete(&ChatRequest::new("m", "s", "u"))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::UnexpectedResponse(msg) if msg.contains("400")));
    }

    #[tokio::test]
    async fn test_response_without_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = ChatClient::new(HttpClient::new().unwrap(), &server.uri(), "k");
        let response = client.complete(&ChatRequest::new("m", "s", "u")).await.unwrap();
        assert_eq!(response.content(), None);
    }
}
