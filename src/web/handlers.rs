//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use crate::search::{Query, SearchRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

const SEARCH_FAILED: &str = "Failed to fetch or process search results";
const LIVE_FAILED: &str = "Error fetching data";
const LIVE_UNEXPECTED: &str = "Unexpected response structure";
const EMPTY_MESSAGE: &str = "message must not be empty";

/// Error body returned to callers
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure reply; detail stays in the server logs
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Unwrap the request body. A body that is not a valid `SearchRequest`
/// gets the route's generic failure, same as any other pipeline error.
fn parse_query(
    body: Result<Json<SearchRequest>, JsonRejection>,
    failure: &'static str,
) -> Result<Query, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        error!("Rejected request body: {}", rejection.body_text());
        ApiError::internal(failure)
    })?;
    Query::new(body.message).ok_or(ApiError::bad_request(EMPTY_MESSAGE))
}

/// Aggregation and summarization handler
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let query = parse_query(body, SEARCH_FAILED)?;

    match state.pipeline.run(&query).await {
        Ok(response) => Ok(Json(response).into_response()),
        Err(e) => {
            error!("Error in search and summarize pipeline: {}", e);
            Err(ApiError::internal(SEARCH_FAILED))
        }
    }
}

/// Live summary reply
#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub message: String,
}

/// Live summary handler
pub async fn sonar(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<LiveResponse>, ApiError> {
    let query = parse_query(body, LIVE_FAILED)?;

    match state.pipeline.live_summary(&query).await {
        Ok(message) => Ok(Json(LiveResponse { message })),
        Err(e @ SearchError::UnexpectedResponse(_)) => {
            error!("Live summary had an unexpected structure: {}", e);
            Err(ApiError::internal(LIVE_UNEXPECTED))
        }
        Err(e) => {
            error!("Error fetching live summary: {}", e);
            Err(ApiError::internal(LIVE_FAILED))
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
