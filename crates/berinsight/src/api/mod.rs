//! API module - HTTP handlers over the aggregation engine

pub mod breakdown_api;
pub mod health_api;
pub mod insights_api;
pub mod sentiment_api;
pub mod trends_api;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

// Re-export API handlers
pub use breakdown_api::{get_complaints, get_suggestions};
pub use health_api::{health_check, root};
pub use insights_api::list_insights;
pub use sentiment_api::get_sentiment;
pub use trends_api::get_trends;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(json!({
                "error": self.message,
                "code": self.status.as_u16(),
            })),
        )
            .into_response()
    }
}

/// Optional inclusive date bounds accepted by every aggregation endpoint.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}
