use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiError, DateRangeQuery};
use crate::engine::{filter_by_date, sentiment_summary, SentimentSummary};
use crate::metrics;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub last_updated: String,
    #[serde(flatten)]
    pub summary: SentimentSummary,
}

pub async fn get_sentiment(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let loaded = store::load_document(&state.config.data_path).map_err(|e| {
        metrics::inc_request("sentiment", "error");
        warn!("Failed to read insight document: {:#}", e);
        ApiError::internal("Internal server error")
    })?;

    let records = filter_by_date(loaded.records, range.start.as_deref(), range.end.as_deref());
    let summary = sentiment_summary(&records);
    info!(
        "Sentiment summary over {} record(s): avg {}",
        summary.total, summary.average_score
    );
    metrics::inc_request("sentiment", "ok");

    Ok(Json(SentimentResponse {
        last_updated: loaded.last_updated,
        summary,
    }))
}
