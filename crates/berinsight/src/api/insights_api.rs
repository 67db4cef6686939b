use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiError, DateRangeQuery};
use crate::engine::filter_by_date;
use crate::metrics;
use crate::model::InsightRecord;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub last_updated: String,
    pub items: Vec<InsightRecord>,
}

/// Raw record listing, optionally narrowed to an inclusive date range.
pub async fn list_insights(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let loaded = store::load_document(&state.config.data_path).map_err(|e| {
        metrics::inc_request("insights", "error");
        warn!("Failed to read insight document: {:#}", e);
        ApiError::internal("Internal server error")
    })?;

    let items = filter_by_date(loaded.records, range.start.as_deref(), range.end.as_deref());
    info!("Listing {} insight(s)", items.len());
    metrics::inc_request("insights", "ok");

    Ok(Json(InsightsResponse {
        last_updated: loaded.last_updated,
        items,
    }))
}
