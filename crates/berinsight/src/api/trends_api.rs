use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::ApiError;
use crate::engine::{build_trends, filter_by_date, TrendGroup};
use crate::metrics;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub product: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub last_updated: String,
    pub trends: Vec<TrendGroup>,
}

pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let loaded = store::load_document(&state.config.data_path).map_err(|e| {
        metrics::inc_request("trends", "error");
        warn!("Failed to read insight document: {:#}", e);
        ApiError::internal("Internal server error")
    })?;

    let records = filter_by_date(loaded.records, query.start.as_deref(), query.end.as_deref());
    let trends = build_trends(&records, query.product.as_deref());
    info!(
        "Built {} trend group(s) from {} record(s)",
        trends.len(),
        records.len()
    );
    metrics::inc_request("trends", "ok");

    Ok(Json(TrendsResponse {
        last_updated: loaded.last_updated,
        trends,
    }))
}
