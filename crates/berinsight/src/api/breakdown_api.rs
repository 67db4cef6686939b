use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiError, DateRangeQuery};
use crate::engine::{breakdown_by_type, filter_by_date, TypeBreakdown};
use crate::metrics;
use crate::model::{KIND_COMPLAINT, KIND_SUGGESTION};
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub last_updated: String,
    #[serde(flatten)]
    pub breakdown: TypeBreakdown,
}

pub async fn get_complaints(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    breakdown(state, range, KIND_COMPLAINT, "complaints").await
}

pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    breakdown(state, range, KIND_SUGGESTION, "suggestions").await
}

async fn breakdown(
    state: AppState,
    range: DateRangeQuery,
    kind: &str,
    route: &str,
) -> Result<Json<BreakdownResponse>, ApiError> {
    let loaded = store::load_document(&state.config.data_path).map_err(|e| {
        metrics::inc_request(route, "error");
        warn!("Failed to read insight document: {:#}", e);
        ApiError::internal("Internal server error")
    })?;

    let records = filter_by_date(loaded.records, range.start.as_deref(), range.end.as_deref());
    let breakdown = breakdown_by_type(&records, kind);
    info!(
        "{} breakdown: {} of {} record(s) selected",
        kind,
        breakdown.total,
        records.len()
    );
    metrics::inc_request(route, "ok");

    Ok(Json(BreakdownResponse {
        last_updated: loaded.last_updated,
        breakdown,
    }))
}
