use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: String,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "berinsight API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/healthz",
            "metrics": "/metrics",
            "insights": "/insights",
            "complaints": "/insights/complaints",
            "suggestions": "/insights/suggestions",
            "sentiment": "/insights/sentiment",
            "trends": "/insights/trends",
        }
    }))
}
