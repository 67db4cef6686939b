// berinsight/crates/berinsight/src/metrics.rs

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Registry, TextEncoder};
use lazy_static::lazy_static;
use std::sync::OnceLock;
use axum::response::IntoResponse;
use axum::http::StatusCode;

lazy_static! {
    static ref REGISTRY: Registry = Registry::new();
}
static REQ_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();
static RECORDS_LOADED: OnceLock<IntGauge> = OnceLock::new();
static RECORDS_DROPPED: OnceLock<IntCounter> = OnceLock::new();

pub fn init_metrics() {
    let req_counter = REQ_COUNTER.get_or_init(|| {
        IntCounterVec::new(
            prometheus::opts!("requests_total", "Total requests per route"),
            &["route", "status"],
        )
        .unwrap()
    });

    let records_loaded = RECORDS_LOADED.get_or_init(|| {
        IntGauge::new("records_loaded", "Records admitted by the most recent document load").unwrap()
    });

    let records_dropped = RECORDS_DROPPED.get_or_init(|| {
        IntCounter::new("records_dropped_total", "Items rejected during document loads").unwrap()
    });

    REGISTRY.register(Box::new(req_counter.clone())).ok();
    REGISTRY.register(Box::new(records_loaded.clone())).ok();
    REGISTRY.register(Box::new(records_dropped.clone())).ok();
}

pub fn inc_request(route: &str, status: &str) {
    if let Some(counter) = REQ_COUNTER.get() {
        counter.with_label_values(&[route, status]).inc();
    }
}

pub fn set_records_loaded(count: usize) {
    if let Some(gauge) = RECORDS_LOADED.get() {
        gauge.set(count as i64);
    }
}

pub fn add_records_dropped(count: usize) {
    if let Some(counter) = RECORDS_DROPPED.get() {
        counter.inc_by(count as u64);
    }
}

pub async fn get_metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        buffer,
    )
}
