// berinsight/crates/berinsight/src/lib.rs

pub mod api;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod model;
pub mod scraper;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

// Public API exports
pub use config::Config;
pub use model::{InsightDocument, InsightRecord};
pub use server::run_server;

// Engine exports
pub use engine::{
    breakdown_by_type, build_trends, filter_by_date, sentiment_summary, SentimentSummary,
    TrendGroup, TypeBreakdown,
};
pub use store::{load_document, load_records, LoadedDocument};
