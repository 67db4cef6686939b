//! Aggregation engine — pure, total functions over an in-memory record
//! sequence. Every request re-runs these from scratch; nothing here holds
//! state between calls.

pub mod breakdown;
pub mod filter;
pub mod sentiment;
pub mod trends;

pub use breakdown::{breakdown_by_type, CategoryGroup, ProductGroup, TypeBreakdown};
pub use filter::filter_by_date;
pub use sentiment::{sentiment_summary, KeywordCount, SentimentSummary};
pub use trends::{build_trends, build_trends_on, TrendGroup, TrendPoint};
