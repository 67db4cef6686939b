//! Insight record and document model.
//!
//! The persisted document is an open schema: the core fields below are
//! statically typed, and anything else a producer attaches to a record is
//! kept verbatim in `extra` so it survives a read/write round trip.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const KIND_COMPLAINT: &str = "complaint";
pub const KIND_SUGGESTION: &str = "suggestion";
pub const KIND_INSIGHT: &str = "insight";

pub const SENTIMENT_POSITIVE: &str = "positive";
pub const SENTIMENT_NEUTRAL: &str = "neutral";
pub const SENTIMENT_NEGATIVE: &str = "negative";

pub const DEFAULT_URGENCY: u8 = 50;

/// One customer-feedback item with provenance and classification metadata.
///
/// `type` and `sentiment` are stored as plain strings: unknown values are
/// legal and flow through aggregation as opaque grouping keys. Malformed
/// values in optional fields degrade to their defaults instead of
/// invalidating the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub title: String,
    pub source: String,
    pub summary: String,
    #[serde(
        rename = "type",
        default = "default_kind",
        deserialize_with = "lenient_kind"
    )]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub feature: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_media: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default = "default_sentiment", deserialize_with = "lenient_sentiment")]
    pub sentiment: String,
    #[serde(default = "default_urgency", deserialize_with = "lenient_urgency")]
    pub urgency_score: u8,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<u8>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<String>,
    /// Unrecognized fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl InsightRecord {
    /// Minimal record with required fields only; everything else defaulted.
    pub fn new(title: impl Into<String>, source: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            summary: summary.into(),
            kind: default_kind(),
            product: None,
            feature: None,
            channel: None,
            social_media: None,
            category: None,
            sentiment: default_sentiment(),
            urgency_score: DEFAULT_URGENCY,
            date: None,
            rating: None,
            user: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Root persisted structure. `sources` and `summary` are bookkeeping blobs
/// written by producers; the engine carries them but never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDocument {
    #[serde(default = "default_last_updated")]
    pub last_updated: String,
    #[serde(default)]
    pub items: Vec<InsightRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
}

pub fn default_kind() -> String {
    KIND_INSIGHT.to_string()
}

pub fn default_sentiment() -> String {
    SENTIMENT_NEUTRAL.to_string()
}

fn default_urgency() -> u8 {
    DEFAULT_URGENCY
}

fn default_last_updated() -> String {
    "unknown".to_string()
}

fn lenient_kind<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(default_kind))
}

fn lenient_sentiment<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(default_sentiment))
}

fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.as_ref().and_then(Value::as_str).map(str::to_owned))
}

fn lenient_urgency<'de, D>(de: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(value
        .as_u64()
        .filter(|n| *n <= 100)
        .map(|n| n as u8)
        .unwrap_or(DEFAULT_URGENCY))
}

fn lenient_rating<'de, D>(de: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_applied_for_missing_optional_fields() {
        let record: InsightRecord = serde_json::from_value(json!({
            "title": "Login broken",
            "source": "Twitter",
            "summary": "cannot log in"
        }))
        .unwrap();

        assert_eq!(record.kind, KIND_INSIGHT);
        assert_eq!(record.sentiment, SENTIMENT_NEUTRAL);
        assert_eq!(record.urgency_score, DEFAULT_URGENCY);
        assert_eq!(record.product, None);
        assert_eq!(record.date, None);
    }

    #[test]
    fn unknown_enum_values_pass_through_verbatim() {
        let record: InsightRecord = serde_json::from_value(json!({
            "title": "t",
            "source": "s",
            "summary": "x",
            "type": "praise",
            "sentiment": "furious"
        }))
        .unwrap();

        assert_eq!(record.kind, "praise");
        assert_eq!(record.sentiment, "furious");
    }

    #[test]
    fn malformed_optional_fields_degrade_to_defaults() {
        let record: InsightRecord = serde_json::from_value(json!({
            "title": "t",
            "source": "s",
            "summary": "x",
            "type": 7,
            "product": 12,
            "urgency_score": "high",
            "rating": "five",
            "date": 20240301
        }))
        .unwrap();

        assert_eq!(record.kind, KIND_INSIGHT);
        assert_eq!(record.product, None);
        assert_eq!(record.urgency_score, DEFAULT_URGENCY);
        assert_eq!(record.rating, None);
        assert_eq!(record.date, None);
    }

    #[test]
    fn out_of_range_urgency_degrades_to_default() {
        let record: InsightRecord = serde_json::from_value(json!({
            "title": "t",
            "source": "s",
            "summary": "x",
            "urgency_score": 250
        }))
        .unwrap();

        assert_eq!(record.urgency_score, DEFAULT_URGENCY);
    }

    #[test]
    fn unrecognized_fields_round_trip() {
        let input = json!({
            "title": "t",
            "source": "s",
            "summary": "x",
            "review_id": "abc-123",
            "device": {"os": "android", "version": 14}
        });

        let record: InsightRecord = serde_json::from_value(input).unwrap();
        assert_eq!(record.extra["review_id"], json!("abc-123"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["review_id"], json!("abc-123"));
        assert_eq!(back["device"]["os"], json!("android"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<InsightRecord, _> = serde_json::from_value(json!({
            "title": "t",
            "summary": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn document_defaults() {
        let doc: InsightDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.last_updated, "unknown");
        assert!(doc.items.is_empty());
    }
}
