//! Per-(product, feature) daily trend series.

use serde::Serialize;

use crate::engine::breakdown::round2;
use crate::engine::sentiment::sentiment_value;
use crate::model::InsightRecord;

const UNKNOWN_PRODUCT: &str = "Unknown";
const GENERAL_FEATURE: &str = "General";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendGroup {
    pub product: String,
    pub feature: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub count: usize,
    #[serde(rename = "sentimentScore")]
    pub sentiment_score: f64,
}

/// Build trend series, bucketing undated records on today's UTC date.
pub fn build_trends(records: &[InsightRecord], product: Option<&str>) -> Vec<TrendGroup> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    build_trends_on(records, product, &today)
}

/// Build trend series with an explicit processing date for undated
/// records. Groups are emitted in first-encountered order; points within a
/// group ascend by date.
///
/// The product pre-filter matches the raw field exactly, so records
/// without a product only appear (under `Unknown`) when no filter is
/// given.
pub fn build_trends_on(
    records: &[InsightRecord],
    product: Option<&str>,
    today: &str,
) -> Vec<TrendGroup> {
    struct DateBucket {
        date: String,
        count: usize,
        value_sum: i64,
    }
    struct GroupAccum {
        product: String,
        feature: String,
        buckets: Vec<DateBucket>,
    }

    let mut groups: Vec<GroupAccum> = Vec::new();

    for record in records {
        if let Some(wanted) = product {
            if record.product.as_deref() != Some(wanted) {
                continue;
            }
        }

        let product_label = record.product.as_deref().unwrap_or(UNKNOWN_PRODUCT);
        let feature_label = record.feature.as_deref().unwrap_or(GENERAL_FEATURE);
        let date = record.date.as_deref().unwrap_or(today);
        let value = sentiment_value(&record.sentiment);

        let idx = match groups
            .iter()
            .position(|g| g.product == product_label && g.feature == feature_label)
        {
            Some(idx) => idx,
            None => {
                groups.push(GroupAccum {
                    product: product_label.to_string(),
                    feature: feature_label.to_string(),
                    buckets: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];

        match group.buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => {
                bucket.count += 1;
                bucket.value_sum += value;
            }
            None => group.buckets.push(DateBucket {
                date: date.to_string(),
                count: 1,
                value_sum: value,
            }),
        }
    }

    groups
        .into_iter()
        .map(|mut group| {
            group.buckets.sort_by(|a, b| a.date.cmp(&b.date));
            TrendGroup {
                product: group.product,
                feature: group.feature,
                points: group
                    .buckets
                    .into_iter()
                    .map(|bucket| TrendPoint {
                        date: bucket.date,
                        count: bucket.count,
                        sentiment_score: round2(bucket.value_sum as f64 / bucket.count as f64),
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InsightRecord;

    fn record(
        product: Option<&str>,
        feature: Option<&str>,
        date: Option<&str>,
        sentiment: &str,
    ) -> InsightRecord {
        let mut r = InsightRecord::new("title", "src", "body");
        r.product = product.map(str::to_owned);
        r.feature = feature.map(str::to_owned);
        r.date = date.map(str::to_owned);
        r.sentiment = sentiment.to_string();
        r
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(build_trends_on(&[], None, "2024-03-01").is_empty());
    }

    #[test]
    fn groups_by_product_feature_in_first_encountered_order() {
        let records = vec![
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-01"), "negative"),
            record(Some("Card"), Some("Payment"), Some("2024-03-01"), "neutral"),
            record(Some("BRImo"), Some("Login"), Some("2024-03-01"), "negative"),
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-02"), "positive"),
        ];
        let trends = build_trends_on(&records, None, "2024-03-05");
        let keys: Vec<_> = trends
            .iter()
            .map(|g| (g.product.as_str(), g.feature.as_str()))
            .collect();
        assert_eq!(
            keys,
            [("BRImo", "Transfer"), ("Card", "Payment"), ("BRImo", "Login")]
        );
    }

    #[test]
    fn points_ascend_by_date_with_daily_counts_and_scores() {
        let records = vec![
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-02"), "positive"),
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-01"), "negative"),
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-02"), "negative"),
            record(Some("BRImo"), Some("Transfer"), Some("2024-03-02"), "positive"),
        ];
        let trends = build_trends_on(&records, None, "2024-03-05");
        assert_eq!(trends.len(), 1);
        let points = &trends[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-03-01");
        assert_eq!(points[0].count, 1);
        assert_eq!(points[0].sentiment_score, -1.0);
        assert_eq!(points[1].date, "2024-03-02");
        assert_eq!(points[1].count, 3);
        // (1 - 1 + 1) / 3 rounds to 0.33
        assert_eq!(points[1].sentiment_score, 0.33);

        let dates: Vec<_> = points.iter().map(|p| p.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn missing_dimensions_use_default_labels() {
        let records = vec![record(None, None, Some("2024-03-01"), "neutral")];
        let trends = build_trends_on(&records, None, "2024-03-05");
        assert_eq!(trends[0].product, "Unknown");
        assert_eq!(trends[0].feature, "General");
    }

    #[test]
    fn undated_records_bucket_on_processing_date() {
        let records = vec![
            record(Some("BRImo"), Some("Login"), None, "negative"),
            record(Some("BRImo"), Some("Login"), Some("2024-03-01"), "neutral"),
        ];
        let trends = build_trends_on(&records, None, "2024-03-05");
        let dates: Vec<_> = trends[0].points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-03-05"]);
    }

    #[test]
    fn product_filter_is_exact_and_excludes_productless_records() {
        let records = vec![
            record(Some("BRImo"), Some("Login"), Some("2024-03-01"), "neutral"),
            record(Some("Card"), Some("Payment"), Some("2024-03-01"), "neutral"),
            record(None, Some("Login"), Some("2024-03-01"), "neutral"),
        ];
        let trends = build_trends_on(&records, Some("BRImo"), "2024-03-05");
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].product, "BRImo");

        assert!(build_trends_on(&records, Some("Unknown"), "2024-03-05").is_empty());
    }

    #[test]
    fn unknown_sentiment_scores_zero() {
        let records = vec![record(Some("BRImo"), Some("Login"), Some("2024-03-01"), "furious")];
        let trends = build_trends_on(&records, None, "2024-03-05");
        assert_eq!(trends[0].points[0].sentiment_score, 0.0);
    }
}
