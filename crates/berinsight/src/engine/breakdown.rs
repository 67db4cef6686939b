//! Grouped complaint/suggestion breakdowns.
//!
//! Records of the requested type are grouped twice — once by category,
//! once by product — with per-group counts, percentages of the selected
//! total, and up to three example titles in original record order.

use serde::Serialize;

use crate::model::{InsightRecord, KIND_SUGGESTION};

const MAX_EXAMPLES: usize = 3;

/// Priority assigned to every suggestion group. A placeholder until a real
/// prioritization policy exists; not derived from urgency scores.
const SUGGESTION_PRIORITY: &str = "medium";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeBreakdown {
    pub total: usize,
    #[serde(rename = "byCategory")]
    pub by_category: Vec<CategoryGroup>,
    #[serde(rename = "byProduct")]
    pub by_product: Vec<ProductGroup>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    #[serde(rename = "type")]
    pub label: String,
    pub count: usize,
    pub percentage: f64,
    pub examples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductGroup {
    pub product: String,
    pub count: usize,
    pub percentage: f64,
    pub examples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Break the records of one type down by category and by product.
///
/// `kind` is matched verbatim, so the caller passes `"complaint"` or
/// `"suggestion"`; any other value simply selects nothing.
pub fn breakdown_by_type(records: &[InsightRecord], kind: &str) -> TypeBreakdown {
    let selected: Vec<&InsightRecord> = records.iter().filter(|r| r.kind == kind).collect();
    let total = selected.len();
    let priority = (kind == KIND_SUGGESTION).then(|| SUGGESTION_PRIORITY.to_string());

    let by_category = group_by(&selected, total, |r| r.category.as_deref(), "Unknown")
        .into_iter()
        .map(|group| CategoryGroup {
            label: group.label,
            count: group.count,
            percentage: group.percentage,
            examples: group.examples,
            priority: priority.clone(),
        })
        .collect();

    let by_product = group_by(&selected, total, |r| r.product.as_deref(), "Unknown")
        .into_iter()
        .map(|group| ProductGroup {
            product: group.label,
            count: group.count,
            percentage: group.percentage,
            examples: group.examples,
            priority: priority.clone(),
        })
        .collect();

    TypeBreakdown {
        total,
        by_category,
        by_product,
    }
}

struct DimensionGroup {
    label: String,
    count: usize,
    percentage: f64,
    examples: Vec<String>,
}

/// Group along one dimension in first-encountered order, then order by
/// descending count. The sort is stable, so equal counts keep their
/// insertion order.
fn group_by<'a>(
    selected: &[&'a InsightRecord],
    total: usize,
    key: impl Fn(&'a InsightRecord) -> Option<&'a str>,
    missing_label: &str,
) -> Vec<DimensionGroup> {
    let mut groups: Vec<DimensionGroup> = Vec::new();

    for &record in selected {
        let label = key(record).unwrap_or(missing_label);
        let idx = match groups.iter().position(|g| g.label == label) {
            Some(idx) => idx,
            None => {
                groups.push(DimensionGroup {
                    label: label.to_string(),
                    count: 0,
                    percentage: 0.0,
                    examples: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.count += 1;
        if group.examples.len() < MAX_EXAMPLES {
            group.examples.push(record.title.clone());
        }
    }

    for group in &mut groups {
        group.percentage = percentage_of(group.count, total);
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// `round(count / total * 100, 2)`, with 0 for an empty total.
fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InsightRecord;
    use proptest::prelude::*;

    fn record(title: &str, kind: &str, category: Option<&str>, product: Option<&str>) -> InsightRecord {
        let mut r = InsightRecord::new(title, "src", "body");
        r.kind = kind.to_string();
        r.category = category.map(str::to_owned);
        r.product = product.map(str::to_owned);
        r
    }

    #[test]
    fn empty_input_yields_zero_shape() {
        let breakdown = breakdown_by_type(&[], "complaint");
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.by_category.is_empty());
        assert!(breakdown.by_product.is_empty());
    }

    #[test]
    fn worked_example_from_mixed_records() {
        let records = vec![
            record("Login broken", "complaint", Some("Bug/Error"), Some("BRImo")),
            record("Login slow", "complaint", Some("Bug/Error"), Some("BRImo")),
            record("Nice app", "insight", None, None),
        ];

        let breakdown = breakdown_by_type(&records, "complaint");
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.by_category.len(), 1);
        let category = &breakdown.by_category[0];
        assert_eq!(category.label, "Bug/Error");
        assert_eq!(category.count, 2);
        assert_eq!(category.percentage, 100.0);
        assert_eq!(category.examples, ["Login broken", "Login slow"]);
        assert_eq!(category.priority, None);

        assert_eq!(breakdown.by_product.len(), 1);
        assert_eq!(breakdown.by_product[0].product, "BRImo");
        assert_eq!(breakdown.by_product[0].count, 2);
    }

    #[test]
    fn missing_dimension_falls_into_unknown_bucket() {
        let records = vec![
            record("a", "complaint", None, None),
            record("b", "complaint", Some("Bug/Error"), Some("Card")),
        ];
        let breakdown = breakdown_by_type(&records, "complaint");
        let labels: Vec<_> = breakdown.by_category.iter().map(|g| g.label.as_str()).collect();
        assert!(labels.contains(&"Unknown"));
        let products: Vec<_> = breakdown.by_product.iter().map(|g| g.product.as_str()).collect();
        assert!(products.contains(&"Unknown"));
    }

    #[test]
    fn groups_sorted_by_count_with_stable_ties() {
        let records = vec![
            record("a", "complaint", Some("UI/UX Problem"), None),
            record("b", "complaint", Some("Bug/Error"), None),
            record("c", "complaint", Some("Bug/Error"), None),
            record("d", "complaint", Some("Transaction Failed"), None),
        ];
        let breakdown = breakdown_by_type(&records, "complaint");
        let labels: Vec<_> = breakdown.by_category.iter().map(|g| g.label.as_str()).collect();
        // Bug/Error leads on count; the two singleton groups keep their
        // first-encountered order.
        assert_eq!(labels, ["Bug/Error", "UI/UX Problem", "Transaction Failed"]);
    }

    #[test]
    fn examples_cap_at_three_in_record_order() {
        let records: Vec<_> = (0..5)
            .map(|i| record(&format!("t{i}"), "complaint", Some("Bug/Error"), None))
            .collect();
        let breakdown = breakdown_by_type(&records, "complaint");
        assert_eq!(breakdown.by_category[0].examples, ["t0", "t1", "t2"]);
    }

    #[test]
    fn suggestions_carry_the_priority_stub() {
        let records = vec![
            record("a", "suggestion", Some("Feature Request"), Some("BRImo")),
        ];
        let breakdown = breakdown_by_type(&records, "suggestion");
        assert_eq!(breakdown.by_category[0].priority.as_deref(), Some("medium"));
        assert_eq!(breakdown.by_product[0].priority.as_deref(), Some("medium"));
    }

    #[test]
    fn unknown_type_values_are_selectable_verbatim() {
        let records = vec![record("a", "praise", None, None)];
        assert_eq!(breakdown_by_type(&records, "complaint").total, 0);
        assert_eq!(breakdown_by_type(&records, "praise").total, 1);
    }

    proptest! {
        #[test]
        fn counts_sum_to_total_and_percentages_to_100(
            categories in proptest::collection::vec(0u8..5, 0..60)
        ) {
            let records: Vec<_> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    record(&format!("t{i}"), "complaint", Some(&format!("cat{c}")), None)
                })
                .collect();

            let breakdown = breakdown_by_type(&records, "complaint");
            let count_sum: usize = breakdown.by_category.iter().map(|g| g.count).sum();
            prop_assert_eq!(count_sum, breakdown.total);

            let pct_sum: f64 = breakdown.by_category.iter().map(|g| g.percentage).sum();
            if breakdown.total == 0 {
                prop_assert_eq!(pct_sum, 0.0);
            } else {
                prop_assert!((pct_sum - 100.0).abs() < 0.5, "pct_sum = {}", pct_sum);
            }
        }
    }
}
