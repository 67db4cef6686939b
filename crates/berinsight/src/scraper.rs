//! Synthetic insight-document generation.
//!
//! The offline counterpart of the API: renders templated complaint,
//! suggestion, and insight records over the banking product catalog and
//! assembles them into a document the loader accepts as-is. Record counts
//! and sentiment weights follow the distributions of the real feedback
//! channels this data stands in for.

use chrono::{Duration, FixedOffset, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::model::{InsightDocument, InsightRecord, KIND_COMPLAINT, KIND_INSIGHT, KIND_SUGGESTION};

const PRODUCTS: &[&str] = &[
    "BRImo", "Card", "Qlola", "Loan", "Simpedes", "Britama", "Deposito",
];

const CHANNELS: &[&str] = &["BRImo", "BRILink", "CERIA", "Qlola", "MMS", "Sabrina"];

const SOCIAL_MEDIA: &[&str] = &[
    "YouTube",
    "Instagram",
    "Twitter",
    "Facebook",
    "Apple AppStore",
    "Google Playstore",
];

const FEATURES: &[(&str, &[&str])] = &[
    ("BRImo", &["Login", "Transfer", "Bill Payment", "QR Payment", "Account Info", "Virtual Account"]),
    ("Card", &["Payment", "Limit Check", "Reward Points", "Statement", "Activation"]),
    ("Qlola", &["Merchant Payment", "Top Up", "Transaction History", "Cashback"]),
    ("Loan", &["Application", "Disbursement", "Payment", "Status Check", "Restructuring"]),
    ("Simpedes", &["Account Opening", "Savings", "Withdrawal", "Interest"]),
    ("Britama", &["Account Management", "Transfer", "Monthly Fee", "Benefits"]),
    ("Deposito", &["Opening", "Renewal", "Interest Rate", "Withdrawal"]),
];

/// Complaint categories with their baseline urgency.
const COMPLAINT_CATEGORIES: &[(&str, u8)] = &[
    ("Performance Issue", 70),
    ("Bug/Error", 85),
    ("Security Concern", 95),
    ("UI/UX Problem", 50),
    ("Service Unavailable", 90),
    ("Transaction Failed", 95),
    ("Poor Customer Service", 60),
    ("Unclear Information", 40),
];

const COMPLAINT_TEMPLATES: &[&str] = &[
    "{product} keeps crashing when using {feature}",
    "Connection timeout errors all over {product} - {feature}",
    "{feature} transaction failed in {product} but the balance was deducted",
    "{feature} does not work properly in {product}",
    "{product} is very slow when opening {feature}",
    "Cannot log in to {product} since the last update",
    "{feature} data is inaccurate in {product}",
    "Customer service on {channel} is unresponsive about {product} issues",
    "{feature} in {product} keeps failing during peak hours",
    "{feature} takes far too long in {product}",
];

/// Suggestion categories with their baseline priority score.
const SUGGESTION_CATEGORIES: &[(&str, u8)] = &[
    ("Feature Request", 70),
    ("UX Improvement", 60),
    ("New Product Idea", 50),
    ("Integration Request", 65),
    ("Performance Enhancement", 75),
    ("Security Enhancement", 90),
    ("Accessibility", 55),
];

const SUGGESTION_TEMPLATES: &[&str] = &[
    "Add a {feature} shortcut to {product} for faster transactions",
    "Integrate {product} with popular e-wallets",
    "Improve the {feature} screens in {product} to be more user-friendly",
    "Add real-time notifications for {feature}",
    "Provide a dark mode for {product}",
    "Harden {feature} with biometric authentication",
    "Build an interactive tutorial for {feature}",
    "Add a {product} widget to the home screen",
    "Simplify the {feature} flow on {channel}",
    "Sync {product} with {channel} faster",
];

const INSIGHT_TEMPLATES: &[(&str, &str, &str, &str)] = &[
    (
        "Social Media Sentiment Trending Positive",
        "AI Social Listening",
        "Positive sentiment around {product} on {platform} is up. Main appreciation: {feature} improvements.",
        "Social Media Intelligence",
    ),
    (
        "Customer Experience Excellence",
        "AI Analytics Engine",
        "Customer satisfaction for {product} via {channel} improved this period. Key driver: {feature} enhancement.",
        "Customer Analytics",
    ),
    (
        "Product Innovation Opportunity",
        "Market Intelligence Platform",
        "Market analysis shows high demand for {feature} in {product}. Recommendation: prioritize development.",
        "Market Intelligence",
    ),
    (
        "Channel Performance Insight",
        "Analytics Platform",
        "{channel} is showing increased {product} adoption. {feature} is the most used functionality.",
        "Channel Analytics",
    ),
    (
        "Customer Journey Optimization",
        "UX Analytics",
        "Users reaching {product} via {channel} complete {feature} noticeably faster. Best practice identified.",
        "UX Intelligence",
    ),
];

/// How many records of each type to synthesize, and how far back dates may
/// fall.
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    pub complaints: usize,
    pub suggestions: usize,
    pub insights: usize,
    pub days_back: i64,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            complaints: 200,
            suggestions: 100,
            insights: 50,
            days_back: 30,
        }
    }
}

/// Current time in Jakarta (UTC+7), in the document's timestamp format.
pub fn jakarta_timestamp() -> String {
    let jakarta = FixedOffset::east_opt(7 * 3600).expect("fixed offset in range");
    Utc::now()
        .with_timezone(&jakarta)
        .format("%Y-%m-%d %H:%M WIB")
        .to_string()
}

fn random_date<R: Rng>(rng: &mut R, days_back: i64) -> String {
    let offset = rng.gen_range(0..=days_back.max(0));
    (Utc::now() - Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

fn features_for(product: &str) -> &'static [&'static str] {
    FEATURES
        .iter()
        .find(|(name, _)| *name == product)
        .map(|(_, features)| *features)
        .unwrap_or(&["General"])
}

fn render(template: &str, product: &str, feature: &str, channel: &str, platform: &str) -> String {
    template
        .replace("{product}", product)
        .replace("{feature}", feature)
        .replace("{channel}", channel)
        .replace("{platform}", platform)
}

fn weighted_sentiment<R: Rng>(rng: &mut R, weights: &[(&str, f64)]) -> String {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (label, weight) in weights {
        if roll < *weight {
            return (*label).to_string();
        }
        roll -= weight;
    }
    weights
        .last()
        .map(|(label, _)| (*label).to_string())
        .unwrap_or_default()
}

fn complaint<R: Rng>(rng: &mut R, days_back: i64) -> InsightRecord {
    let product = *PRODUCTS.choose(rng).expect("non-empty catalog");
    let channel = *CHANNELS.choose(rng).expect("non-empty catalog");
    let platform = *SOCIAL_MEDIA.choose(rng).expect("non-empty catalog");
    let feature = *features_for(product).choose(rng).expect("non-empty catalog");
    let (category, urgency_base) = *COMPLAINT_CATEGORIES.choose(rng).expect("non-empty catalog");
    let template = *COMPLAINT_TEMPLATES.choose(rng).expect("non-empty catalog");

    let mut record = InsightRecord::new(
        render(template, product, feature, channel, platform),
        platform,
        format!(
            "Customer reported issue with {feature} in {product} via {channel}. \
             Category: {category}. Requires immediate attention from product team."
        ),
    );
    record.kind = KIND_COMPLAINT.to_string();
    record.product = Some(product.to_string());
    record.feature = Some(feature.to_string());
    record.channel = Some(channel.to_string());
    record.social_media = Some(platform.to_string());
    record.category = Some(category.to_string());
    record.sentiment = weighted_sentiment(rng, &[("negative", 0.8), ("neutral", 0.2)]);
    record.urgency_score =
        (urgency_base as i64 + rng.gen_range(-10..=10)).clamp(0, 100) as u8;
    record.date = Some(random_date(rng, days_back));
    record
}

fn suggestion<R: Rng>(rng: &mut R, days_back: i64) -> InsightRecord {
    let product = *PRODUCTS.choose(rng).expect("non-empty catalog");
    let channel = *CHANNELS.choose(rng).expect("non-empty catalog");
    let platform = *SOCIAL_MEDIA.choose(rng).expect("non-empty catalog");
    let feature = *features_for(product).choose(rng).expect("non-empty catalog");
    let (category, priority_base) = *SUGGESTION_CATEGORIES.choose(rng).expect("non-empty catalog");
    let template = *SUGGESTION_TEMPLATES.choose(rng).expect("non-empty catalog");

    let mut record = InsightRecord::new(
        render(template, product, feature, channel, platform),
        platform,
        format!(
            "Customer suggestion for {feature} improvement in {product} via {channel}. \
             Type: {category}. Potential high impact on user satisfaction."
        ),
    );
    record.kind = KIND_SUGGESTION.to_string();
    record.product = Some(product.to_string());
    record.feature = Some(feature.to_string());
    record.channel = Some(channel.to_string());
    record.social_media = Some(platform.to_string());
    record.category = Some(category.to_string());
    record.sentiment = weighted_sentiment(rng, &[("positive", 0.7), ("neutral", 0.3)]);
    record.urgency_score =
        (priority_base as i64 + rng.gen_range(-15..=15)).clamp(0, 100) as u8;
    record.date = Some(random_date(rng, days_back));
    record
}

fn insight<R: Rng>(rng: &mut R, days_back: i64) -> InsightRecord {
    let product = *PRODUCTS.choose(rng).expect("non-empty catalog");
    let channel = *CHANNELS.choose(rng).expect("non-empty catalog");
    let platform = *SOCIAL_MEDIA.choose(rng).expect("non-empty catalog");
    let feature = *features_for(product).choose(rng).expect("non-empty catalog");
    let (title, source, summary, category) =
        *INSIGHT_TEMPLATES.choose(rng).expect("non-empty catalog");

    let mut record = InsightRecord::new(
        title,
        source,
        render(summary, product, feature, channel, platform),
    );
    record.kind = KIND_INSIGHT.to_string();
    record.product = Some(product.to_string());
    record.feature = Some(feature.to_string());
    record.channel = Some(channel.to_string());
    record.social_media = Some(platform.to_string());
    record.category = Some(category.to_string());
    record.sentiment = weighted_sentiment(
        rng,
        &[("positive", 0.5), ("neutral", 0.3), ("negative", 0.2)],
    );
    record.urgency_score = rng.gen_range(40..=90);
    // Insight dates use a shorter trailing window than raw feedback.
    record.date = Some(random_date(rng, (days_back / 2).max(1)));
    record
}

/// Synthesize a complete document ready for atomic persistence.
pub fn generate_document<R: Rng>(spec: &GenerationSpec, rng: &mut R) -> InsightDocument {
    info!(
        "Generating {} complaint(s), {} suggestion(s), {} insight(s)",
        spec.complaints, spec.suggestions, spec.insights
    );

    let mut items =
        Vec::with_capacity(spec.complaints + spec.suggestions + spec.insights);
    for _ in 0..spec.complaints {
        items.push(complaint(rng, spec.days_back));
    }
    for _ in 0..spec.suggestions {
        items.push(suggestion(rng, spec.days_back));
    }
    for _ in 0..spec.insights {
        items.push(insight(rng, spec.days_back));
    }

    InsightDocument {
        last_updated: jakarta_timestamp(),
        items,
        sources: None,
        summary: None,
    }
}
