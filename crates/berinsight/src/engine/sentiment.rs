//! Sentiment tallies and naive keyword extraction.
//!
//! Keywords come from whitespace tokenization of record titles — no
//! stemming, no stop-word list. Coarse on purpose: the tokens feed a
//! dashboard word cloud, not a language model.

use std::collections::HashMap;

use serde::Serialize;

use crate::engine::breakdown::round2;
use crate::model::{InsightRecord, SENTIMENT_NEGATIVE, SENTIMENT_NEUTRAL, SENTIMENT_POSITIVE};

const TOP_KEYWORDS: usize = 10;
const MIN_TOKEN_CHARS: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    #[serde(rename = "topKeywords")]
    pub top_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Numeric value of a stored sentiment label: positive 1, negative -1,
/// everything else 0.
pub fn sentiment_value(sentiment: &str) -> i64 {
    match sentiment {
        SENTIMENT_POSITIVE => 1,
        SENTIMENT_NEGATIVE => -1,
        _ => 0,
    }
}

pub fn sentiment_summary(records: &[InsightRecord]) -> SentimentSummary {
    let total = records.len();
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;

    for record in records {
        match record.sentiment.as_str() {
            SENTIMENT_POSITIVE => positive += 1,
            SENTIMENT_NEUTRAL => neutral += 1,
            SENTIMENT_NEGATIVE => negative += 1,
            _ => {}
        }
    }

    let average_score = if total == 0 {
        0.0
    } else {
        round2((positive as f64 - negative as f64) / total as f64)
    };

    SentimentSummary {
        positive,
        neutral,
        negative,
        total,
        average_score,
        top_keywords: top_keywords(records),
    }
}

/// Global title-token frequencies, top 10 by descending count with ties in
/// first-encountered order.
fn top_keywords(records: &[InsightRecord]) -> Vec<KeywordCount> {
    let mut order = 0usize;
    let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();

    for record in records {
        for token in record.title.split_whitespace() {
            let token = token.to_lowercase();
            if token.chars().count() <= MIN_TOKEN_CHARS {
                continue;
            }
            let entry = frequencies.entry(token).or_insert_with(|| {
                order += 1;
                (0, order)
            });
            entry.0 += 1;
        }
    }

    let mut keywords: Vec<(String, usize, usize)> = frequencies
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    keywords.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    keywords.truncate(TOP_KEYWORDS);
    keywords
        .into_iter()
        .map(|(word, count, _)| KeywordCount { word, count })
        .collect()
}
