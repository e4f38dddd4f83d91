//! Exact word-boundary term matching against chunked resume text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::evidence::retrieve_evidence;

/// Rating used for categories the recruiter left unconfigured; neutral
/// rather than penalizing.
const NEUTRAL_RATING: u8 = 3;

/// Outcome of scoring one term-list category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermMetric {
    pub matched_terms: Vec<String>,
    pub evidence: Vec<String>,
    pub rating: u8,
}

/// Returns the subset of `terms` found in the chunk text, order-preserving
/// and in original casing.
///
/// A term matches when its regex-escaped, lower-cased form occurs with word
/// boundaries on both ends in the lower-cased, whitespace-joined chunk text;
/// multi-word terms must appear as a contiguous phrase. Blank terms are
/// skipped.
pub fn matched_terms(chunks: &[String], terms: &[String]) -> Vec<String> {
    let hay = chunks.join(" ").to_lowercase();
    let mut matched = Vec::new();
    for term in terms {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(&needle));
        if let Ok(re) = Regex::new(&pattern) {
            if re.is_match(&hay) {
                matched.push(term.clone());
            }
        }
    }
    matched
}

/// Maps a matched-terms ratio onto the 1-5 rating scale.
pub fn ratio_to_rating(ratio: f64) -> u8 {
    if ratio >= 0.9 {
        5
    } else if ratio >= 0.65 {
        4
    } else if ratio >= 0.4 {
        3
    } else if ratio >= 0.2 {
        2
    } else {
        1
    }
}

/// Scores one term-list category: matches, evidence snippets, and rating.
///
/// An empty term list yields no matches, no evidence, and the neutral
/// rating. Evidence retrieval queries the matched terms, falling back to the
/// full target list when nothing matched so the category still surfaces the
/// closest chunks.
pub fn score_term_metric(chunks: &[String], terms: &[String], key: &str) -> TermMetric {
    if terms.is_empty() {
        return TermMetric {
            matched_terms: Vec::new(),
            evidence: Vec::new(),
            rating: NEUTRAL_RATING,
        };
    }
    let matched = matched_terms(chunks, terms);
    let ratio = matched.len() as f64 / terms.len().max(1) as f64;
    let rating = ratio_to_rating(ratio);
    let query = if matched.is_empty() {
        terms
    } else {
        matched.as_slice()
    };
    let evidence = retrieve_evidence(chunks, query, key);
    TermMetric {
        matched_terms: matched,
        evidence,
        rating,
    }
}
