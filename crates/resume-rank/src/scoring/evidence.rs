//! Evidence retrieval: ranks chunks by lexical overlap with a query term set.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::chunker::tokenize;

/// Max snippets returned per category.
const MAX_SNIPPETS: usize = 3;
/// Snippet budget, in characters of the source chunk.
const SNIPPET_CHARS: usize = 220;
/// Score bonus per query phrase contained verbatim in a chunk.
const PHRASE_BONUS: f64 = 0.15;
/// Only the first N query terms are eligible for the phrase bonus.
const PHRASE_TERMS: usize = 8;

/// Returns up to three evidence snippets for a category, best chunks first.
///
/// Each chunk scores `density + phrase_bonus` where density is the fraction
/// of its tokens present in the query token set. Zero-score chunks are
/// excluded; ties keep original chunk order.
pub fn retrieve_evidence(chunks: &[String], terms: &[String], key: &str) -> Vec<String> {
    if chunks.is_empty() {
        return Vec::new();
    }
    let query_tokens: HashSet<String> = tokenize(&terms.join(" ")).into_iter().collect();
    let mut ranked: Vec<(f64, &str)> = Vec::new();
    for chunk in chunks {
        let chunk_tokens = tokenize(chunk);
        if chunk_tokens.is_empty() {
            continue;
        }
        let overlap = chunk_tokens
            .iter()
            .filter(|t| query_tokens.contains(t.as_str()))
            .count();
        let density = overlap as f64 / chunk_tokens.len() as f64;

        let lower_chunk = chunk.to_lowercase();
        let mut phrase_bonus = 0.0;
        for term in terms.iter().take(PHRASE_TERMS) {
            let phrase = term.to_lowercase();
            if !phrase.is_empty() && lower_chunk.contains(&phrase) {
                phrase_bonus += PHRASE_BONUS;
            }
        }

        let score = density + phrase_bonus;
        if score > 0.0 {
            ranked.push((score, chunk.trim()));
        }
    }
    // stable sort: equal scores keep chunk order
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked
        .iter()
        .take(MAX_SNIPPETS)
        .map(|(_, chunk)| {
            format!(
                "{} evidence: {}",
                title_case(key),
                truncate_chars(chunk, SNIPPET_CHARS)
            )
        })
        .collect()
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_returns_at_most_three_snippets() {
        let chunks = chunks(&[
            "python data",
            "python sql",
            "python spark",
            "python airflow",
        ]);
        let terms = vec!["python".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert_eq!(evidence.len(), 3);
    }

    #[test]
    fn test_snippets_carry_category_prefix() {
        let chunks = chunks(&["python everywhere"]);
        let terms = vec!["python".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert!(evidence[0].starts_with("Skills evidence: "));
    }

    #[test]
    fn test_zero_overlap_chunks_are_excluded() {
        let chunks = chunks(&["nothing relevant here", "python appears here"]);
        let terms = vec!["python".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert_eq!(evidence.len(), 1);
        assert!(evidence[0].contains("python appears here"));
    }

    #[test]
    fn test_denser_chunk_ranks_first() {
        let chunks = chunks(&[
            "python in a very long chunk of mostly unrelated filler text words",
            "python sql",
        ]);
        let terms = vec!["python".to_string(), "sql".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert!(evidence[0].contains("python sql"));
    }

    #[test]
    fn test_phrase_bonus_outranks_token_scatter() {
        // identical token density; only the second chunk has the contiguous phrase
        let chunks = chunks(&["analyst data", "data analyst"]);
        let terms = vec!["data analyst".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "titles");
        assert!(evidence[0].ends_with(": data analyst"));
        assert!(evidence[1].ends_with(": analyst data"));
    }

    #[test]
    fn test_ties_keep_chunk_order() {
        let chunks = chunks(&["python a", "python b", "python c", "python d"]);
        let terms = vec!["python".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert!(evidence[0].contains("python a"));
        assert!(evidence[1].contains("python b"));
        assert!(evidence[2].contains("python c"));
    }

    #[test]
    fn test_snippet_truncated_to_budget() {
        let long_tail = "x".repeat(500);
        let text = format!("python {long_tail}");
        let chunks = vec![text];
        let terms = vec!["python".to_string()];
        let evidence = retrieve_evidence(&chunks, &terms, "skills");
        assert_eq!(
            evidence[0].chars().count(),
            "Skills evidence: ".chars().count() + 220
        );
    }

    #[test]
    fn test_empty_query_produces_no_evidence() {
        let chunks = chunks(&["some resume text"]);
        let evidence = retrieve_evidence(&chunks, &[], "skills");
        assert!(evidence.is_empty());
    }
}
