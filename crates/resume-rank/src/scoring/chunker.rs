//! Word-window chunking and tokenization over raw resume text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Default sliding-window size, in words.
pub const WORDS_PER_CHUNK: usize = 90;
/// Default window overlap, in words.
pub const CHUNK_OVERLAP: usize = 20;

/// Tokens keep `+`, `#`, `.` and `-` so skills like "c++", "c#" and ".net"
/// survive as single tokens.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9+#.-]+").unwrap());

/// Words excluded from frequency ranking; generic requisition vocabulary
/// that would otherwise dominate every job description.
const STOPWORDS: &[&str] = &[
    "the",
    "and",
    "for",
    "with",
    "you",
    "that",
    "this",
    "are",
    "from",
    "will",
    "have",
    "your",
    "our",
    "years",
    "experience",
    "candidate",
    "role",
    "job",
];

/// Splits text into overlapping word windows.
///
/// Empty or whitespace-only input yields a single empty chunk, never an empty
/// sequence, so downstream stages need no zero-chunk special case. The final
/// window may be shorter than `words_per_chunk`.
pub fn chunk_text(text: &str, words_per_chunk: usize, overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }
    let step = words_per_chunk.saturating_sub(overlap).max(1);
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let end = (i + words_per_chunk).min(words.len());
        chunks.push(words[i..end].join(" "));
        i += step;
    }
    chunks
}

/// Lower-cased lexical tokens of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The `limit` most frequent tokens of `text`, stopword-filtered and with
/// tokens of two characters or fewer dropped. Ties resolve in first-seen
/// order so the ranking is deterministic.
pub fn top_tokens(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(text).into_iter().enumerate() {
        if token.len() <= 2 || STOPWORDS.contains(&token.as_str()) {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }
    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _, _)| token)
        .collect()
}
