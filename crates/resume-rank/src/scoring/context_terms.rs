//! Context term derivation: auxiliary keywords pulled from the role title,
//! skill list, and requisition prose, used as a catch-all relevance signal.

use std::collections::HashSet;

use super::chunker::{tokenize, top_tokens};

/// Cap on the derived term list.
const MAX_CONTEXT_TERMS: usize = 15;
/// How many leading skills seed the list verbatim.
const SEED_SKILLS: usize = 6;
/// Frequency-ranked tokens taken from the job description.
const JD_TOKENS: usize = 10;
/// Frequency-ranked tokens taken from the ideal-candidate text.
const IDEAL_TOKENS: usize = 8;

/// Builds up to fifteen lower-cased context terms, de-duplicated in
/// first-seen order. Tokens of two characters or fewer are dropped.
pub fn derive_context_terms(
    role: &str,
    skills: &[String],
    job_description: &str,
    ideal_candidate: &str,
) -> Vec<String> {
    let mut seed: Vec<String> = Vec::new();
    if !role.trim().is_empty() {
        seed.extend(tokenize(role));
    }
    seed.extend(skills.iter().take(SEED_SKILLS).map(|s| s.to_lowercase()));
    seed.extend(top_tokens(job_description, JD_TOKENS));
    seed.extend(top_tokens(ideal_candidate, IDEAL_TOKENS));

    let mut unique = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for term in seed {
        if term.chars().count() <= 2 {
            continue;
        }
        if seen.insert(term.clone()) {
            unique.push(term);
        }
    }
    unique.truncate(MAX_CONTEXT_TERMS);
    unique
}
