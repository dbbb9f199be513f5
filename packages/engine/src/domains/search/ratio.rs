//! Token-based fuzzy matching on a 0..=100 scale.
//!
//! Venue names arrive with inconsistent word order and punctuation, so the
//! ratio compares token multisets two ways and keeps the better score:
//! sorted-token edit distance, and set arithmetic over the shared core.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Matches scoring below this are dropped from search results.
pub const RELEVANCE_FLOOR: f64 = 30.0;

/// Similarity of `candidate` to `query`, 0 (disjoint) to 100 (equal up to
/// token order and punctuation).
pub fn token_ratio(query: &str, candidate: &str) -> f64 {
    let query_tokens = tokenize(query);
    let candidate_tokens = tokenize(candidate);

    if query_tokens.is_empty() || candidate_tokens.is_empty() {
        return if query_tokens == candidate_tokens {
            100.0
        } else {
            0.0
        };
    }

    let best = token_sort_ratio(&query_tokens, &candidate_tokens)
        .max(token_set_ratio(&query_tokens, &candidate_tokens));
    (best * 100.0).min(100.0)
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Edit distance over the tokens joined in sorted order, so word order
/// never costs anything.
fn token_sort_ratio(a: &[String], b: &[String]) -> f64 {
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort();
    b_sorted.sort();
    normalized_levenshtein(&a_sorted.join(" "), &b_sorted.join(" "))
}

/// Set-based comparison: the shared token core against each side's core
/// plus leftovers. A query fully contained in the candidate scores 1.0.
fn token_set_ratio(a: &[String], b: &[String]) -> f64 {
    let a_set: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b_set: BTreeSet<&str> = b.iter().map(String::as_str).collect();

    let core: Vec<&str> = a_set.intersection(&b_set).copied().collect();
    let a_rest: Vec<&str> = a_set.difference(&b_set).copied().collect();
    let b_rest: Vec<&str> = b_set.difference(&a_set).copied().collect();

    let core_joined = core.join(" ");
    let core_with_a = join_parts(&core_joined, &a_rest);
    let core_with_b = join_parts(&core_joined, &b_rest);

    normalized_levenshtein(&core_joined, &core_with_a)
        .max(normalized_levenshtein(&core_joined, &core_with_b))
        .max(normalized_levenshtein(&core_with_a, &core_with_b))
}

fn join_parts(core: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        core.to_string()
    } else if core.is_empty() {
        rest.join(" ")
    } else {
        format!("{} {}", core, rest.join(" "))
    }
}
