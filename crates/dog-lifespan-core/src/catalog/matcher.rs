//! Fuzzy breed-name matching for "did you mean" suggestions.

use strsim::{jaro_winkler, normalized_levenshtein};

/// Minimum similarity for a breed to be suggested.
const MIN_SIMILARITY: f64 = 0.5;

/// Rank `names` by similarity to `query`, best first.
pub fn rank_similar<'a, I>(query: &str, names: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = names
        .into_iter()
        .map(|name| (similarity(&query_lower, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Combined similarity (0.0 - 1.0).
///
/// Substring hits ("리트리버" in "골든 리트리버") score as strong matches.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let fuzzy = jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4;
    if !a.is_empty() && b.contains(a) {
        fuzzy.max(0.9)
    } else {
        fuzzy
    }
}
