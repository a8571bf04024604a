//! Order-preserving deduplication shared by both extractors.

use std::collections::HashSet;

/// Drop case-insensitive duplicates, keeping the first occurrence.
///
/// The first-seen casing wins: `["Fix bug", "fix BUG"]` collapses to
/// `["Fix bug"]`.
pub(crate) fn dedupe_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.to_lowercase()) {
            unique.push(item);
        }
    }
    unique
}
