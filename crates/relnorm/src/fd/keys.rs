//! Candidate key search with size bounding and minimality pruning.

use std::collections::HashSet;

use super::closure::is_superkey;
use super::types::Fd;
use crate::relation::Row;

/// Bounds for the candidate key search.
#[derive(Debug, Clone)]
pub struct KeyFinderConfig {
    /// Largest key size tried before giving up.
    pub max_key_size: usize,
}

impl Default for KeyFinderConfig {
    fn default() -> Self {
        Self { max_key_size: 3 }
    }
}

/// Search for minimal candidate keys.
///
/// Combinations are generated in increasing size order, so the first size
/// that yields any key wins and the search stops there: the result holds
/// minimal keys of the smallest cardinality, not necessarily every minimal
/// key of every size. Candidates with an already-found key as a subset are
/// skipped, so no returned key has a proper subset also returned.
///
/// When rows are supplied, empirical uniqueness of the candidate's
/// projection is checked first and accepts without FD support; otherwise
/// the structural superkey test decides. An empty result is valid and
/// means no key was found within the bound; the caller records a warning.
pub fn find_candidate_keys(
    columns: &[String],
    fds: &[Fd],
    rows: Option<&[Row]>,
    config: &KeyFinderConfig,
) -> Vec<Vec<String>> {
    let is_unique = |cols: &[String]| -> bool {
        let Some(rows) = rows else { return false };
        // An empty sample carries no evidence of uniqueness; fall through
        // to the structural test instead of accepting vacuously.
        if rows.is_empty() {
            return false;
        }
        let mut seen = HashSet::new();
        rows.iter().all(|r| seen.insert(r.dedup_key(cols)))
    };

    let mut found: Vec<Vec<String>> = Vec::new();
    for size in 1..=config.max_key_size.min(columns.len()) {
        for candidate in combinations(columns, size) {
            let subset_is_key = found
                .iter()
                .any(|key| key.iter().all(|a| candidate.contains(a)));
            if subset_is_key {
                continue;
            }
            if is_unique(&candidate) || is_superkey(&candidate, columns, fds) {
                found.push(candidate);
            }
        }
        // Prefer the smallest keys: stop growing once any size succeeds.
        if !found.is_empty() {
            break;
        }
    }
    found
}

/// All k-element combinations of `items`, in lexicographic position order.
fn combinations(items: &[String], k: usize) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn go(items: &[String], k: usize, start: usize, current: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i].clone());
            go(items, k, i + 1, current, out);
            current.pop();
        }
    }
    go(items, k, 0, &mut current, &mut out);
    out
}
