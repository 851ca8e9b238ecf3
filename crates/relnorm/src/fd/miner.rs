//! Heuristic functional dependency mining from sample rows.
//!
//! Exact single-attribute LHS → RHS dependencies are mined by a
//! contradiction scan; pair-attribute LHS mining is optional and bounded
//! to keep output and runtime under control on wide datasets.

use std::collections::{HashMap, HashSet};

use super::types::Fd;
use crate::relation::Row;

/// Stands in for a null cell when building determinant value keys.
/// Distinct from any real string value; equal only to another null.
const NULL_MARKER: &str = "\u{0}null\u{0}";

/// Bounds for the mining passes.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Whether to run the pair-LHS pass at all.
    pub try_pairs: bool,
    /// Maximum number of column pairs to test.
    pub limit_pairs: usize,
    /// A pair whose distinct value combinations exceed this fraction of
    /// the row count is pruned as an uninformative near-unique determinant.
    pub near_unique_ratio: f64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            try_pairs: true,
            limit_pairs: 50,
            near_unique_ratio: 0.95,
        }
    }
}

fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).unwrap_or(NULL_MARKER)
}

fn pair_key(row: &Row, a: &str, b: &str) -> String {
    format!("{}\u{1f}{}", cell(row, a), cell(row, b))
}

/// Whether `determine(row)` functionally determines `rhs` across all rows:
/// maps each determinant key to the first-seen RHS value and fails on the
/// first contradiction.
fn determines<'a, K, F>(rows: &'a [Row], rhs: &str, mut determinant: F) -> bool
where
    K: std::hash::Hash + Eq,
    F: FnMut(&'a Row) -> K,
{
    let mut seen: HashMap<K, Option<&'a str>> = HashMap::new();
    for row in rows {
        let key = determinant(row);
        let value = row.get(rhs);
        match seen.get(&key) {
            Some(first) => {
                if *first != value {
                    return false;
                }
            }
            None => {
                seen.insert(key, value);
            }
        }
    }
    true
}

/// Mine exact single-attribute dependencies: for every ordered pair of
/// distinct columns (A, B), record {A} → B unless some row contradicts it.
/// Cost O(|columns|² × |rows|).
pub fn mine_single_fds(rows: &[Row], columns: &[String]) -> Vec<Fd> {
    let mut fds = Vec::new();
    if rows.is_empty() {
        return fds;
    }

    for a in columns {
        for b in columns {
            if a == b {
                continue;
            }
            if determines(rows, b, |row| cell(row, a)) {
                fds.push(Fd::new([a.clone()], b.clone()));
            }
        }
    }
    fds
}

/// Mine pair-LHS dependencies with pruning.
///
/// Columns are sorted by ascending distinct-value cardinality so
/// lower-cardinality (more informative) pairs are tested first within the
/// `limit_pairs` budget. Near-unique pairs are skipped: when almost every
/// row has its own (A, B) combination the pair determines everything
/// trivially and would explode the output.
pub fn mine_pair_fds(rows: &[Row], columns: &[String], config: &MinerConfig) -> Vec<Fd> {
    let mut fds = Vec::new();
    if rows.is_empty() {
        return fds;
    }

    let distinct_count = |col: &str| -> usize {
        rows.iter().map(|r| cell(r, col)).collect::<HashSet<_>>().len()
    };
    let mut sorted: Vec<&String> = columns.iter().collect();
    sorted.sort_by_key(|c| distinct_count(c.as_str()));

    let mut tested = 0;
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            if tested >= config.limit_pairs {
                return fds;
            }
            let (a, b) = (sorted[i], sorted[j]);

            let combos: HashSet<String> = rows.iter().map(|r| pair_key(r, a, b)).collect();
            if combos.len() as f64 / rows.len().max(1) as f64 > config.near_unique_ratio {
                tested += 1;
                continue;
            }

            for rhs in columns {
                if rhs == a || rhs == b {
                    continue;
                }
                if determines(rows, rhs, |row| pair_key(row, a, b)) {
                    fds.push(Fd::new([a.clone(), b.clone()], rhs.clone()));
                }
            }
            tested += 1;
        }
    }
    fds
}

/// Combined miner: the union of single- and pair-LHS dependencies,
/// de-duplicated by (LHS set, RHS) identity with later finds dropped.
pub fn mine_fds(rows: &[Row], columns: &[String], config: &MinerConfig) -> Vec<Fd> {
    let mut fds = mine_single_fds(rows, columns);
    if !config.try_pairs {
        return fds;
    }

    let mut seen: HashSet<String> = fds.iter().map(Fd::identity).collect();
    for fd in mine_pair_fds(rows, columns, config) {
        if seen.insert(fd.identity()) {
            fds.push(fd);
        }
    }
    fds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(c, v)| (c.to_string(), Some(v.to_string())))
            .collect()
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mine_single_fd() {
        let rows = vec![
            row(&[("A", "1"), ("B", "x")]),
            row(&[("A", "2"), ("B", "y")]),
            row(&[("A", "1"), ("B", "x")]),
        ];
        let fds = mine_single_fds(&rows, &cols(&["A", "B"]));
        assert!(fds.contains(&Fd::new(["A"], "B")));
    }

    #[test]
    fn test_mine_single_rejects_contradiction() {
        let rows = vec![
            row(&[("A", "1"), ("B", "x")]),
            row(&[("A", "1"), ("B", "y")]),
        ];
        let fds = mine_single_fds(&rows, &cols(&["A", "B"]));
        assert!(!fds.contains(&Fd::new(["A"], "B")));
        // B's values are unique, so {B} -> A still holds.
        assert!(fds.contains(&Fd::new(["B"], "A")));
    }

    #[test]
    fn test_null_determines_consistently() {
        // Null on A maps to the same B both times; null equals null here.
        let rows = vec![
            Row::from_iter([("A".to_string(), None), ("B".to_string(), Some("x".to_string()))]),
            Row::from_iter([("A".to_string(), None), ("B".to_string(), Some("x".to_string()))]),
            row(&[("A", "1"), ("B", "y")]),
        ];
        let fds = mine_single_fds(&rows, &cols(&["A", "B"]));
        assert!(fds.contains(&Fd::new(["A"], "B")));
    }

    #[test]
    fn test_mine_pair_fd() {
        let rows = vec![
            row(&[("A", "1"), ("B", "1"), ("C", "x")]),
            row(&[("A", "1"), ("B", "2"), ("C", "y")]),
            row(&[("A", "1"), ("B", "1"), ("C", "x")]),
        ];
        let fds = mine_pair_fds(&rows, &cols(&["A", "B", "C"]), &MinerConfig::default());
        assert!(fds
            .iter()
            .any(|fd| fd.rhs == "C" && fd.lhs_contains("A") && fd.lhs_contains("B")));
    }

    #[test]
    fn test_near_unique_pair_pruned() {
        // Every (A, B) combination is unique: the pair must be pruned.
        let rows: Vec<Row> = (0..20)
            .map(|i| {
                row(&[
                    ("A", &i.to_string()[..]),
                    ("B", &(i * 2).to_string()[..]),
                    ("C", "fixed"),
                ])
            })
            .collect();
        let fds = mine_pair_fds(&rows, &cols(&["A", "B", "C"]), &MinerConfig::default());
        assert!(fds.is_empty());
    }

    #[test]
    fn test_combined_dedups() {
        let rows = vec![
            row(&[("A", "1"), ("B", "x")]),
            row(&[("A", "2"), ("B", "y")]),
        ];
        let fds = mine_fds(&rows, &cols(&["A", "B"]), &MinerConfig::default());
        let mut identities: Vec<String> = fds.iter().map(Fd::identity).collect();
        identities.sort();
        identities.dedup();
        assert_eq!(identities.len(), fds.len());
    }

    #[test]
    fn test_empty_rows_yield_nothing() {
        assert!(mine_fds(&[], &cols(&["A", "B"]), &MinerConfig::default()).is_empty());
    }
}
