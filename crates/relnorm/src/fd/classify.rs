//! Classification of mined dependencies against the candidate keys.

use serde::{Deserialize, Serialize};

use super::closure::closure;
use super::types::Fd;

/// Mined dependencies partitioned into full, partial and transitive sets.
/// The three lists are disjoint and preserve input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyClassification {
    /// LHS is exactly a candidate key, or a determinant outside every key
    /// that is not transitively reachable from one.
    pub full: Vec<Fd>,
    /// LHS is a strict, non-key subset of some candidate key.
    pub partial: Vec<Fd>,
    /// LHS sits inside some key's closure while the RHS does not.
    pub transitive: Vec<Fd>,
}

impl DependencyClassification {
    /// Total number of classified dependencies.
    pub fn len(&self) -> usize {
        self.full.len() + self.partial.len() + self.transitive.len()
    }

    /// Whether nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `fds` into full / partial / transitive relative to
/// `candidate_keys`.
///
/// A determinant contained in no key and not reachable through any key's
/// closure falls back to `full`. That is a deliberate, conservative default
/// for the heuristic model: such a dependency more likely signals a gap in
/// key discovery than a true full dependency, but it is reported rather
/// than dropped.
pub fn classify_dependencies(fds: &[Fd], candidate_keys: &[Vec<String>]) -> DependencyClassification {
    let mut classified = DependencyClassification::default();

    let subset_of_key = |attrs: &[String]| {
        candidate_keys
            .iter()
            .any(|key| attrs.iter().all(|a| key.contains(a)))
    };

    for fd in fds {
        if subset_of_key(&fd.lhs) {
            let equals_key = candidate_keys
                .iter()
                .any(|key| key.len() == fd.lhs.len() && key.iter().all(|a| fd.lhs_contains(a)));
            if equals_key {
                classified.full.push(fd.clone());
            } else {
                classified.partial.push(fd.clone());
            }
        } else {
            let is_transitive = candidate_keys.iter().any(|key| {
                let closed = closure(key, fds);
                fd.lhs.iter().all(|a| closed.contains(a)) && !closed.contains(&fd.rhs)
            });
            if is_transitive {
                classified.transitive.push(fd.clone());
            } else {
                classified.full.push(fd.clone());
            }
        }
    }

    classified
}
