//! Functional dependency type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A functional dependency LHS → RHS: equal values on the LHS attributes
/// imply an equal value on the single RHS attribute, across all rows.
/// Nulls count as a value equal to themselves here.
///
/// The LHS is a set carried in discovery order; the RHS never appears in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fd {
    /// Determinant attributes (non-empty).
    pub lhs: Vec<String>,
    /// Determined attribute.
    pub rhs: String,
}

impl Fd {
    /// Create a dependency from determinant attributes and a determined one.
    pub fn new(lhs: impl IntoIterator<Item = impl Into<String>>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into_iter().map(Into::into).collect(),
            rhs: rhs.into(),
        }
    }

    /// Whether the determinant contains the given attribute.
    pub fn lhs_contains(&self, attr: &str) -> bool {
        self.lhs.iter().any(|a| a == attr)
    }

    /// Identity key for de-duplicating mined dependencies by
    /// (LHS set, RHS). LHS order is normalized by sorting.
    pub fn identity(&self) -> String {
        let mut lhs = self.lhs.clone();
        lhs.sort();
        format!("{}\u{1f}{}", lhs.join(","), self.rhs)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} -> {}", self.lhs.join(", "), self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_lhs_order() {
        let a = Fd::new(["x", "y"], "z");
        let b = Fd::new(["y", "x"], "z");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), Fd::new(["x"], "z").identity());
    }

    #[test]
    fn test_display() {
        let fd = Fd::new(["a", "b"], "c");
        assert_eq!(fd.to_string(), "{a, b} -> c");
    }
}
