//! Attribute closure computation under a set of functional dependencies.

use indexmap::IndexSet;

use super::types::Fd;

/// Compute the closure of `attrs` under `fds`: the smallest attribute set
/// containing `attrs` that is closed under the dependencies.
///
/// Fixed-point iteration: each pass adds the RHS of every dependency whose
/// LHS is already covered, until a full pass adds nothing. Monotone
/// (`attrs ⊆ closure(attrs)`) and idempotent. Worst case O(passes × |fds|)
/// with passes bounded by the attribute count; converges in a few passes
/// in practice.
///
/// An empty FD set or empty attribute set is valid and leaves the closure
/// at the input itself.
pub fn closure(attrs: &[String], fds: &[Fd]) -> IndexSet<String> {
    let mut closed: IndexSet<String> = attrs.iter().cloned().collect();
    let mut changed = true;
    while changed {
        changed = false;
        for fd in fds {
            if fd.lhs.iter().all(|a| closed.contains(a)) && !closed.contains(&fd.rhs) {
                closed.insert(fd.rhs.clone());
                changed = true;
            }
        }
    }
    closed
}

/// Whether `candidate` is a superkey: its closure under `fds` covers every
/// column in `columns`.
pub fn is_superkey(candidate: &[String], columns: &[String], fds: &[Fd]) -> bool {
    let closed = closure(candidate, fds);
    columns.iter().all(|c| closed.contains(c))
}
